//! Radial skill-tree visualization component.
//!
//! Renders an interactive skill tree on an HTML canvas with:
//! - A central star node with concentric rings of tiered nodes placed by a
//!   radial layout
//! - Hover-driven highlighting of a node and its direct connections
//! - Free-form editing: node dragging, user-drawn connections, deletion
//! - Pan and zoom
//!
//! # Example
//!
//! ```ignore
//! use skill_graph::{SkillTreeCanvas, TreeData};
//!
//! let data = TreeData::sample();
//!
//! view! { <SkillTreeCanvas data=data.into() fullscreen=true /> }
//! ```

mod changes;
mod component;
mod highlight;
mod layout;
mod panel;
mod render;
mod state;
pub mod theme;
mod types;

pub use component::SkillTreeCanvas;
pub use panel::SidePanel;
pub use theme::Theme;
pub use types::{Ring, SkillEdge, SkillItem, SkillNode, Tier, TreeData};
