//! UI components.

pub mod skill_tree;
