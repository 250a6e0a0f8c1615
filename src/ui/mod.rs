//! Presentational controls for the admin catalog
pub mod grid_control;

pub use grid_control::{render, Badge, GridControlFragment, SelectionCheckbox, VisibilityToggle};
