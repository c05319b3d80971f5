//! Utility types.
//!
//! This module provides layout configuration shared by the plot model and
//! the terminal UI.

mod layout_config;

pub use layout_config::{AxisLayoutConfig, CanvasLayoutConfig, LayoutConfig};
