//! User Interface Components
//!
//! - **migrate**: mode chooser, pair list, amount field and action buttons
//! - **display**: loading dots, empty states and help tooltips
//! - **inputs**: the decimal amount field

pub mod display;
pub mod inputs;
pub mod migrate;
