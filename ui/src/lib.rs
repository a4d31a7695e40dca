//! This crate contains the LP token migration page and everything behind it.

pub mod app;
pub use app::{MigrateApp, MigrateV2};

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
