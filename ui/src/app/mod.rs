//! Page-level components

pub mod migrate_v2;

pub use migrate_v2::{MigrateApp, MigrateV2};
