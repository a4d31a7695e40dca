//! LP token migration
//!
//! Domain types, the reducer-style store shared by every part of the page,
//! fixed-point amount handling and the pure view decisions the components render.
//!
//! All writes go through [`MigrateAction`]; the reducer re-applies the page
//! invariants (one selected pair, amount cleared whenever no pair is ready)
//! after every action.

pub mod actions;
pub mod amount;
pub mod hooks;
pub mod state;
pub mod types;
pub mod view;

pub use amount::*;
pub use hooks::*;
pub use state::*;
pub use types::*;
pub use view::*;
