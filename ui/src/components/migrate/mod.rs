pub mod amount_input;
pub mod liquidity_pairs;
pub mod lp_token_select;
pub mod migrate_buttons;
pub mod mode_select;

pub use amount_input::*;
pub use liquidity_pairs::*;
pub use lp_token_select::*;
pub use migrate_buttons::*;
pub use mode_select::*;
