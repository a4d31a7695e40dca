pub mod empty_state;
pub mod loading_indicator;
pub mod question_helper;

pub use empty_state::*;
pub use loading_indicator::*;
pub use question_helper::*;
