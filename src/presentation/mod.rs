pub mod html;
pub mod table;
pub mod view;

pub use view::{default_bracket, default_controls, Control, Controls, LeaderboardView, LoadState, ViewState};
