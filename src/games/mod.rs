//! Weekly games rotation: which game rows are live this week, and the flip
//! that rewrites their `IsActive` flags.

pub mod flag;
pub mod model;
pub mod scheduler;
pub mod week;

pub use flag::ActiveFlag;
pub use model::{ActiveGame, GAMES_COLUMNS, GAMES_SHEET, GameRecord, NewGame};
pub use scheduler::{FlipOutcome, GameScheduler};
pub use week::{AcceptableStarts, upcoming_friday, week_start_of};
