//! The turn engine and its scheduler.

mod scheduler;
mod turn;

pub use scheduler::{ScheduledTask, TurnScheduler};
pub use turn::{GameBuilder, TurnEngine};
