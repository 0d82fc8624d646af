//! Special-card effects and forced-draw sequencing.

pub mod forced_draw;
pub mod resolver;

pub use forced_draw::{DrawOutcome, ServeProgress};
pub use resolver::{resolve, EffectOutcome};
