//! Card value types and deck construction.

mod card;
pub mod deck;

pub use card::{Card, Color, Rank};

use smallvec::SmallVec;

/// A seat's hand. Inline capacity covers the standard 7-card deal.
pub type Hand = SmallVec<[Card; 8]>;
