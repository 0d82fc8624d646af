//! Computer-seat decision making.

pub mod policy;

pub use policy::{choose_card_to_play, choose_color_on_wild};
