//! Card value types.
//!
//! Cards are immutable values created once at deck-build time and only ever
//! relocated between containers (draw pile, hands, discard pile). A wild
//! card carries no color of its own; the color legality is judged against is
//! always the table's active color.

use serde::{Deserialize, Serialize};

/// One of the four base colors.
///
/// The wild marker is deliberately not a variant: `TableState::active_color`
/// must always be a base color, and `Option<Color>` on [`Card`] models the
/// colorless wilds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// All base colors, in the fixed tie-break order used by the AI policy.
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];
}

/// Card rank: a numeral or one of the special/wild ranks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Numeral 0-9.
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Rank {
    /// Whether this rank is one of the two wild ranks.
    #[must_use]
    pub fn is_wild(self) -> bool {
        matches!(self, Rank::Wild | Rank::WildDrawFour)
    }
}

/// An immutable card value.
///
/// `color` is `None` exactly when the rank is wild.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Option<Color>,
    pub rank: Rank,
}

impl Card {
    /// Create a colored (non-wild) card.
    ///
    /// Panics if the rank is wild; wilds are built with [`Card::wild`] or
    /// [`Card::wild_draw_four`].
    #[must_use]
    pub fn colored(color: Color, rank: Rank) -> Self {
        assert!(!rank.is_wild(), "wild ranks carry no color");
        if let Rank::Number(n) = rank {
            assert!(n <= 9, "numerals are 0-9");
        }
        Self {
            color: Some(color),
            rank,
        }
    }

    /// Create a standard wild card.
    #[must_use]
    pub fn wild() -> Self {
        Self {
            color: None,
            rank: Rank::Wild,
        }
    }

    /// Create a wild-draw-four card.
    #[must_use]
    pub fn wild_draw_four() -> Self {
        Self {
            color: None,
            rank: Rank::WildDrawFour,
        }
    }

    /// Whether this card is wild (colorless).
    #[must_use]
    pub fn is_wild(&self) -> bool {
        self.rank.is_wild()
    }

    /// Whether this card is a numeral.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self.rank, Rank::Number(_))
    }
}
