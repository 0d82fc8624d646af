//! Rule predicates.

pub mod legality;

pub use legality::{can_play, has_legal_move};
