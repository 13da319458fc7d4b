//! Move advice from an external service, validated and with a local
//! fallback.
//!
//! An [`Advisor`] produces a candidate move in the algebraic notation
//! of [`san`](crate::san). Whatever it replies is decoded against the
//! current legal moves; a reply that decodes to no legal move, like
//! any transport failure, is absorbed and the material evaluator of
//! [`eval`](crate::eval) takes over. An unvalidated suggestion is
//! never returned.
//!
//! # Examples
//!
//! ```
//! use core::convert::Infallible;
//!
//! use sakk::{advice::{self, Advisor, AdviceRequest}, Position, Square};
//!
//! struct Oracle;
//!
//! impl Advisor for Oracle {
//!     type Error = Infallible;
//!
//!     fn suggest(&mut self, _: &AdviceRequest<'_>) -> Result<String, Infallible> {
//!         Ok("e4".into())
//!     }
//! }
//!
//! let m = advice::advised_move(&Position::default(), &[], &mut Oracle).unwrap();
//! assert_eq!((m.from, m.to), (Square::E2, Square::E4));
//! ```

use alloc::string::{String, ToString};

use crate::{color::Color, eval, fen::Fen, m::Move, position::Position, san::San};

/// A request for advice: everything an external service needs to pick
/// a move.
#[derive(Clone, Debug)]
pub struct AdviceRequest<'a> {
    /// The side to move.
    pub turn: Color,
    /// The position in Forsyth-Edwards Notation.
    pub fen: String,
    /// Prior moves of the game in algebraic notation, oldest first.
    pub history: &'a [String],
}

/// A source of move suggestions, typically a remote service.
///
/// Implementations own their transport and any timeout policy. A
/// suggestion is a single move candidate in algebraic notation;
/// surrounding whitespace is tolerated.
pub trait Advisor {
    /// Transport or service failure.
    type Error;

    /// Produces a candidate move for the given request.
    fn suggest(&mut self, request: &AdviceRequest<'_>) -> Result<String, Self::Error>;
}

/// Picks a move for the side to move: asks the advisor and decodes the
/// reply against the current legal moves. On any failure the choice
/// falls back to [`eval::best_move`].
///
/// `None` only if there is no legal move at all, in which case the
/// advisor is not consulted.
pub fn advised_move<A: Advisor>(
    pos: &Position,
    history: &[String],
    advisor: &mut A,
) -> Option<Move> {
    let moves = pos.legal_moves();
    if moves.is_empty() {
        return None;
    }

    let request = AdviceRequest {
        turn: pos.turn,
        fen: Fen::from_position(pos.clone()).to_string(),
        history,
    };

    if let Ok(reply) = advisor.suggest(&request) {
        if let Ok(m) = San::find_move(reply.trim(), &moves) {
            return Some(m);
        }
    }

    eval::best_move(pos)
}
