//! Count legal move paths.

use crate::position::Position;

/// Counts legal move paths of a given length.
///
/// Paths with mate or stalemate are not counted unless it occurs in the
/// final position. Useful for comparing, testing and debugging move
/// generation correctness and performance.
///
/// # Examples
///
/// ```
/// use sakk::{perft, Position};
///
/// let pos = Position::default();
/// assert_eq!(perft(&pos, 1), 20);
/// assert_eq!(perft(&pos, 2), 400);
/// ```
pub fn perft(pos: &Position, depth: u32) -> u64 {
    if depth < 1 {
        1
    } else {
        let moves = pos.legal_moves();

        if depth == 1 {
            moves.len() as u64
        } else {
            moves
                .iter()
                .map(|m| perft(&pos.play_unchecked(*m), depth - 1))
                .sum()
        }
    }
}
