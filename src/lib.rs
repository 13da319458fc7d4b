//! A library for chess vocabulary, move generation and game status.
//!
//! Implements a simplified ruleset: castling, en passant and promotion
//! are not supported.
//!
//! # Examples
//!
//! Generate legal moves in the starting position:
//!
//! ```
//! use sakk::Position;
//!
//! let pos = Position::default();
//! let legals = pos.legal_moves();
//! assert_eq!(legals.len(), 20);
//! ```
//!
//! Play moves:
//!
//! ```
//! # use sakk::Position;
//! use sakk::{Move, Role, Square};
//! #
//! # let pos = Position::default();
//!
//! // 1. e4
//! let pos = pos.play(Move {
//!     piece: Role::Pawn.of(pos.turn),
//!     from: Square::E2,
//!     to: Square::E4,
//!     capture: None,
//! })?;
//! # Ok::<_, sakk::PlayError>(())
//! ```
//!
//! Detect game end conditions:
//!
//! ```
//! # use sakk::Position;
//! use sakk::GameStatus;
//!
//! let pos = Position::default();
//! assert_eq!(pos.status(), GameStatus::Playing);
//! assert_eq!(pos.status().winner(), None); // no winner yet
//! ```
//!
//! Also supports [FEN](fen) and [SAN](san) formats for positions and
//! moves, a material evaluation picking the [best move](eval), and a
//! validated boundary for [external move advice](advice).
//!
//! # Feature flags
//!
//! * `alloc`: Enables APIs which require the
//!   [`alloc`](https://doc.rust-lang.org/stable/alloc/index.html) crate
//!   (e.g. advice requests carrying FEN strings).
//! * `std`: Implies `alloc`. Enabled by default.
//!   For `no_std` environments, this must be disabled with `default-features = false`.
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   types with unique natural representations.

#![no_std]
#![doc(html_root_url = "https://docs.rs/sakk/0.1.0")]
#![forbid(unsafe_op_in_unsafe_fn)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod board;
mod color;
mod m;
mod perft;
mod position;
mod role;
mod square;
mod types;

#[cfg(feature = "alloc")]
pub mod advice;
pub mod attacks;
pub mod eval;
pub mod fen;
pub mod san;

pub use board::{Board, BoardFen};
pub use color::{ByColor, Color};
pub use m::{Move, MoveList, SquareList};
pub use perft::perft;
pub use position::{GameStatus, PlayError, Position};
pub use role::Role;
pub use square::{File, ParseSquareError, Rank, Square};
pub use types::Piece;
