//! # Woodpusher
//! A chessboard model: piece placement, per-piece move pattern enumeration
//! and ASCII rendering.
//!
//! It is usable as both a library to embed into your own projects and a
//! standalone binary for printing boards and move charts.
//!
//! Move generation is purely geometric: each piece kind maps a square to its
//! candidate destinations, bounded by the board edges. There is no turn
//! sequencing, capture resolution or legality filtering.

pub mod chess;
