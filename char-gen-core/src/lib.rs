//! Character-level n-gram language model library.
//!
//! This crate provides a windowed character model including:
//! - Training from a sequential character stream (corpus)
//! - Probability finalization (per-record `p` and cumulative `cp`)
//! - Weighted random sampling with an optional fixed seed
//! - Text generation conditioned on the trailing window
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core model structures and generation logic.
///
/// This module exposes the high-level `LanguageModel` interface while
/// keeping internal distribution representations private.
pub mod model;

/// I/O utilities (corpus file loading).
///
/// Not exposed
pub(crate) mod io;
