//! Top-level module for the character n-gram model.
//!
//! This crate provides a fixed-window character-level language model,
//! including:
//! - Per-window character frequency distributions (`Distribution`)
//! - A trainable, queryable model (`LanguageModel`)

/// High-level interface for training on a corpus and generating text.
///
/// Exposes construction (seeded or unseeded), training from a character
/// stream or a file, and text generation.
pub mod language_model;

/// Internal representation of one window's character distribution.
///
/// Tracks observation counts in first-seen order and supports weighted
/// random sampling through cumulative probabilities. This module is not
/// exposed publicly.
mod distribution;
