//! This crate contains a small set of stateless text transformation and
//! inspection utilities: trimming, case conversion, padding and alignment,
//! literal replacement, word splitting, capitalization, substring predicates
//! and numeric-string conversions.
//!
//! The heart of the crate is the word-wrap engine in [`paragraph`], which
//! folds a single-line text into a fixed-width paragraph and merges it back.
//! Everything operates on 8-bit code units: there is no grapheme-cluster or
//! locale awareness, and word boundaries are plain ASCII whitespace.
//!
//! Every function is total over its input domain. Degenerate widths, empty
//! patterns and malformed numerals produce a defined, degraded result instead
//! of an error.

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub mod check;
pub mod convert;
pub mod manipulate;
pub mod paragraph;

pub(crate) mod scan;
