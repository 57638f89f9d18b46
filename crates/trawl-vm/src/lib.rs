//! Matching engine for compiled trawl patterns.
//!
//! This crate walks a [`trawl_compiler::Pattern`] and a candidate element
//! tree together, producing a [`trawl_core::Record`] per accepted match.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

pub use engine::{MatchError, MatchLimits, Matcher, extract};
