//! Pedagogical bundling demos from the docs site
//!
//! # Overview
//!
//! Two widgets teach readers what minification and tree shaking do to a
//! bundle. Neither performs real compression or static analysis; both hold a
//! fixed table of samples and derive their numbers from it.
//!
//! Widget state is a plain value. Every action consumes the previous state
//! and returns the next one, so each widget is testable as a pure function of
//! `(state, action)` with derived values recomputed on demand.

pub mod compression;
pub mod treeshake;

/// Rounds to one decimal place, matching how the site formats percentages.
pub(crate) fn round_one_decimal(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

#[test]
fn rounding_is_one_decimal() {
    assert_eq!(round_one_decimal(48.78), 48.8);
    assert_eq!(round_one_decimal(0.04), 0.0);
    assert_eq!(round_one_decimal(90.234), 90.2);
}
