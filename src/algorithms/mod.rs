//! Core matching algorithms
//!
//! Standalone functions over `&str` and `&[char]` so the matcher can compose
//! them per tier.

pub mod normalize;
pub mod substring;
pub mod window;

pub use normalize::{fold_case, CaseMode};
pub use substring::{contains, SubstringFinder};
pub use window::{count_mismatches, count_mismatches_bounded, find_window, has_window};
