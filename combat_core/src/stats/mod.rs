//! Attribute resolver - aggregation of modifiers into derived combat stats

mod derived;
mod totals;

pub use derived::{derive_stats, derive_stats_with_constants, DerivedStats};
pub use totals::ModifierTotals;
