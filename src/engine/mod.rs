//! Pure computation engine for match and portfolio state.
//!
//! Nothing in here performs I/O or reads the clock; every function maps its
//! inputs to a new value.

pub mod locator;
pub mod merge;
pub mod reducer;
pub mod state;
pub mod valuation;

pub use locator::find_match_index;
pub use merge::merge_lots;
pub use reducer::reduce;
pub use state::State;
pub use valuation::{PortfolioSummary, PositionValue};
