//! Domain types for the match and portfolio model.
//!
//! This module provides:
//! - Lossless numeric handling via Decimal wrapper
//! - Identifier primitives: MatchId, UserId, Symbol
//! - Match, Portfolio and StockLot records
//! - Actions and their dispatch-boundary validation
//! - Registered users

pub mod action;
pub mod decimal;
pub mod match_record;
pub mod portfolio;
pub mod primitives;
pub mod user;

pub use action::{Action, ActionError, MatchEntry, TradeOrder};
pub use decimal::Decimal;
pub use match_record::{Match, MatchStatus, MatchType};
pub use portfolio::{Portfolio, StockLot};
pub use primitives::{MatchId, Symbol, UserId};
pub use user::{NewUser, User};
