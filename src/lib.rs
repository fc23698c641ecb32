pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod engine;
pub mod error;
pub mod store;

pub use config::Config;
pub use db::{init_db, Repository};
pub use domain::{
    Action, ActionError, Decimal, Match, MatchId, MatchStatus, MatchType, Portfolio, StockLot,
    Symbol, User, UserId,
};
pub use engine::{reduce, PortfolioSummary, State};
pub use error::AppError;
pub use store::Store;
