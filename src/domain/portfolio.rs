//! Portfolio and stock lot types.

use crate::domain::{Decimal, Symbol};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A holding of one stock symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLot {
    /// Ticker symbol. Clients send it as `stockSymbol`.
    #[serde(alias = "stockSymbol")]
    pub symbol: Symbol,
    /// Number of shares held.
    pub shares: Decimal,
    /// Price as of the last trade touching this lot.
    pub price: Decimal,
}

impl StockLot {
    pub fn new(symbol: impl Into<String>, shares: Decimal, price: Decimal) -> Self {
        Self {
            symbol: Symbol::new(symbol),
            shares,
            price,
        }
    }

    /// Value of the lot at its recorded price.
    pub fn market_value(&self) -> Decimal {
        self.shares * self.price
    }
}

/// Cash balance plus stock lots for a single match.
///
/// `total_value` and `available_cash` are taken as supplied by the caller;
/// nothing here recomputes them from the holdings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    /// Lots in first-insertion order, at most one per symbol.
    #[serde(default)]
    pub stocks: Vec<StockLot>,
    pub total_value: Decimal,
    #[serde(alias = "available_cash")]
    pub available_cash: Decimal,
}

impl Portfolio {
    /// An all-cash portfolio worth `funds`.
    pub fn opening(funds: Decimal) -> Self {
        Self {
            stocks: Vec::new(),
            total_value: funds,
            available_cash: funds,
        }
    }

    /// Find the lot held for `symbol`, if any.
    pub fn lot(&self, symbol: &Symbol) -> Option<&StockLot> {
        self.stocks.iter().find(|lot| &lot.symbol == symbol)
    }

    /// Check structural invariants: non-negative share counts and cash, and
    /// at most one lot per symbol.
    pub fn validate(&self) -> Result<(), String> {
        if self.available_cash.is_negative() {
            return Err(format!(
                "available cash must be non-negative, got {}",
                self.available_cash
            ));
        }

        let mut seen = HashSet::new();
        for lot in &self.stocks {
            if lot.shares.is_negative() {
                return Err(format!(
                    "shares for {} must be non-negative, got {}",
                    lot.symbol, lot.shares
                ));
            }
            if lot.price.is_negative() {
                return Err(format!(
                    "price for {} must be non-negative, got {}",
                    lot.symbol, lot.price
                ));
            }
            if !seen.insert(&lot.symbol) {
                return Err(format!("duplicate lot for symbol {}", lot.symbol));
            }
        }

        Ok(())
    }
}
