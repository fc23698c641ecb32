use crate::domain::{Decimal, Match, MatchId, Symbol};
use serde::Serialize;

/// Read-only valuation of a match portfolio at its recorded lot prices.
///
/// This is a view over reducer output. It never feeds back into a state
/// transition; the reducer keeps whatever cash and total value the trade
/// actions supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub match_id: MatchId,
    pub available_cash: Decimal,
    /// Sum of shares * price over all lots.
    pub holdings_value: Decimal,
    /// Cash plus holdings.
    pub net_worth: Decimal,
    /// Net worth minus the match's starting funds.
    pub gain_loss: Decimal,
    /// Gain/loss as a percentage of starting funds, two decimal places.
    /// Zero when the match started with no funds.
    pub gain_loss_pct: Decimal,
    pub positions: Vec<PositionValue>,
}

/// One slice of the allocation breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionValue {
    pub symbol: Symbol,
    pub shares: Decimal,
    pub price: Decimal,
    pub market_value: Decimal,
}

impl PortfolioSummary {
    pub fn for_match(record: &Match) -> Self {
        let portfolio = &record.portfolio;

        let positions: Vec<PositionValue> = portfolio
            .stocks
            .iter()
            .map(|lot| PositionValue {
                symbol: lot.symbol.clone(),
                shares: lot.shares,
                price: lot.price,
                market_value: lot.market_value(),
            })
            .collect();

        let holdings_value: Decimal = positions.iter().map(|p| p.market_value).sum();
        let net_worth = portfolio.available_cash + holdings_value;
        let gain_loss = net_worth - record.starting_funds;
        let gain_loss_pct = if record.starting_funds.is_zero() {
            Decimal::zero()
        } else {
            (gain_loss * Decimal::hundred() / record.starting_funds).round_dp(2)
        };

        Self {
            match_id: record.id.clone(),
            available_cash: portfolio.available_cash,
            holdings_value,
            net_worth,
            gain_loss,
            gain_loss_pct,
            positions,
        }
    }

    /// Allocation by symbol with cash as a final `"cash"` slice, in holding
    /// order. This is what the portfolio donut chart plots.
    pub fn allocation(&self) -> Vec<(String, Decimal)> {
        self.positions
            .iter()
            .map(|p| (p.symbol.to_string(), p.market_value))
            .chain(std::iter::once(("cash".to_string(), self.available_cash)))
            .collect()
    }
}
