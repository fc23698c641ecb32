use crate::domain::{Action, Match, MatchEntry, Portfolio, TradeOrder};
use std::sync::Arc;

use super::{find_match_index, merge_lots, State};

/// Compute the state that follows `state` once `action` is applied.
///
/// Never fails. A trade against an unknown match, or an unrecognized action
/// carrying a trade payload, yields a copy of `state` with `error` set and the
/// matches untouched. An unrecognized action without a trade payload, and a
/// sell that leaves the portfolio exactly as it was, return `state` itself.
///
/// Buys merge the incoming lots into the held ones; sells replace the
/// holdings with the incoming list. In both cases the action's cash and total
/// value are adopted without recomputation.
pub fn reduce(state: &Arc<State>, action: &Action) -> Arc<State> {
    match action {
        Action::BuyStock(order) => buy(state, order),
        Action::SellStock(order) => sell(state, order),
        Action::CreateMatch(entry) | Action::JoinMatch(entry) => add_match(state, entry),
        Action::Unrecognized { trade: Some(_), .. } => Arc::new(state.rejected()),
        Action::Unrecognized { trade: None, .. } => Arc::clone(state),
    }
}

fn buy(state: &Arc<State>, order: &TradeOrder) -> Arc<State> {
    let Some(index) = find_match_index(&state.matches, &order.match_id) else {
        return Arc::new(state.rejected());
    };

    let held = &state.matches[index].portfolio;
    let portfolio = Portfolio {
        stocks: merge_lots(&held.stocks, &order.portfolio.stocks),
        total_value: order.portfolio.total_value,
        available_cash: order.portfolio.available_cash,
    };

    Arc::new(replace_portfolio(state, index, portfolio))
}

fn sell(state: &Arc<State>, order: &TradeOrder) -> Arc<State> {
    let Some(index) = find_match_index(&state.matches, &order.match_id) else {
        return Arc::new(state.rejected());
    };

    if state.matches[index].portfolio == order.portfolio {
        return Arc::clone(state);
    }

    Arc::new(replace_portfolio(state, index, order.portfolio.clone()))
}

fn add_match(state: &Arc<State>, entry: &MatchEntry) -> Arc<State> {
    let mut matches = state.matches.clone();
    let record = Arc::new(entry.record.clone());

    // Ids stay unique: re-adding a known match replaces it where it sits.
    match find_match_index(&matches, &entry.record.id) {
        Some(index) => matches[index] = record,
        None => matches.push(record),
    }

    Arc::new(State {
        matches,
        current_user_id: state.current_user_id.clone(),
        current_match_id: Some(entry.current_match_id.clone()),
        error: false,
    })
}

fn replace_portfolio(state: &State, index: usize, portfolio: Portfolio) -> State {
    let mut matches = state.matches.clone();
    let updated: Match = matches[index].with_portfolio(portfolio);
    matches[index] = Arc::new(updated);

    State {
        matches,
        current_user_id: state.current_user_id.clone(),
        current_match_id: state.current_match_id.clone(),
        error: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Decimal, MatchId, StockLot};

    fn d(n: i64) -> Decimal {
        Decimal::from(n)
    }

    fn portfolio(stocks: Vec<StockLot>, cash: i64) -> Portfolio {
        Portfolio {
            stocks,
            total_value: d(1_000_000),
            available_cash: d(cash),
        }
    }

    fn two_matches() -> Arc<State> {
        Arc::new(State::with_matches([
            Match::solo("1", "123", d(1_000_000)),
            Match::solo("2", "123", d(1_000_000)),
        ]))
    }

    #[test]
    fn test_buy_shares_untouched_matches() {
        let state = two_matches();
        let action = Action::buy("2", portfolio(vec![StockLot::new("GOOG", d(1), d(5))], 999_995));
        let next = reduce(&state, &action);

        assert!(Arc::ptr_eq(&state.matches[0], &next.matches[0]));
        assert!(!Arc::ptr_eq(&state.matches[1], &next.matches[1]));
        assert_eq!(next.matches[1].portfolio.available_cash, d(999_995));
    }

    #[test]
    fn test_buy_does_not_touch_prior_state() {
        let state = two_matches();
        let action = Action::buy("1", portfolio(vec![StockLot::new("GOOG", d(1), d(5))], 5));
        let _ = reduce(&state, &action);
        assert!(state.matches[0].portfolio.stocks.is_empty());
        assert_eq!(state.matches[0].portfolio.available_cash, d(1_000_000));
    }

    #[test]
    fn test_successful_trade_clears_error() {
        let state = two_matches();
        let rejected = reduce(&state, &Action::buy("nope", portfolio(vec![], 0)));
        assert!(rejected.error);
        let next = reduce(&rejected, &Action::buy("1", portfolio(vec![], 0)));
        assert!(!next.error);
    }

    #[test]
    fn test_sell_unknown_match_is_rejected() {
        let state = two_matches();
        let next = reduce(&state, &Action::sell("9", portfolio(vec![], 0)));
        assert!(next.error);
        assert_eq!(next.matches, state.matches);
    }

    #[test]
    fn test_sell_replaces_holdings() {
        let state = two_matches();
        let bought = reduce(
            &state,
            &Action::buy(
                "1",
                portfolio(
                    vec![
                        StockLot::new("GOOG", d(10), d(100)),
                        StockLot::new("FB", d(10), d(100)),
                    ],
                    998_000,
                ),
            ),
        );
        let sold = reduce(
            &bought,
            &Action::sell("1", portfolio(vec![StockLot::new("FB", d(10), d(100))], 999_000)),
        );
        assert_eq!(
            sold.matches[0].portfolio.stocks,
            vec![StockLot::new("FB", d(10), d(100))]
        );
        assert_eq!(sold.matches[0].portfolio.available_cash, d(999_000));
    }

    #[test]
    fn test_create_match_keeps_ids_unique() {
        let state = two_matches();
        let mut replacement = Match::solo("2", "999", d(50));
        replacement.challenger_id = Some("999".into());
        let next = reduce(&state, &Action::create_match(replacement.clone()));

        assert_eq!(next.matches.len(), 2);
        assert_eq!(*next.matches[1], replacement);
        assert_eq!(next.current_match_id, Some(MatchId::new("2")));
    }

    #[test]
    fn test_add_match_preserves_current_user() {
        let state = Arc::new(State::for_user("123"));
        let next = reduce(&state, &Action::create_match(Match::solo("1", "123", d(10))));
        assert_eq!(next.current_user_id, state.current_user_id);
    }
}
