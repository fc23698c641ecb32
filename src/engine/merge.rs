use crate::domain::StockLot;

/// Merge `incoming` lots into `existing` holdings by symbol.
///
/// An incoming lot for a held symbol replaces that lot in place; its shares
/// and price are taken as-is, not added to the held quantity. Incoming lots
/// for new symbols are appended in the order given. Held lots not mentioned
/// in `incoming` are carried over unchanged.
pub fn merge_lots(existing: &[StockLot], incoming: &[StockLot]) -> Vec<StockLot> {
    if incoming.is_empty() {
        return existing.to_vec();
    }
    if existing.is_empty() {
        return incoming.to_vec();
    }

    let mut merged = existing.to_vec();
    for lot in incoming {
        match merged.iter_mut().find(|held| held.symbol == lot.symbol) {
            Some(held) => {
                held.shares = lot.shares;
                held.price = lot.price;
            }
            None => merged.push(lot.clone()),
        }
    }
    merged
}
