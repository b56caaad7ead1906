//! Balance primitives shared by the forecast and the action generator.

use chrono::NaiveDate;
use runway_core::Transaction;

/// Opening balance plus every PAID row, whatever its date.
pub fn effective_balance(transactions: &[Transaction], current_balance: f64) -> f64 {
    transactions
        .iter()
        .filter(|t| t.is_paid())
        .fold(current_balance, |acc, t| acc + t.signed_amount())
}

/// Not yet settled and dated today or later. Past-dated pending rows are ignored.
pub fn is_future_pending(t: &Transaction, today: NaiveDate) -> bool {
    t.is_pending() && t.date >= today
}

/// Future pending rows, ascending by date. Same-day rows keep input order.
pub fn future_pending(transactions: &[Transaction], today: NaiveDate) -> Vec<&Transaction> {
    let mut out: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| is_future_pending(t, today))
        .collect();
    out.sort_by_key(|t| t.date);
    out
}

/// Conservative walk: pending inflows are not credited, pending outflows are debited.
/// Returns the date of the first row that takes the balance below zero.
pub fn crunch_date(future_pending: &[&Transaction], start_balance: f64) -> Option<NaiveDate> {
    let mut running = start_balance;
    for t in future_pending {
        if t.is_inflow() {
            continue;
        }
        running -= t.amount;
        if running < 0.0 {
            return Some(t.date);
        }
    }
    None
}
