//! Projected balance series for charting.

use chrono::NaiveDate;
use runway_core::Transaction;
use serde::Serialize;

use crate::balance::{effective_balance, future_pending};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub balance: f64,
}

/// Today's settled balance followed by one point per upcoming pending row.
///
/// Unlike the crunch walk this view credits pending inflows, so the final point
/// equals the action generator's projected balance.
pub fn project_balance_series(transactions: &[Transaction], current_balance: f64, today: NaiveDate) -> Vec<BalancePoint> {
    let start = effective_balance(transactions, current_balance);
    let upcoming = future_pending(transactions, today);

    let mut points = Vec::with_capacity(upcoming.len() + 1);
    points.push(BalancePoint {
        date: today,
        balance: start,
    });

    let mut running = start;
    for t in upcoming {
        running += t.signed_amount();
        points.push(BalancePoint {
            date: t.date,
            balance: running,
        });
    }
    points
}
