//! Action generator: turns the upcoming ledger into at most three ranked
//! recommendation cards (crunch alert, collect, delay).

use chrono::NaiveDate;
use runway_core::money::grouped;
use runway_core::time::short_date;
use runway_core::{ActionChannel, Region, Transaction};
use serde::Serialize;

use crate::balance::{crunch_date, effective_balance, future_pending, is_future_pending};

pub const ALERT_ID: &str = "alert-1";
pub const COLLECT_ID: &str = "in-1";
pub const DELAY_ID: &str = "out-1";

/// Lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionPriority {
    Urgent = 0,
    High = 1,
    Normal = 2,
}

/// A recommendation card. `id` names the slot, so identical inputs give identical ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowAction {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Signed: the crunch alert carries the projected balance, which may be negative.
    pub amount: f64,
    pub priority: ActionPriority,
    pub action_type: ActionChannel,
    pub contact_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crunch_date: Option<String>,
}

/// Build the action list for `region` as of `today`.
pub fn generate_actions(
    transactions: &[Transaction],
    current_balance: f64,
    region: Region,
    today: NaiveDate,
) -> Vec<CashFlowAction> {
    let profile = region.profile();
    let channel = profile.preferred_channel;
    let mut actions = Vec::new();

    let effective = effective_balance(transactions, current_balance);
    let upcoming = future_pending(transactions, today);

    // Optimistic: credits pending inflows. Only gates the alert.
    let projected = effective + upcoming.iter().map(|t| t.signed_amount()).sum::<f64>();
    let crunch = crunch_date(&upcoming, effective);

    if projected < 0.0 || crunch.is_some() {
        let description = match crunch {
            Some(d) => format!("You will hit negative cash balance on {}.", short_date(d)),
            None => format!(
                "Projected negative balance (-{}{}).",
                profile.currency_symbol,
                grouped(projected.abs())
            ),
        };
        actions.push(CashFlowAction {
            id: ALERT_ID.to_string(),
            title: "CASH CRUNCH ALERT".to_string(),
            description,
            amount: projected,
            priority: ActionPriority::Urgent,
            action_type: channel,
            contact_name: "Investors/Lenders".to_string(),
            crunch_date: crunch.map(short_date),
        });
    }

    // Candidates are scanned in input order so ties go to the earlier row.
    let candidates = move || transactions.iter().filter(move |t| is_future_pending(t, today));

    if let Some(receivable) = largest(candidates().filter(|t| t.is_inflow())) {
        actions.push(CashFlowAction {
            id: COLLECT_ID.to_string(),
            title: "Collect Payment".to_string(),
            description: format!("Largest receipt from {} ({})", receivable.payee, receivable.category),
            amount: receivable.amount,
            priority: ActionPriority::High,
            action_type: channel,
            contact_name: receivable.payee.clone(),
            crunch_date: None,
        });
    }

    let negotiable = candidates().filter(|t| t.is_outflow() && !t.category.is_sacred());
    if let Some(payable) = largest(negotiable) {
        actions.push(CashFlowAction {
            id: DELAY_ID.to_string(),
            title: "Delay Payment".to_string(),
            description: format!("Largest negotiable expense: {} ({}).", payable.payee, payable.category),
            amount: payable.amount,
            priority: ActionPriority::Normal,
            action_type: channel,
            contact_name: payable.payee.clone(),
            crunch_date: None,
        });
    }

    log::debug!("generated {} actions (projected balance {projected:.2})", actions.len());
    actions
}

/// Largest amount; on ties the earliest candidate wins.
fn largest<'a>(candidates: impl Iterator<Item = &'a Transaction>) -> Option<&'a Transaction> {
    candidates.fold(None::<&'a Transaction>, |best, t| match best {
        Some(b) if b.amount >= t.amount => Some(b),
        _ => Some(t),
    })
}
