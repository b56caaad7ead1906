//! Prefilled outreach links for action cards.

use runway_core::ActionChannel;
use urlencoding::encode;

use crate::actions::CashFlowAction;

/// `wa.me` chat link or `mailto:` link, depending on the action's channel.
pub fn action_link(action: &CashFlowAction) -> String {
    match action.action_type {
        ActionChannel::Whatsapp => {
            let text = format!(
                "Hi {}, regarding the payment of {}...",
                action.contact_name, action.amount
            );
            format!("https://wa.me/?text={}", encode(&text))
        }
        ActionChannel::Email => {
            let subject = format!("Payment Action: {}", action.title);
            let body = format!(
                "Hi {}, regarding the amount of {}...",
                action.contact_name, action.amount
            );
            format!("mailto:?subject={}&body={}", encode(&subject), encode(&body))
        }
    }
}

/// Banner link shared when a crunch date is known.
pub fn crunch_alert_link(crunch_date: &str) -> String {
    let text = format!("Emergency Cash Crunch Alert for {crunch_date}");
    format!("https://wa.me/?text={}", encode(&text))
}
