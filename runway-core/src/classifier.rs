//! Keyword classifier: payee/description text to a spending [`Category`].
//!
//! Deterministic substring matching. The table is scanned in order and the first
//! keyword found anywhere in the text wins, so the order is part of the behaviour.

use crate::category::Category;
use crate::transaction::TxType;

const KEYWORDS: &[(&str, Category)] = &[
    ("salary", Category::Payroll),
    ("wages", Category::Payroll),
    ("payroll", Category::Payroll),
    ("bonus", Category::Payroll),
    ("tax", Category::Taxes),
    ("gst", Category::Taxes),
    ("vat", Category::Taxes),
    ("irs", Category::Taxes),
    ("rent", Category::Rent),
    ("lease", Category::Rent),
    ("electricity", Category::Rent),
    ("utility", Category::Rent),
    ("aws", Category::Software),
    ("google", Category::Software),
    ("adobe", Category::Software),
    ("subscription", Category::Software),
    ("saas", Category::Software),
    ("hosting", Category::Software),
    ("ads", Category::Marketing),
    ("facebook", Category::Marketing),
    ("linkedin", Category::Marketing),
    ("meta", Category::Marketing),
    ("travel", Category::Travel),
    ("hotel", Category::Travel),
    ("flight", Category::Travel),
    ("uber", Category::Travel),
    ("food", Category::Travel),
    ("contractor", Category::Contractors),
    ("consultant", Category::Contractors),
    ("legal", Category::Contractors),
    ("upwork", Category::Contractors),
];

/// Classify free text (normally `payee + " " + description`).
///
/// Inflows are always revenue; outflows fall back to `Uncategorized`.
pub fn classify(text: &str, tx_type: TxType) -> Category {
    if tx_type == TxType::In {
        return Category::Revenue;
    }

    let text = text.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Uncategorized)
}

/// Classify a payee/description pair the way the normalizer does.
pub fn classify_entry(payee: &str, description: &str, tx_type: TxType) -> Category {
    classify(&format!("{payee} {description}"), tx_type)
}
