//! Fixed spending taxonomy and the static rule flags attached to each category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Spending categories. The set is closed; labels are the wire/display names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "Payroll & Team")]
    Payroll,
    #[serde(rename = "Taxes & Compliance")]
    Taxes,
    #[serde(rename = "Rent & Facilities")]
    Rent,
    #[serde(rename = "Software & Subscriptions")]
    Software,
    #[serde(rename = "Marketing & Ads")]
    Marketing,
    #[serde(rename = "Travel & Entertainment")]
    Travel,
    #[serde(rename = "Contractors & Professional Services")]
    Contractors,
    #[serde(rename = "Office Supplies")]
    OfficeSupplies,
    #[serde(rename = "Sales / Revenue")]
    Revenue,
    #[serde(rename = "Uncategorized")]
    Uncategorized,
}

/// Static policy flags for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRules {
    /// Never suggested for delay.
    pub is_sacred: bool,
    /// Counted toward monthly burn.
    pub is_recurring: bool,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Payroll,
        Category::Taxes,
        Category::Rent,
        Category::Software,
        Category::Marketing,
        Category::Travel,
        Category::Contractors,
        Category::OfficeSupplies,
        Category::Revenue,
        Category::Uncategorized,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Payroll => "Payroll & Team",
            Category::Taxes => "Taxes & Compliance",
            Category::Rent => "Rent & Facilities",
            Category::Software => "Software & Subscriptions",
            Category::Marketing => "Marketing & Ads",
            Category::Travel => "Travel & Entertainment",
            Category::Contractors => "Contractors & Professional Services",
            Category::OfficeSupplies => "Office Supplies",
            Category::Revenue => "Sales / Revenue",
            Category::Uncategorized => "Uncategorized",
        }
    }

    pub fn rules(&self) -> CategoryRules {
        let (is_sacred, is_recurring) = match self {
            Category::Payroll => (true, true),
            Category::Rent | Category::Software => (false, true),
            _ => (false, false),
        };
        CategoryRules {
            is_sacred,
            is_recurring,
        }
    }

    pub fn is_sacred(&self) -> bool {
        self.rules().is_sacred
    }

    pub fn is_recurring(&self) -> bool {
        self.rules().is_recurring
    }

    /// Exact, case-sensitive label lookup. `None` for anything outside the taxonomy.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_label(s).ok_or_else(|| anyhow::anyhow!("unknown category: {s}"))
    }
}
