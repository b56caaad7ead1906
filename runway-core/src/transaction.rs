//! Ledger entry types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Direction of money movement. Amounts are always stored as magnitudes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TxType {
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "OUT")]
    Out,
}

/// Settlement state. PAID rows are already reflected in the bank balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TxStatus {
    #[serde(rename = "PAID")]
    Paid,
    #[default]
    #[serde(rename = "PENDING")]
    Pending,
}

impl TxStatus {
    pub fn toggled(self) -> Self {
        match self {
            TxStatus::Paid => TxStatus::Pending,
            TxStatus::Pending => TxStatus::Paid,
        }
    }
}

/// A single ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Calendar day; time-of-day is never kept.
    pub date: NaiveDate,
    pub payee: String,
    #[serde(default)]
    pub description: String,
    /// Non-negative magnitude.
    pub amount: f64,
    #[serde(rename = "type")]
    pub tx_type: TxType,
    pub category: Category,
    #[serde(default)]
    pub status: TxStatus,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        payee: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        tx_type: TxType,
        category: Category,
    ) -> Self {
        Self {
            id: None,
            date,
            payee: payee.into(),
            description: description.into(),
            amount,
            tx_type,
            category,
            status: TxStatus::Pending,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_status(mut self, status: TxStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_inflow(&self) -> bool {
        self.tx_type == TxType::In
    }

    pub fn is_outflow(&self) -> bool {
        self.tx_type == TxType::Out
    }

    pub fn is_paid(&self) -> bool {
        self.status == TxStatus::Paid
    }

    pub fn is_pending(&self) -> bool {
        self.status == TxStatus::Pending
    }

    /// Amount with direction applied: positive for inflows, negative for outflows.
    pub fn signed_amount(&self) -> f64 {
        match self.tx_type {
            TxType::In => self.amount,
            TxType::Out => -self.amount,
        }
    }
}
