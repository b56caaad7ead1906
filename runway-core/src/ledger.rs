//! Pure edit operations over a transaction list.
//!
//! Every function takes the current list by reference and returns a new one;
//! callers swap the result in wholesale and recompute forecasts from it.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};

use crate::category::Category;
use crate::transaction::Transaction;

/// Imported rows go in front of what is already there.
pub fn merge_import(imported: &[Transaction], existing: &[Transaction]) -> Vec<Transaction> {
    imported.iter().chain(existing.iter()).cloned().collect()
}

/// Prepend a manually entered transaction under a fresh id.
pub fn add_entry(list: &[Transaction], entry: Transaction, now: DateTime<Utc>) -> Vec<Transaction> {
    let id = fresh_id(list, now);
    log::debug!("adding manual entry {id} ({})", entry.payee);

    let mut out = Vec::with_capacity(list.len() + 1);
    out.push(Transaction {
        id: Some(id),
        ..entry
    });
    out.extend(list.iter().cloned());
    out
}

/// Replace the row whose id matches, keeping that id on the replacement.
pub fn replace_by_id(list: &[Transaction], id: &str, replacement: Transaction) -> Result<Vec<Transaction>> {
    if !list.iter().any(|t| t.id.as_deref() == Some(id)) {
        bail!("no transaction with id {id}");
    }
    Ok(list
        .iter()
        .map(|t| {
            if t.id.as_deref() == Some(id) {
                Transaction {
                    id: Some(id.to_string()),
                    ..replacement.clone()
                }
            } else {
                t.clone()
            }
        })
        .collect())
}

pub fn remove_at(list: &[Transaction], index: usize) -> Result<Vec<Transaction>> {
    check_index(list, index)?;
    Ok(list
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, t)| t.clone())
        .collect())
}

/// Flip PAID <-> PENDING for one row.
pub fn toggle_status_at(list: &[Transaction], index: usize) -> Result<Vec<Transaction>> {
    update_at(list, index, |t| t.status = t.status.toggled())
}

pub fn set_category_at(list: &[Transaction], index: usize, category: Category) -> Result<Vec<Transaction>> {
    update_at(list, index, |t| t.category = category)
}

fn update_at(
    list: &[Transaction],
    index: usize,
    edit: impl FnOnce(&mut Transaction),
) -> Result<Vec<Transaction>> {
    check_index(list, index)?;
    let mut out = list.to_vec();
    edit(&mut out[index]);
    Ok(out)
}

fn check_index(list: &[Transaction], index: usize) -> Result<()> {
    if index >= list.len() {
        bail!("index {index} out of range ({} transactions)", list.len());
    }
    Ok(())
}

fn fresh_id(list: &[Transaction], now: DateTime<Utc>) -> String {
    let base = format!("tx-{}", now.timestamp_millis());
    let taken = |candidate: &str| list.iter().any(|t| t.id.as_deref() == Some(candidate));
    if !taken(&base) {
        return base;
    }
    let mut n = 1;
    loop {
        let candidate = format!("{base}-{n}");
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
