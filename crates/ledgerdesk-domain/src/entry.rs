//! Cash-flow entries.
//!
//! An entry is one expected inflow or outflow, optionally split across
//! departments. Drafts are validated locally before submission; an
//! invalid allocation set never reaches the server.

use crate::allocation::AllocationSet;
use crate::bank::BankAccountId;
use chrono::{DateTime, NaiveDate, Utc};
use ledgerdesk_core::{Identify, LedgerdeskError, LedgerdeskResult};
use serde::{Deserialize, Serialize};

pub type CashflowEntryId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Inflow,
    Outflow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowEntry {
    pub id: CashflowEntryId,
    pub description: String,
    pub amount: f64,
    pub kind: EntryKind,
    pub due_date: NaiveDate,
    pub bank_account_id: Option<BankAccountId>,
    pub settled: bool,
    pub allocations: AllocationSet,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CashflowEntry {
    pub fn set_allocations(&mut self, allocations: AllocationSet) {
        self.allocations = allocations;
        self.updated_at = Utc::now();
    }

    pub fn settle(&mut self, bank_account_id: BankAccountId) {
        self.settled = true;
        self.bank_account_id = Some(bank_account_id);
        self.updated_at = Utc::now();
    }
}

impl Identify for CashflowEntry {
    type Id = CashflowEntryId;

    fn id(&self) -> CashflowEntryId {
        self.id
    }
}

/// Payload for creating or editing a cash-flow entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryDraft {
    pub description: String,
    pub amount: f64,
    pub kind: EntryKind,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub bank_account_id: Option<BankAccountId>,
    #[serde(default)]
    pub allocations: AllocationSet,
}

impl EntryDraft {
    /// Local pre-submit check. Failures block the request entirely.
    pub fn validate(&self) -> LedgerdeskResult<()> {
        if self.description.trim().is_empty() {
            return Err(LedgerdeskError::Validation(
                "description must not be empty".to_string(),
            ));
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(LedgerdeskError::Validation(
                "amount must be a positive number".to_string(),
            ));
        }
        if !self.allocations.is_valid() {
            return Err(LedgerdeskError::Validation(
                "allocation shares must be positive and sum to 100.00".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> EntryDraft {
        EntryDraft {
            description: "Office rent".to_string(),
            amount: 1200.0,
            kind: EntryKind::Outflow,
            due_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            bank_account_id: None,
            allocations: AllocationSet::new(),
        }
    }

    #[test]
    fn test_draft_without_allocations_is_valid() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_draft_with_even_split_is_valid() {
        let mut d = draft();
        d.allocations = AllocationSet::reset_for_targets(&[1, 2, 3]);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_draft_with_broken_split_is_rejected() {
        let mut d = draft();
        let mut allocations = AllocationSet::reset_for_targets(&[1, 2]);
        allocations.set_share(0, "49.99");
        d.allocations = allocations;

        let err = d.validate().unwrap_err();
        assert!(matches!(err, LedgerdeskError::Validation(_)));
    }

    #[test]
    fn test_draft_rejects_blank_description_and_bad_amount() {
        let mut d = draft();
        d.description = "   ".to_string();
        assert!(d.validate().is_err());

        let mut d = draft();
        d.amount = 0.0;
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_settle_records_account() {
        let mut entry = CashflowEntry {
            id: 7,
            description: "Invoice 1042".to_string(),
            amount: 450.0,
            kind: EntryKind::Inflow,
            due_date: NaiveDate::from_ymd_opt(2026, 2, 15).unwrap(),
            bank_account_id: None,
            settled: false,
            allocations: AllocationSet::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        entry.settle(3);
        assert!(entry.settled);
        assert_eq!(entry.bank_account_id, Some(3));
    }
}
