use chrono::{DateTime, Utc};
use ledgerdesk_core::Identify;
use serde::{Deserialize, Serialize};

pub type BankAccountId = i64;

/// A bank account settlements are posted against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: BankAccountId,
    pub name: String,
    pub bank_code: Option<String>,
    pub branch: Option<String>,
    pub account_number: Option<String>,
    pub initial_balance: f64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BankAccount {
    pub fn rename(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.updated_at = Utc::now();
    }
}

impl Identify for BankAccount {
    type Id = BankAccountId;

    fn id(&self) -> BankAccountId {
        self.id
    }
}

/// Payload for creating or editing a bank account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BankAccountDraft {
    pub name: String,
    #[serde(default)]
    pub bank_code: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub initial_balance: f64,
}
