use chrono::{DateTime, Utc};
use ledgerdesk_core::Identify;
use serde::{Deserialize, Serialize};

pub type EntityId = i64;

/// Which side of the ledger a business partner sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EntityKind {
    Customer,
    Supplier,
    #[default]
    Both,
}

/// A business partner (customer, supplier, or both).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub kind: EntityKind,
    pub tax_id: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity {
    pub fn rename(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.updated_at = Utc::now();
    }
}

impl Identify for Entity {
    type Id = EntityId;

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Payload for creating or editing a business partner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityDraft {
    pub name: String,
    #[serde(default)]
    pub kind: EntityKind,
    #[serde(default)]
    pub tax_id: Option<String>,
}
