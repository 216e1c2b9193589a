use chrono::{DateTime, Utc};
use ledgerdesk_core::Identify;
use serde::{Deserialize, Serialize};

pub type InventoryItemId = i64;

/// A stock item from the inventory registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub name: String,
    pub sku: Option<String>,
    pub unit: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    pub fn rename(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.updated_at = Utc::now();
    }
}

impl Identify for InventoryItem {
    type Id = InventoryItemId;

    fn id(&self) -> InventoryItemId {
        self.id
    }
}

/// Payload for creating or editing an inventory item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryItemDraft {
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}
