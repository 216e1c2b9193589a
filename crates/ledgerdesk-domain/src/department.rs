use chrono::{DateTime, Utc};
use ledgerdesk_core::Identify;
use serde::{Deserialize, Serialize};

pub type DepartmentId = i64;

/// A cost center entries can be allocated against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub code: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Department {
    pub fn rename(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.updated_at = Utc::now();
    }
}

impl Identify for Department {
    type Id = DepartmentId;

    fn id(&self) -> DepartmentId {
        self.id
    }
}

/// Payload for creating or editing a department.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepartmentDraft {
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

impl DepartmentDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: None,
        }
    }
}
