pub mod allocation;
pub mod amount;
pub mod bank;
pub mod department;
pub mod entity;
pub mod entry;
pub mod filter;
pub mod inventory;
pub mod query;
pub mod views;

pub use allocation::{Allocation, AllocationSet};
pub use bank::{BankAccount, BankAccountDraft, BankAccountId};
pub use department::{Department, DepartmentDraft, DepartmentId};
pub use entity::{Entity, EntityDraft, EntityId, EntityKind};
pub use entry::{CashflowEntry, CashflowEntryId, EntryDraft, EntryKind};
pub use inventory::{InventoryItem, InventoryItemDraft, InventoryItemId};
pub use query::ListQuery;
pub use views::{bootstrap_view, ResourceKind, SavedView, ViewId};
