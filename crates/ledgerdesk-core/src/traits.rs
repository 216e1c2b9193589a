use std::hash::Hash;

/// Identity seam for records rendered in lists.
///
/// Overlay reconciliation and list sessions deduplicate and hide rows by
/// id, so anything they manage must expose a stable one.
pub trait Identify {
    type Id: Clone + Eq + Hash;

    fn id(&self) -> Self::Id;
}
