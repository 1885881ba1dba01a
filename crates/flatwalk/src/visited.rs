//! Identities open on the active recursion path.

use std::cell::RefCell;
use std::collections::HashSet;

use flatwalk_value::Identity;

/// Per-call set of handle identities currently being descended into.
///
/// Entries follow stack discipline: [`enter`](Self::enter) opens an identity
/// and the returned guard closes it when dropped, whether the subtree
/// returns normally, stops early or unwinds. A handle reached again from a
/// disjoint branch is therefore walked again; only re-entry along the
/// current path is refused.
#[derive(Debug, Default)]
pub(crate) struct VisitSet {
    open: RefCell<HashSet<Identity>>,
}

impl VisitSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Opens `id`. Returns `None` if it is already open (a cycle).
    pub(crate) fn enter(&self, id: Identity) -> Option<OpenGuard<'_>> {
        if self.open.borrow_mut().insert(id) {
            Some(OpenGuard { set: self, id })
        } else {
            None
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.open.borrow().is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.open.borrow().len()
    }
}

/// Keeps an identity open until dropped.
#[must_use = "the identity is closed as soon as the guard is dropped"]
pub(crate) struct OpenGuard<'s> {
    set: &'s VisitSet,
    id: Identity,
}

impl Drop for OpenGuard<'_> {
    fn drop(&mut self) {
        self.set.open.borrow_mut().remove(&self.id);
    }
}
