//! Surface-wide pointer listener registry
//!
//! The interaction surface stands in for the whole window: a drag session
//! registers Move/Up listeners here so the gesture keeps tracking after the
//! pointer leaves the handle. Registrations are scoped guards; dropping one
//! removes its listeners, whichever path tears the session down.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::panel::PanelId;
use crate::pointer::PointerKind;

/// Identifier of a single registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Clone, Copy)]
struct Listener {
    id: ListenerId,
    owner: PanelId,
    kind: PointerKind,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Listener>,
}

/// Shared listener registry for one workspace
#[derive(Debug, Default)]
pub struct InteractionSurface {
    registry: Rc<RefCell<Registry>>,
}

impl InteractionSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `owner` for the given pointer kinds
    ///
    /// The listeners stay attached exactly as long as the returned guard.
    pub fn register(&self, owner: PanelId, kinds: &[PointerKind]) -> ListenerRegistration {
        let mut registry = self.registry.borrow_mut();
        let mut ids = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            let id = ListenerId(registry.next_id);
            registry.next_id += 1;
            registry.listeners.push(Listener { id, owner, kind });
            ids.push(id);
        }
        tracing::trace!(?owner, count = ids.len(), "Registered surface listeners");

        ListenerRegistration {
            registry: Rc::downgrade(&self.registry),
            owner,
            ids,
        }
    }

    /// Owners listening for `kind`, in registration order
    ///
    /// Returns an owned list so handlers may release registrations while the
    /// event is being routed.
    pub fn listeners_for(&self, kind: PointerKind) -> Vec<PanelId> {
        let registry = self.registry.borrow();
        let mut owners: Vec<PanelId> = Vec::new();
        for listener in registry.listeners.iter().filter(|l| l.kind == kind) {
            if !owners.contains(&listener.owner) {
                owners.push(listener.owner);
            }
        }
        owners
    }

    /// Total number of attached listeners
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    /// Whether `owner` currently has any listener attached
    pub fn has_listeners(&self, owner: PanelId) -> bool {
        self.registry
            .borrow()
            .listeners
            .iter()
            .any(|l| l.owner == owner)
    }
}

/// Scoped ownership of a set of surface listeners
///
/// Not `Clone`: exactly one guard releases a given registration.
#[derive(Debug)]
pub struct ListenerRegistration {
    registry: Weak<RefCell<Registry>>,
    owner: PanelId,
    ids: Vec<ListenerId>,
}

impl ListenerRegistration {
    pub fn owner(&self) -> PanelId {
        self.owner
    }
}

impl Drop for ListenerRegistration {
    fn drop(&mut self) {
        // Surface already gone: nothing left to detach from
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut registry = registry.borrow_mut();
        registry.listeners.retain(|l| !self.ids.contains(&l.id));
        tracing::trace!(owner = ?self.owner, "Released surface listeners");
    }
}
