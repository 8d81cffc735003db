//! Collaborator presence and edit tracking
//!
//! `PresenceStore` is passed by reference to whatever needs it. Every update
//! produces a new immutable `PresenceSnapshot`; snapshots handed out earlier
//! keep describing the state they were taken from.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

/// One collaborator currently in the workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub user_id: String,
    pub display_name: String,
    /// What the member is editing, if anything (a panel key, a document id...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editing: Option<String>,
}

/// Immutable view of presence at one version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PresenceSnapshot {
    pub version: u64,
    members: BTreeMap<String, Member>,
}

impl PresenceSnapshot {
    pub fn member(&self, user_id: &str) -> Option<&Member> {
        self.members.get(user_id)
    }

    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    /// Members currently editing `target`
    pub fn editors_of<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a Member> + 'a {
        self.members
            .values()
            .filter(move |m| m.editing.as_deref() == Some(target))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct PresenceStore {
    current: Arc<PresenceSnapshot>,
}

impl PresenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Arc<PresenceSnapshot> {
        Arc::clone(&self.current)
    }

    /// Add or rename a member
    pub fn join(&mut self, user_id: &str, display_name: &str) -> Arc<PresenceSnapshot> {
        self.apply(|members| {
            let member = members.entry(user_id.to_string()).or_insert_with(|| Member {
                user_id: user_id.to_string(),
                display_name: display_name.to_string(),
                editing: None,
            });
            member.display_name = display_name.to_string();
            true
        })
    }

    pub fn leave(&mut self, user_id: &str) -> Arc<PresenceSnapshot> {
        self.apply(|members| members.remove(user_id).is_some())
    }

    /// Mark a member as editing `target`; unknown members are ignored
    pub fn start_editing(&mut self, user_id: &str, target: &str) -> Arc<PresenceSnapshot> {
        self.apply(|members| match members.get_mut(user_id) {
            Some(member) if member.editing.as_deref() != Some(target) => {
                member.editing = Some(target.to_string());
                true
            }
            _ => false,
        })
    }

    pub fn stop_editing(&mut self, user_id: &str) -> Arc<PresenceSnapshot> {
        self.apply(|members| {
            members
                .get_mut(user_id)
                .and_then(|m| m.editing.take())
                .is_some()
        })
    }

    /// Copy-on-write update; the version only moves when something changed
    fn apply(
        &mut self,
        change: impl FnOnce(&mut BTreeMap<String, Member>) -> bool,
    ) -> Arc<PresenceSnapshot> {
        let mut members = self.current.members.clone();
        if change(&mut members) {
            self.current = Arc::new(PresenceSnapshot {
                version: self.current.version + 1,
                members,
            });
        }
        self.snapshot()
    }
}
