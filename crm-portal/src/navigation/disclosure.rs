//! Open/closed flags for collapsible menu groups.

use std::collections::HashMap;
use std::fmt;

/// Identifier of a collapsible group within one menu.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Per-group disclosure flags. Every group starts open; a flag only changes
/// through an explicit call for that group.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisclosureState {
    flags: HashMap<GroupId, bool>,
}

impl DisclosureState {
    /// Groups start expanded, so nothing needs to be recorded up front.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, group: &GroupId) -> bool {
        self.flags.get(group).copied().unwrap_or(true)
    }

    /// Flip one group's flag and return the new value.
    pub fn toggle(&mut self, group: &GroupId) -> bool {
        let next = !self.is_open(group);
        self.flags.insert(group.clone(), next);
        next
    }

    pub fn set_open(&mut self, group: &GroupId, open: bool) {
        self.flags.insert(group.clone(), open);
    }

    /// Reopen every group (the mount-time default).
    pub fn expand_all(&mut self) {
        self.flags.clear();
    }
}
