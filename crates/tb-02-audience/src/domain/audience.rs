//! Audience value objects.

use std::collections::BTreeSet;
use std::fmt;

use shared_types::{TaskId, UserId, WorkspaceId};

/// What an audience is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudienceTarget {
    TaskAssociates(TaskId),
    UserAssociates(UserId),
    WorkspaceMembers(WorkspaceId),
    TaskWatchers(TaskId),
}

impl fmt::Display for AudienceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudienceTarget::TaskAssociates(id) => write!(f, "associates of task {}", id),
            AudienceTarget::UserAssociates(id) => write!(f, "associates of user {}", id),
            AudienceTarget::WorkspaceMembers(id) => write!(f, "members of workspace {}", id),
            AudienceTarget::TaskWatchers(id) => write!(f, "watchers of task {}", id),
        }
    }
}

/// Deduplicated set of user ids. Order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Audience(BTreeSet<UserId>);

impl Audience {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, user: UserId) -> bool {
        self.0.contains(&user)
    }

    /// Same audience without `user`.
    pub fn without(mut self, user: UserId) -> Self {
        self.0.remove(&user);
        self
    }

    pub fn into_vec(self) -> Vec<UserId> {
        self.0.into_iter().collect()
    }
}

impl FromIterator<UserId> for Audience {
    fn from_iter<I: IntoIterator<Item = UserId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<UserId>> for Audience {
    fn from(users: Vec<UserId>) -> Self {
        users.into_iter().collect()
    }
}

impl IntoIterator for Audience {
    type Item = UserId;
    type IntoIter = std::collections::btree_set::IntoIter<UserId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
