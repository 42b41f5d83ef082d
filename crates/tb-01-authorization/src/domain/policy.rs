//! Pure authorization policy.
//!
//! | Check | Requester | Target rules |
//! |-------|-----------|--------------|
//! | Read | any role | - |
//! | Manage | Admin, Owner | - |
//! | Assign | Admin, Owner | assignee must hold a role |
//! | AddMember | Admin, Owner | target holds no role; new role Admin or StandardUser |
//! | ChangeRole | Admin, Owner | target not Owner; Admin only touches StandardUser; never grants Owner |
//! | RemoveMember | Admin, Owner (self: anyone) | target not Owner; Admin only touches StandardUser |

use shared_types::Role;

use super::action::Check;

/// Result of evaluating a `Check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(Denial),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Why a check was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    /// Requester holds no role in the workspace.
    NoRole,
    /// Requester's role is below Admin.
    InsufficientRole,
    /// Target is out of reach for this requester.
    ProtectedTarget(&'static str),
    /// Target or requested role is not valid for the action.
    InvalidTarget(&'static str),
}

impl Denial {
    /// Invalid targets are argument errors, every other denial is an access failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Denial::InvalidTarget(_))
    }

    pub fn reason(&self) -> &'static str {
        match *self {
            Denial::NoRole => "requester holds no role in this workspace",
            Denial::InsufficientRole => "requester role is insufficient",
            Denial::ProtectedTarget(reason) | Denial::InvalidTarget(reason) => reason,
        }
    }
}

impl std::fmt::Display for Denial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

/// Evaluate `check` for a requester holding `requester`.
pub fn decide(requester: Role, check: &Check) -> Decision {
    match *check {
        Check::Read => require_member(requester),
        Check::Manage => require_manager(requester),
        Check::Assign { assignee } => {
            require_manager(requester).and(|| {
                if assignee.is_member() {
                    Decision::Allow
                } else {
                    Decision::Deny(Denial::InvalidTarget(
                        "assignee is not a member of this workspace",
                    ))
                }
            })
        }
        Check::AddMember { target, new_role } => require_manager(requester).and(|| {
            match new_role {
                Role::Owner => Decision::Deny(Denial::ProtectedTarget("ownership cannot be granted")),
                Role::NoRole => Decision::Deny(Denial::InvalidTarget(
                    "role must be Admin or StandardUser",
                )),
                _ if target.is_member() => Decision::Deny(Denial::InvalidTarget(
                    "user already holds a role in this workspace",
                )),
                _ => Decision::Allow,
            }
        }),
        Check::ChangeRole { target, new_role } => require_manager(requester).and(|| {
            if !target.is_member() {
                Decision::Deny(Denial::InvalidTarget("target holds no role in this workspace"))
            } else if target == Role::Owner {
                Decision::Deny(Denial::ProtectedTarget("owner role cannot be changed"))
            } else if requester == Role::Admin && target != Role::StandardUser {
                Decision::Deny(Denial::ProtectedTarget(
                    "admins may only modify standard users",
                ))
            } else if new_role == Role::Owner {
                Decision::Deny(Denial::ProtectedTarget("ownership cannot be granted"))
            } else if new_role == Role::NoRole {
                Decision::Deny(Denial::InvalidTarget("role must be Admin or StandardUser"))
            } else {
                Decision::Allow
            }
        }),
        Check::RemoveMember { is_self: true, .. } => Decision::Allow,
        Check::RemoveMember { target, .. } => require_manager(requester).and(|| {
            if !target.is_member() {
                Decision::Deny(Denial::InvalidTarget("target holds no role in this workspace"))
            } else if target == Role::Owner {
                Decision::Deny(Denial::InvalidTarget("owner cannot be removed"))
            } else if requester == Role::Admin && target != Role::StandardUser {
                Decision::Deny(Denial::ProtectedTarget(
                    "admins may only modify standard users",
                ))
            } else {
                Decision::Allow
            }
        }),
    }
}

/// Requester-only part of a check. Lets the gate refuse before it looks up
/// any target.
pub(crate) fn requester_precheck(requester: Role) -> Decision {
    require_manager(requester)
}

fn require_member(requester: Role) -> Decision {
    if requester.is_member() {
        Decision::Allow
    } else {
        Decision::Deny(Denial::NoRole)
    }
}

fn require_manager(requester: Role) -> Decision {
    match requester {
        Role::NoRole => Decision::Deny(Denial::NoRole),
        r if r.can_manage() => Decision::Allow,
        _ => Decision::Deny(Denial::InsufficientRole),
    }
}

impl Decision {
    fn and(self, next: impl FnOnce() -> Decision) -> Decision {
        match self {
            Decision::Allow => next(),
            deny => deny,
        }
    }
}
