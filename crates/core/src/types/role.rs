//! User roles and the capability check.
//!
//! Every guarded route names the [`Role`] it requires and goes through the
//! single [`Role::permits`] gate instead of comparing role strings inline.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a stored role string is not a known role.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

/// A user's role, doubling as the capability required by a route.
///
/// `Member` is the default for self-registered users. `Admin` is granted only
/// through the role-change operation; there is no demotion path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// Regular customer account.
    #[default]
    Member,
    /// Staff account with catalog, user, and analytics access.
    Admin,
}

impl Role {
    /// Whether this role satisfies the `required` capability.
    ///
    /// Admin satisfies every capability; Member satisfies only `Member`.
    #[must_use]
    pub const fn permits(self, required: Self) -> bool {
        match required {
            Self::Member => true,
            Self::Admin => matches!(self, Self::Admin),
        }
    }

    /// The role's canonical string form, as stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Member" => Ok(Self::Member),
            "Admin" => Ok(Self::Admin),
            other => Err(RoleParseError(other.to_owned())),
        }
    }
}
