//! Who is looking, and at which page.

use serde::{Deserialize, Serialize};

/// Viewer role, derived from the backend user flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Member,
    Admin,
    Superuser,
}

impl Role {
    /// Superuser wins over admin when both flags are set.
    pub fn from_flags(is_admin: bool, is_superuser: bool) -> Self {
        if is_superuser {
            Self::Superuser
        } else if is_admin {
            Self::Admin
        } else {
            Self::Member
        }
    }

    pub fn is_administrative(&self) -> bool {
        matches!(self, Self::Admin | Self::Superuser)
    }
}

/// The signed-in user as far as gating is concerned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub role: Role,
}

impl Viewer {
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    pub fn member() -> Self {
        Self::new(Role::Member)
    }

    /// Administrative roles skip the access gate entirely.
    pub fn bypasses_gate(&self) -> bool {
        self.role.is_administrative()
    }
}

/// The route currently being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    path: String,
}

impl Page {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path without query string or fragment.
    pub fn route(&self) -> &str {
        match self.path.find(['?', '#']) {
            Some(end) => &self.path[..end],
            None => &self.path,
        }
    }

    /// True on the management page itself or any route nested under it.
    /// Query strings and fragments are ignored.
    pub fn is_under(&self, base: &str) -> bool {
        let path = trim_trailing_slash(self.route());
        let base = trim_trailing_slash(base);
        if path == base {
            return true;
        }
        path.strip_prefix(base)
            .map(|rest| rest.starts_with('/'))
            .unwrap_or(false)
    }
}

fn trim_trailing_slash(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}
