//! Navigation module tree and visibility filtering.

use serde::{Deserialize, Serialize};

use crate::permissions::Session;

/// A sidebar entry, optionally grouping child entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Stable identifier (e.g. `owner.tenants`).
    pub key: String,
    /// Display label.
    pub label: String,
    /// Route path; `None` for pure groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Permissions gating this entry. Empty means always visible.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_permissions: Vec<String>,
    /// Require every listed permission instead of any one.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub match_all: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Module>,
}

impl Module {
    /// A leaf entry linking to `path`.
    pub fn link(key: &str, label: &str, path: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            path: Some(path.to_string()),
            required_permissions: Vec::new(),
            match_all: false,
            children: Vec::new(),
        }
    }

    /// A group entry without a route of its own.
    pub fn group(key: &str, label: &str, children: Vec<Self>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            path: None,
            required_permissions: Vec::new(),
            match_all: false,
            children,
        }
    }

    /// Gate this entry on any one of `permissions`.
    #[must_use]
    pub fn requires_any(mut self, permissions: &[&str]) -> Self {
        self.required_permissions = permissions.iter().map(|p| (*p).to_string()).collect();
        self.match_all = false;
        self
    }

    /// Gate this entry on all of `permissions`.
    #[must_use]
    pub fn requires_all(mut self, permissions: &[&str]) -> Self {
        self.required_permissions = permissions.iter().map(|p| (*p).to_string()).collect();
        self.match_all = true;
        self
    }

    /// Whether this entry's own requirements are met, ignoring children.
    #[must_use]
    pub fn is_visible_to(&self, session: &Session) -> bool {
        if self.required_permissions.is_empty() {
            return true;
        }

        if self.match_all {
            session.has_all_permissions(&self.required_permissions)
        } else {
            session.has_any_permission(&self.required_permissions)
        }
    }
}

/// Filter a module tree down to what `session` may see.
///
/// Children are filtered recursively. A group left without children and
/// without a route of its own is dropped.
#[must_use]
pub fn visible_modules(modules: &[Module], session: &Session) -> Vec<Module> {
    modules
        .iter()
        .filter(|module| module.is_visible_to(session))
        .filter_map(|module| {
            let children = visible_modules(&module.children, session);
            if module.path.is_none() && children.is_empty() {
                return None;
            }
            Some(Module {
                children,
                ..module.clone()
            })
        })
        .collect()
}
