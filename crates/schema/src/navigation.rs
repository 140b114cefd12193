//! Sidebar navigation descriptors.

use serde::Serialize;
use thiserror::Error;

use crate::access::Role;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("'{href}' declares an empty children list")]
    EmptyChildren { href: String },

    #[error("'{href}' nests children more than one level deep")]
    NestedTooDeep { href: String },
}

/// One sidebar entry. `href` is the stable routing key.
///
/// Built through `link` and the chained setters; `with_children` enforces the
/// non-empty, single-level rule for nested entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarItem {
    title: String,
    href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    match_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    allowed_roles: Option<Vec<Role>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<Vec<SidebarItem>>,
}

impl SidebarItem {
    pub fn link(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            icon: None,
            match_path: None,
            allowed_roles: None,
            children: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Path prefix that marks this entry active (defaults to `href` on the client).
    pub fn match_path(mut self, path: impl Into<String>) -> Self {
        self.match_path = Some(path.into());
        self
    }

    pub fn allowed_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.allowed_roles = Some(roles.into_iter().collect());
        self
    }

    pub fn with_children(mut self, children: Vec<SidebarItem>) -> Result<Self, NavigationError> {
        if children.is_empty() {
            return Err(NavigationError::EmptyChildren { href: self.href });
        }
        if children.iter().any(|c| c.children.is_some()) {
            return Err(NavigationError::NestedTooDeep { href: self.href });
        }
        self.children = Some(children);
        Ok(self)
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn roles(&self) -> Option<&[Role]> {
        self.allowed_roles.as_deref()
    }

    pub fn children(&self) -> Option<&[SidebarItem]> {
        self.children.as_deref()
    }

    /// Copy of this entry carrying only `children` (which must be non-empty).
    pub(crate) fn with_kept_children(&self, children: Vec<SidebarItem>) -> Self {
        Self {
            children: Some(children),
            ..self.clone()
        }
    }
}
