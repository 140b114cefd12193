//! Roles held by a caller and the explicit permission-set check.
//!
//! Data structures such as `SidebarItem` only *declare* which roles may see
//! them; deciding visibility is the caller's job and happens here.

use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::navigation::SidebarItem;

/// Role identifier used for gating (opaque string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The set of roles a caller holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet(HashSet<Role>);

impl RoleSet {
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        Self(roles.into_iter().collect())
    }

    /// Parse a comma-separated list (`"admin, buyer"`); blanks are skipped.
    pub fn parse_csv(raw: &str) -> Self {
        Self::new(
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| Role::new(s.to_string())),
        )
    }

    pub fn contains(&self, role: &Role) -> bool {
        self.0.contains(role)
    }

    /// `None` means ungated. A gate is passed when any allowed role is held.
    pub fn permits(&self, allowed: Option<&[Role]>) -> bool {
        match allowed {
            None => true,
            Some(allowed) => allowed.iter().any(|r| self.contains(r)),
        }
    }
}

/// The part of a navigation tree visible to `roles`.
///
/// A hidden parent hides its children. A parent whose children are all hidden
/// is dropped too, so the result never carries an empty `children` list.
pub fn visible_items(items: &[SidebarItem], roles: &RoleSet) -> Vec<SidebarItem> {
    items
        .iter()
        .filter(|item| roles.permits(item.roles()))
        .filter_map(|item| match item.children() {
            None => Some(item.clone()),
            Some(children) => {
                let kept: Vec<SidebarItem> = children
                    .iter()
                    .filter(|c| roles.permits(c.roles()))
                    .cloned()
                    .collect();
                (!kept.is_empty()).then(|| item.with_kept_children(kept))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ungated_is_always_permitted() {
        assert!(RoleSet::default().permits(None));
    }

    #[test]
    fn any_matching_role_passes_the_gate() {
        let held = RoleSet::parse_csv("viewer, buyer");
        let gate = [Role::new("admin"), Role::new("buyer")];
        assert!(held.permits(Some(&gate[..])));
        assert!(!held.permits(Some(&[Role::new("admin")][..])));
        assert!(!held.permits(Some(&[][..])));
    }

    fn tree() -> Vec<SidebarItem> {
        vec![
            SidebarItem::link("Dashboard", "/dashboard").icon("layout-dashboard"),
            SidebarItem::link("Procurement", "/procurement")
                .with_children(vec![
                    SidebarItem::link("Requisitions", "/procurement/requisitions"),
                    SidebarItem::link("Approvals", "/procurement/approvals")
                        .allowed_roles([Role::new("approver")]),
                ])
                .unwrap(),
            SidebarItem::link("Administration", "/admin")
                .allowed_roles([Role::new("admin")])
                .with_children(vec![SidebarItem::link("Tenants", "/admin/tenants")])
                .unwrap(),
            SidebarItem::link("Audit", "/audit")
                .with_children(vec![
                    SidebarItem::link("Log", "/audit/log").allowed_roles([Role::new("auditor")]),
                ])
                .unwrap(),
        ]
    }

    fn hrefs(items: &[SidebarItem]) -> Vec<String> {
        items
            .iter()
            .flat_map(|i| {
                std::iter::once(i.href().to_string()).chain(
                    i.children()
                        .unwrap_or_default()
                        .iter()
                        .map(|c| c.href().to_string()),
                )
            })
            .collect()
    }

    #[test]
    fn anonymous_caller_sees_only_ungated_entries() {
        let visible = visible_items(&tree(), &RoleSet::default());
        assert_eq!(
            hrefs(&visible),
            vec!["/dashboard", "/procurement", "/procurement/requisitions"]
        );
    }

    #[test]
    fn roles_unlock_gated_entries() {
        let roles = RoleSet::parse_csv("admin,approver,auditor");
        let visible = visible_items(&tree(), &roles);
        assert_eq!(hrefs(&visible), hrefs(&tree()));
    }

    #[test]
    fn csv_parsing_skips_blanks() {
        let held = RoleSet::parse_csv(" admin ,, ");
        assert_eq!(held, RoleSet::new([Role::new("admin")]));
    }
}
