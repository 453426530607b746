// ============================================================================
// NAVIGATION - role-gated menu catalog
// ============================================================================

use crate::models::Role;
use crate::routes::Route;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
    pub icon: &'static str,
    pub badge: Option<u32>,
}

impl NavItem {
    const fn new(label: &'static str, route: Route, icon: &'static str) -> Self {
        Self {
            label,
            route,
            icon,
            badge: None,
        }
    }

    const fn with_badge(label: &'static str, route: Route, icon: &'static str, badge: u32) -> Self {
        Self {
            label,
            route,
            icon,
            badge: Some(badge),
        }
    }
}

/// Entries every role sees.
fn common_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Dashboard", Route::Dashboard, "📊"),
        NavItem::new("My Tickets", Route::MyTickets, "🎫"),
        NavItem::new("Create Ticket", Route::CreateTicket, "➕"),
    ]
}

/// Entries for agents and admins.
fn agent_items() -> Vec<NavItem> {
    vec![
        NavItem::new("All Tickets", Route::AllTickets, "📥"),
        NavItem::with_badge("Open Tickets", Route::OpenTickets, "🕐", 23),
        NavItem::with_badge("In Progress", Route::InProgressTickets, "⚠️", 8),
        NavItem::new("Resolved", Route::ResolvedTickets, "✅"),
    ]
}

/// Entries for admins only. The guard does not gate these by role; the
/// backend rejects unauthorized calls.
fn admin_items() -> Vec<NavItem> {
    vec![
        NavItem::new("User Management", Route::AdminUsers, "👥"),
        NavItem::new("Categories", Route::AdminCategories, "🏷️"),
        NavItem::new("Agent Management", Route::AdminAgents, "🛡️"),
        NavItem::new("System Settings", Route::AdminSettings, "⚙️"),
    ]
}

/// Menu entries for a role: the common tier, then zero or more additional
/// tiers. Deterministic and side-effect free.
pub fn items_for_role(role: Role) -> Vec<NavItem> {
    let mut items = common_items();
    match role {
        Role::Admin => {
            items.extend(agent_items());
            items.extend(admin_items());
        }
        Role::Agent => {
            items.extend(agent_items());
        }
        Role::User => {}
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_gets_only_the_common_tier() {
        let items = items_for_role(Role::User);
        assert_eq!(items, common_items());
    }

    #[test]
    fn agent_gets_common_plus_agent_tiers_in_order() {
        let items = items_for_role(Role::Agent);
        let mut expected = common_items();
        expected.extend(agent_items());
        assert_eq!(items, expected);
    }

    #[test]
    fn admin_gets_all_three_tiers_in_order() {
        let items = items_for_role(Role::Admin);
        let mut expected = common_items();
        expected.extend(agent_items());
        expected.extend(admin_items());
        assert_eq!(items, expected);
    }

    #[test]
    fn no_duplicate_labels_per_role() {
        for role in [Role::Admin, Role::Agent, Role::User] {
            let items = items_for_role(role);
            let mut labels: Vec<_> = items.iter().map(|i| i.label).collect();
            labels.sort();
            labels.dedup();
            assert_eq!(labels.len(), items.len(), "duplicates for {:?}", role);
        }
    }

    #[test]
    fn badge_counts_only_on_agent_tier() {
        let items = items_for_role(Role::User);
        assert!(items.iter().all(|i| i.badge.is_none()));

        let items = items_for_role(Role::Agent);
        let badged: Vec<_> = items.iter().filter(|i| i.badge.is_some()).collect();
        assert_eq!(badged.len(), 2);
    }
}
