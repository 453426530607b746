use serde::{Deserialize, Serialize};

use super::Role;

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in-progress",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TicketStatus::Open => "🕐",
            TicketStatus::InProgress => "⚠️",
            TicketStatus::Resolved => "✅",
            TicketStatus::Closed => "❌",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TicketStatus::Open => "status-open",
            TicketStatus::InProgress => "status-in-progress",
            TicketStatus::Resolved => "status-resolved",
            TicketStatus::Closed => "status-closed",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Medium => "medium",
            TicketPriority::High => "high",
            TicketPriority::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
            TicketPriority::Urgent => "Urgent",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TicketPriority::Low => "priority-low",
            TicketPriority::Medium => "priority-medium",
            TicketPriority::High => "priority-high",
            TicketPriority::Urgent => "priority-urgent",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Up,
    Down,
}

/// Short user summary embedded in tickets and comments.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub subject: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub category: String,
    pub category_id: String,
    #[serde(default)]
    pub assigned_agent: Option<UserSummary>,
    pub created_by: UserSummary,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub resolved_at: Option<String>,
    #[serde(default)]
    pub closed_at: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub upvotes: u32,
    #[serde(default)]
    pub downvotes: u32,
    #[serde(default)]
    pub user_vote: Option<VoteType>,
    #[serde(default)]
    pub is_public: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author: CommentAuthor,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Internal comments are only visible to agents/admins; the backend
    /// filters them out for plain users, the client just labels them.
    #[serde(default)]
    pub is_internal: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CommentAuthor {
    pub id: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TicketStats {
    pub total: u32,
    pub open: u32,
    pub in_progress: u32,
    pub resolved: u32,
    pub closed: u32,
    pub avg_resolution_time: f64,
    pub total_comments: u32,
}

/// Query parameters for the ticket list endpoint. Only set fields are sent.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl TicketFilter {
    pub fn with_status(status: TicketStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(priority) = self.priority {
            pairs.push(("priority", priority.as_str().to_string()));
        }
        if let Some(ref category) = self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(ref search) = self.search {
            if !search.is_empty() {
                pairs.push(("search", search.clone()));
            }
        }
        if let Some(ref sort_by) = self.sort_by {
            pairs.push(("sortBy", sort_by.clone()));
        }
        if let Some(ref sort_order) = self.sort_order {
            pairs.push(("sortOrder", sort_order.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }

    pub fn to_query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    pub subject: String,
    pub description: String,
    pub category_id: String,
    pub priority: TicketPriority,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serde_uses_kebab_case() {
        let json = serde_json::to_string(&TicketStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let back: TicketStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(back, TicketStatus::InProgress);
    }

    #[test]
    fn empty_filter_builds_empty_query() {
        assert_eq!(TicketFilter::default().to_query_string(), "");
    }

    #[test]
    fn filter_skips_unset_and_empty_fields() {
        let filter = TicketFilter {
            status: Some(TicketStatus::Open),
            search: Some(String::new()),
            limit: Some(20),
            ..TicketFilter::default()
        };
        assert_eq!(filter.to_query_string(), "status=open&limit=20");
    }

    #[test]
    fn filter_serializes_all_fields_in_order() {
        let filter = TicketFilter {
            status: Some(TicketStatus::Resolved),
            priority: Some(TicketPriority::High),
            category: Some("billing".into()),
            search: Some("printer".into()),
            sort_by: Some("createdAt".into()),
            sort_order: Some("desc".into()),
            page: Some(2),
            limit: Some(10),
        };
        assert_eq!(
            filter.to_query_string(),
            "status=resolved&priority=high&category=billing&search=printer&sortBy=createdAt&sortOrder=desc&page=2&limit=10"
        );
    }
}
