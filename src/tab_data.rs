/// Data structures for Tab Corral
use serde::{Deserialize, Serialize};

/// A browser tab as reported by the tab inventory.
///
/// Both fields are optional: privileged pages expose no URL, and tabs that
/// are mid-creation may not have an id yet. Such tabs never match anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabRef {
    pub id: Option<i32>,
    pub url: Option<String>,
}

impl TabRef {
    pub fn new(id: i32, url: &str) -> TabRef {
        TabRef {
            id: Some(id),
            url: Some(url.to_string()),
        }
    }
}

/// The four actions the extension shell can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    CloseSameDomain,
    CloseSameSubdomain,
    CloseSameSubdirectory,
    GroupByDomain,
}

/// An action request from the shell: which action, and the tab it was
/// invoked on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub action: ActionType,
    pub tab: TabRef,
}

/// Transient status surfaced back to the shell after an action runs.
///
/// `closed_count` is set for close actions, `group_id` for grouping, and
/// `error` only when `success` is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionResponse {
    pub fn closed(count: usize) -> ActionResponse {
        ActionResponse {
            success: true,
            closed_count: Some(count),
            group_id: None,
            error: None,
        }
    }

    pub fn grouped(group_id: i32) -> ActionResponse {
        ActionResponse {
            success: true,
            closed_count: None,
            group_id: Some(group_id),
            error: None,
        }
    }

    pub fn failed(error: impl ToString) -> ActionResponse {
        ActionResponse {
            success: false,
            closed_count: None,
            group_id: None,
            error: Some(error.to_string()),
        }
    }
}
