//! Comment domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::issue::IssueId;

/// Comment identifier. Assigned max + 1 within the comment collection.
pub type CommentId = u64;

/// A comment on an issue, from a resident or an official account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub issue_id: IssueId,
    pub author: String,
    pub avatar_url: String,
    /// Non-empty after trimming; enforced by the validation collaborator.
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Set for comments from municipal departments.
    #[serde(default)]
    pub is_official: bool,
}

/// Input for the comment-add action. The store assigns id and timestamp,
/// and increments the parent issue's counter in the same step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDraft {
    pub issue_id: IssueId,
    pub author: String,
    pub avatar_url: String,
    pub content: String,
    #[serde(default)]
    pub is_official: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_serde_round_trip() {
        let comment = Comment {
            id: 2,
            issue_id: 1,
            author: "City Works Dept".into(),
            avatar_url: "/placeholder.svg?height=32&width=32".into(),
            content: "Repairs are scheduled for next week.".into(),
            timestamp: Utc::now(),
            is_official: true,
        };
        let json = serde_json::to_string(&comment).unwrap();
        assert!(json.contains("\"issueId\""));
        assert!(json.contains("\"isOfficial\""));
        let back: Comment = serde_json::from_str(&json).unwrap();
        assert_eq!(comment, back);
    }

    #[test]
    fn is_official_defaults_to_false() {
        let json = r#"{
            "id": 1,
            "issueId": 1,
            "author": "Jane Smith",
            "avatarUrl": "/placeholder.svg",
            "content": "It's getting larger.",
            "timestamp": "2023-04-10T16:30:00Z"
        }"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert!(!comment.is_official);
    }
}
