//! Issue domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Issue identifier. Positive, unique, assigned monotonically (max + 1).
pub type IssueId = u64;

/// What kind of neighborhood problem an issue describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Pothole,
    Streetlight,
    Graffiti,
    Trash,
    Sidewalk,
    Other,
}

impl IssueCategory {
    /// Every category, in display order.
    pub const ALL: [IssueCategory; 6] = [
        IssueCategory::Pothole,
        IssueCategory::Streetlight,
        IssueCategory::Graffiti,
        IssueCategory::Trash,
        IssueCategory::Sidewalk,
        IssueCategory::Other,
    ];

    /// The stable string tag used in persisted state and filter configs.
    pub fn tag(self) -> &'static str {
        match self {
            IssueCategory::Pothole => "pothole",
            IssueCategory::Streetlight => "streetlight",
            IssueCategory::Graffiti => "graffiti",
            IssueCategory::Trash => "trash",
            IssueCategory::Sidewalk => "sidewalk",
            IssueCategory::Other => "other",
        }
    }

    /// Parse a string tag. Returns None for unrecognized tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.tag() == tag)
    }

    /// Human-readable label for badges and legends.
    pub fn label(self) -> &'static str {
        match self {
            IssueCategory::Pothole => "Pothole",
            IssueCategory::Streetlight => "Streetlight",
            IssueCategory::Graffiti => "Graffiti",
            IssueCategory::Trash => "Trash/Litter",
            IssueCategory::Sidewalk => "Sidewalk",
            IssueCategory::Other => "Other",
        }
    }
}

/// Workflow state of an issue. Transitions are strictly forward:
/// reported → in_progress → completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Reported,
    InProgress,
    Completed,
}

impl IssueStatus {
    /// The stable string tag used in persisted state and status tabs.
    pub fn tag(self) -> &'static str {
        match self {
            IssueStatus::Reported => "reported",
            IssueStatus::InProgress => "in_progress",
            IssueStatus::Completed => "completed",
        }
    }

    /// Parse a string tag. Returns None for unrecognized tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "reported" => Some(IssueStatus::Reported),
            "in_progress" => Some(IssueStatus::InProgress),
            "completed" => Some(IssueStatus::Completed),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            IssueStatus::Reported => "Reported",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Completed => "Completed",
        }
    }

    /// The progress value paired with this status. Progress and status
    /// always move together and never regress.
    pub fn progress_percent(self) -> u8 {
        match self {
            IssueStatus::Reported => 0,
            IssueStatus::InProgress => 50,
            IssueStatus::Completed => 100,
        }
    }

    /// The next status in the workflow, or None once completed.
    pub fn next(self) -> Option<Self> {
        match self {
            IssueStatus::Reported => Some(IssueStatus::InProgress),
            IssueStatus::InProgress => Some(IssueStatus::Completed),
            IssueStatus::Completed => None,
        }
    }
}

/// A latitude/longitude pair captured by the map collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// A reported neighborhood issue.
///
/// Serialized field names are camelCase to match the dashboard's stored
/// record layout (`reportedBy`, `reportedAt`, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: IssueId,
    pub title: String,
    pub description: String,
    pub category: IssueCategory,
    pub status: IssueStatus,
    pub location: String,
    pub coordinates: Coordinates,
    pub reported_by: String,
    /// Immutable once set by the report action.
    pub reported_at: DateTime<Utc>,
    pub votes: u32,
    /// Always equals the number of Comment rows whose issue_id matches.
    pub comments: u32,
    pub images: Vec<String>,
    /// Tied to status: reported=0, in_progress=50, completed=100.
    pub progress: u8,
}

/// Input for the report action. The store assigns id, timestamp, and the
/// initial status/progress/counter fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDraft {
    pub title: String,
    pub description: String,
    pub category: IssueCategory,
    pub location: String,
    pub coordinates: Coordinates,
    pub reported_by: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Partial update for the edit action. Absent fields are left untouched;
/// id, reported_by, and reported_at can never be changed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<IssueCategory>,
    pub location: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub images: Option<Vec<String>>,
}

impl IssueUpdate {
    /// Apply this partial update to an issue.
    pub fn apply(&self, issue: &mut Issue) {
        if let Some(title) = &self.title {
            issue.title = title.clone();
        }
        if let Some(description) = &self.description {
            issue.description = description.clone();
        }
        if let Some(category) = self.category {
            issue.category = category;
        }
        if let Some(location) = &self.location {
            issue.location = location.clone();
        }
        if let Some(coordinates) = self.coordinates {
            issue.coordinates = coordinates;
        }
        if let Some(images) = &self.images {
            issue.images = images.clone();
        }
    }
}
