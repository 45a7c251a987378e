//! Built-in seed dataset
//!
//! Used to populate the store when no persisted state exists. Comment
//! counters on the seed issues equal the actual number of seed comment
//! rows, and progress values follow the status pairing, so a freshly
//! seeded store satisfies every store invariant.

use chrono::{DateTime, TimeZone, Utc};

use crate::comment::Comment;
use crate::contact::Contact;
use crate::issue::{Coordinates, Issue, IssueCategory, IssueStatus};

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .expect("valid seed timestamp")
}

/// The six sample issues shipped with the dashboard.
pub fn seed_issues() -> Vec<Issue> {
    vec![
        Issue {
            id: 1,
            title: "Pothole on Main Street".into(),
            description: "Large pothole at the intersection of Main and Oak streets. \
                          Approximately 2 feet wide and 6 inches deep."
                .into(),
            category: IssueCategory::Pothole,
            status: IssueStatus::Reported,
            location: "Main Street & Oak Avenue".into(),
            coordinates: Coordinates::new(40.7128, -74.006),
            reported_by: "John Doe".into(),
            reported_at: ts(2023, 4, 10, 14, 30, 0),
            votes: 12,
            comments: 2,
            images: vec!["/placeholder.svg?height=200&width=350".into()],
            progress: 0,
        },
        Issue {
            id: 2,
            title: "Streetlight Out on Elm Street".into(),
            description: "The streetlight on the corner of Elm and Pine streets has been out \
                          for over a week, creating a safety hazard at night."
                .into(),
            category: IssueCategory::Streetlight,
            status: IssueStatus::InProgress,
            location: "Elm Street & Pine Street".into(),
            coordinates: Coordinates::new(40.7148, -74.008),
            reported_by: "Jane Smith".into(),
            reported_at: ts(2023, 4, 8, 18, 15, 0),
            votes: 8,
            comments: 1,
            images: vec!["/placeholder.svg?height=200&width=350".into()],
            progress: 50,
        },
        Issue {
            id: 3,
            title: "Graffiti on Community Center".into(),
            description: "Large graffiti tags on the north wall of the community center. \
                          Approximately 8 feet wide and 5 feet tall."
                .into(),
            category: IssueCategory::Graffiti,
            status: IssueStatus::Completed,
            location: "123 Community Dr".into(),
            coordinates: Coordinates::new(40.7118, -74.003),
            reported_by: "Michael Brown".into(),
            reported_at: ts(2023, 4, 5, 9, 45, 0),
            votes: 5,
            comments: 1,
            images: vec!["/placeholder.svg?height=200&width=350".into()],
            progress: 100,
        },
        Issue {
            id: 4,
            title: "Trash Accumulation in Park".into(),
            description: "Significant amount of litter and trash has accumulated in Central \
                          Park, particularly around the playground area."
                .into(),
            category: IssueCategory::Trash,
            status: IssueStatus::Reported,
            location: "Central Park".into(),
            coordinates: Coordinates::new(40.7135, -74.0046),
            reported_by: "Sarah Johnson".into(),
            reported_at: ts(2023, 4, 9, 10, 15, 0),
            votes: 15,
            comments: 1,
            images: vec!["/placeholder.svg?height=200&width=350".into()],
            progress: 0,
        },
        Issue {
            id: 5,
            title: "Damaged Sidewalk on Oak Street".into(),
            description: "Several sections of sidewalk on Oak Street between 5th and 6th \
                          Avenue are cracked and uneven, creating a tripping hazard."
                .into(),
            category: IssueCategory::Sidewalk,
            status: IssueStatus::InProgress,
            location: "Oak Street".into(),
            coordinates: Coordinates::new(40.7142, -74.0052),
            reported_by: "Robert Wilson".into(),
            reported_at: ts(2023, 4, 7, 16, 45, 0),
            votes: 7,
            comments: 1,
            images: vec!["/placeholder.svg?height=200&width=350".into()],
            progress: 50,
        },
        Issue {
            id: 6,
            title: "Broken Bench in Riverside Park".into(),
            description: "Wooden bench near the river entrance is broken and unsafe to sit on."
                .into(),
            category: IssueCategory::Other,
            status: IssueStatus::Completed,
            location: "Riverside Park".into(),
            coordinates: Coordinates::new(40.7125, -74.0065),
            reported_by: "Emily Davis".into(),
            reported_at: ts(2023, 4, 3, 11, 30, 0),
            votes: 4,
            comments: 1,
            images: vec!["/placeholder.svg?height=200&width=350".into()],
            progress: 100,
        },
    ]
}

/// The sample comments attached to the seed issues.
pub fn seed_comments() -> Vec<Comment> {
    let avatar = "/placeholder.svg?height=32&width=32";
    vec![
        Comment {
            id: 1,
            issue_id: 1,
            author: "Jane Smith".into(),
            avatar_url: avatar.into(),
            content: "I drive by this pothole every day. It's getting larger and has already \
                      damaged several cars."
                .into(),
            timestamp: ts(2023, 4, 10, 16, 30, 0),
            is_official: false,
        },
        Comment {
            id: 2,
            issue_id: 1,
            author: "City Works Dept".into(),
            avatar_url: avatar.into(),
            content: "Thank you for reporting this issue. We have scheduled repairs for next \
                      week."
                .into(),
            timestamp: ts(2023, 4, 11, 9, 15, 0),
            is_official: true,
        },
        Comment {
            id: 3,
            issue_id: 2,
            author: "Michael Brown".into(),
            avatar_url: avatar.into(),
            content: "This has been an issue for a while. It's very dark at night and feels \
                      unsafe."
                .into(),
            timestamp: ts(2023, 4, 8, 19, 45, 0),
            is_official: false,
        },
        Comment {
            id: 4,
            issue_id: 3,
            author: "Community Center Director".into(),
            avatar_url: avatar.into(),
            content: "Thank you all for reporting this issue. The graffiti has been removed \
                      and the wall repainted."
                .into(),
            timestamp: ts(2023, 4, 6, 14, 20, 0),
            is_official: true,
        },
        Comment {
            id: 5,
            issue_id: 4,
            author: "Park Visitor".into(),
            avatar_url: avatar.into(),
            content: "The trash situation is getting worse. We need more frequent cleanups."
                .into(),
            timestamp: ts(2023, 4, 9, 15, 20, 0),
            is_official: false,
        },
        Comment {
            id: 6,
            issue_id: 5,
            author: "Local Resident".into(),
            avatar_url: avatar.into(),
            content: "I've seen elderly people almost trip on this sidewalk. It needs urgent \
                      attention."
                .into(),
            timestamp: ts(2023, 4, 8, 10, 45, 0),
            is_official: false,
        },
        Comment {
            id: 7,
            issue_id: 6,
            author: "Park Maintenance".into(),
            avatar_url: avatar.into(),
            content: "The bench has been replaced with a new one. Thank you for reporting."
                .into(),
            timestamp: ts(2023, 4, 4, 13, 10, 0),
            is_official: true,
        },
    ]
}

/// The municipal contact directory.
pub fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: 1,
            department: "Public Works Department".into(),
            description: "For infrastructure issues".into(),
            phone: "555-123-4567".into(),
            email: "publicworks@cityname.gov".into(),
        },
        Contact {
            id: 2,
            department: "Parks & Recreation".into(),
            description: "For issues in parks".into(),
            phone: "555-234-5678".into(),
            email: "parks@cityname.gov".into(),
        },
        Contact {
            id: 3,
            department: "City Sanitation".into(),
            description: "For trash and cleanliness issues".into(),
            phone: "555-345-6789".into(),
            email: "sanitation@cityname.gov".into(),
        },
    ]
}
