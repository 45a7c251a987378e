//! End-to-end store scenarios: report, vote, comment, progress, delete,
//! and persistence across restarts.

use civica_core::{AppStore, IssueFilter, JsonFileStore, MemoryStateStore, StatusTab};
use civica_domain::{CommentDraft, Coordinates, IssueCategory, IssueDraft, IssueStatus};

fn pothole_draft() -> IssueDraft {
    IssueDraft {
        title: "Pothole".into(),
        description: "Deep pothole near the crosswalk".into(),
        category: IssueCategory::Pothole,
        location: "5th Avenue".into(),
        coordinates: Coordinates::new(40.7131, -74.0051),
        reported_by: "John Doe".into(),
        images: vec![],
    }
}

#[test]
fn report_then_vote() {
    let mut store = AppStore::new();
    let id = store.add_issue(pothole_draft());

    assert_eq!(store.toggle_vote(id), Some(true));
    let issue = store.issue(id).unwrap();
    assert_eq!(issue.votes, 1);
    assert!(store.has_voted(id));

    assert_eq!(store.toggle_vote(id), Some(false));
    let issue = store.issue(id).unwrap();
    assert_eq!(issue.votes, 0);
    assert!(!store.has_voted(id));
}

#[test]
fn comment_stays_in_sync_with_counter() {
    let mut store = AppStore::new();
    let id = store.add_issue(pothole_draft());
    assert_eq!(store.issue(id).unwrap().comments, 0);

    store
        .add_comment(CommentDraft {
            issue_id: id,
            author: "Jane Smith".into(),
            avatar_url: "/placeholder.svg".into(),
            content: "test".into(),
            is_official: false,
        })
        .unwrap();

    assert_eq!(store.issue(id).unwrap().comments, 1);
    assert_eq!(store.comments_for(id).len(), 1);
}

#[test]
fn progress_sequencing() {
    let mut store = AppStore::new();
    let id = store.add_issue(pothole_draft());
    let issue = store.issue(id).unwrap();
    assert_eq!(issue.status, IssueStatus::Reported);
    assert_eq!(issue.progress, 0);

    store.progress_issue(id);
    let issue = store.issue(id).unwrap();
    assert_eq!(issue.status, IssueStatus::InProgress);
    assert_eq!(issue.progress, 50);

    store.progress_issue(id);
    let issue = store.issue(id).unwrap();
    assert_eq!(issue.status, IssueStatus::Completed);
    assert_eq!(issue.progress, 100);

    assert_eq!(store.progress_issue(id), None);
    assert_eq!(store.issue(id).unwrap().status, IssueStatus::Completed);
}

#[test]
fn delete_and_undo_from_a_saved_copy() {
    let mut store = AppStore::new();
    let saved = store.delete_issue(2).unwrap();
    assert!(store.issue(2).is_none());

    assert!(store.restore_issue(saved.clone()));
    assert_eq!(store.issue(2), Some(&saved));
}

#[test]
fn filter_composition() {
    let mut store = AppStore::new();
    // Keep only a pothole (reported) and a graffiti (completed) issue.
    let keep: Vec<u64> = store
        .issues()
        .iter()
        .filter(|i| {
            !matches!(
                i.category,
                IssueCategory::Pothole | IssueCategory::Graffiti
            )
        })
        .map(|i| i.id)
        .collect();
    for id in keep {
        store.delete_issue(id);
    }

    let filter = IssueFilter::from_config("", [("pothole", true), ("graffiti", false)], false);
    let visible = store.visible_issues(&filter, StatusTab::All);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].category, IssueCategory::Pothole);
}

#[test]
fn my_reports_scope_follows_the_session() {
    let mut store = AppStore::new();
    store.login("Pat Lee");
    let id = store.add_issue(IssueDraft {
        reported_by: "Pat Lee".into(),
        ..pothole_draft()
    });

    let mut filter = IssueFilter::default();
    filter.scope_to_user = true;
    let visible = store.visible_issues(&filter, StatusTab::All);
    assert_eq!(visible.iter().map(|i| i.id).collect::<Vec<_>>(), vec![id]);
}

#[test]
fn state_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let first_snapshot = {
        let mut store = AppStore::with_store(Box::new(JsonFileStore::new(&path)));
        store.login("John Doe");
        let id = store.add_issue(pothole_draft());
        store.toggle_vote(id);
        store
            .add_comment(CommentDraft {
                issue_id: id,
                author: "John Doe".into(),
                avatar_url: "/placeholder.svg".into(),
                content: "Following up".into(),
                is_official: false,
            })
            .unwrap();
        store.snapshot()
    };

    let reopened = AppStore::with_store(Box::new(JsonFileStore::new(&path)));
    assert_eq!(reopened.snapshot(), first_snapshot);
    assert!(reopened.is_logged_in());
    assert_eq!(reopened.user().unwrap().name, "John Doe");
}

#[test]
fn corrupt_state_falls_back_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{ not valid json").unwrap();

    let store = AppStore::with_store(Box::new(JsonFileStore::new(&path)));
    assert_eq!(store.issues().len(), 6);
    assert!(!store.is_logged_in());
}

#[test]
fn memory_sink_round_trips_like_the_file_sink() {
    let mut store = AppStore::with_store(Box::new(MemoryStateStore::new()));
    let id = store.add_issue(pothole_draft());
    store.toggle_vote(id);
    let snapshot = store.snapshot();

    // A fresh store hydrated from that snapshot is deep-equal.
    let mut sink = MemoryStateStore::new();
    use civica_core::StateStore as _;
    sink.save(&snapshot).unwrap();
    let rehydrated = AppStore::with_store(Box::new(sink));
    assert_eq!(rehydrated.snapshot(), snapshot);
}
