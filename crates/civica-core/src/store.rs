//! The authoritative application store
//!
//! `AppStore` owns the canonical entity collections and the session slot,
//! and its mutation methods are the only code that writes to them. Every
//! mutation runs to completion synchronously, keeps the store invariants
//! intact (comment counters, vote bookkeeping, status/progress pairing),
//! and then mirrors the whitelisted state slice to the persistence sink.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use civica_domain::{
    seed, Comment, CommentDraft, CommentId, Contact, Issue, IssueDraft, IssueId, IssueStatus,
    IssueUpdate, SettingsPatch, User, UserPatch, UserSettings,
};

use crate::filter::{filter_issues, IssueFilter, StatusTab};
use crate::persist::{PersistedState, StateStore};
use crate::session::Session;
use crate::stats::IssueStats;

/// How many deleted issues the trash retains for undo. Oldest entries are
/// dropped permanently once the buffer is full.
pub const TRASH_CAPACITY: usize = 10;

/// A deleted issue held for the undo window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedIssue {
    pub issue: Issue,
    pub deleted_at: DateTime<Utc>,
}

/// The single authoritative in-memory store.
pub struct AppStore {
    issues: Vec<Issue>,
    comments: Vec<Comment>,
    session: Session,
    user_votes: BTreeMap<IssueId, bool>,
    settings: UserSettings,
    contacts: Vec<Contact>,
    trash: Vec<DeletedIssue>,
    sink: Option<Box<dyn StateStore>>,
}

impl AppStore {
    /// A seeded store with no persistence sink.
    pub fn new() -> Self {
        Self::seeded(None)
    }

    /// Hydrate from the given sink, falling back to the seed dataset when
    /// no record exists or the stored one fails to parse. The sink then
    /// receives a mirror of every subsequent mutation.
    pub fn with_store(sink: Box<dyn StateStore>) -> Self {
        match sink.load() {
            Ok(Some(state)) => {
                tracing::info!("hydrated store from persisted state");
                Self::hydrated(state, sink)
            }
            Ok(None) => {
                tracing::info!("no persisted state, starting from seed data");
                Self::seeded(Some(sink))
            }
            Err(e) => {
                tracing::warn!("failed to load persisted state, starting from seed data: {e}");
                Self::seeded(Some(sink))
            }
        }
    }

    fn seeded(sink: Option<Box<dyn StateStore>>) -> Self {
        Self {
            issues: seed::seed_issues(),
            comments: seed::seed_comments(),
            session: Session::LoggedOut,
            user_votes: BTreeMap::new(),
            settings: UserSettings::default(),
            contacts: seed::seed_contacts(),
            trash: Vec::new(),
            sink,
        }
    }

    fn hydrated(state: PersistedState, sink: Box<dyn StateStore>) -> Self {
        let session = match (state.user, state.is_logged_in) {
            (Some(user), true) => Session::LoggedIn(user),
            _ => Session::LoggedOut,
        };
        let mut store = Self {
            issues: state.issues,
            comments: state.comments,
            session,
            user_votes: state.user_votes,
            settings: UserSettings::default(),
            contacts: seed::seed_contacts(),
            trash: Vec::new(),
            sink: Some(sink),
        };
        store.repair_invariants();
        store
    }

    /// A hand-edited or stale record may violate the counter and pairing
    /// invariants; recompute them so every exposed snapshot is consistent.
    fn repair_invariants(&mut self) {
        for issue in &mut self.issues {
            let actual = self
                .comments
                .iter()
                .filter(|c| c.issue_id == issue.id)
                .count() as u32;
            if issue.comments != actual {
                tracing::debug!(issue = issue.id, "repaired comment counter on hydrate");
                issue.comments = actual;
            }
            let paired = issue.status.progress_percent();
            if issue.progress != paired {
                tracing::debug!(issue = issue.id, "repaired progress value on hydrate");
                issue.progress = paired;
            }
        }
    }

    // --- Read selectors ---

    /// All issues, most-recent-first (the canonical display order).
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn issue(&self, id: IssueId) -> Option<&Issue> {
        self.issues.iter().find(|i| i.id == id)
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Comments on one issue, oldest first.
    pub fn comments_for(&self, issue_id: IssueId) -> Vec<&Comment> {
        self.comments
            .iter()
            .filter(|c| c.issue_id == issue_id)
            .collect()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user_votes(&self) -> &BTreeMap<IssueId, bool> {
        &self.user_votes
    }

    /// Whether the current session holds an outstanding vote on the issue.
    pub fn has_voted(&self, issue_id: IssueId) -> bool {
        self.user_votes.get(&issue_id).copied().unwrap_or(false)
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Deleted issues still inside the undo window, oldest first.
    pub fn trash(&self) -> &[DeletedIssue] {
        &self.trash
    }

    /// The filtered, ordered projection every issue list reads from.
    pub fn visible_issues(&self, filter: &IssueFilter, tab: StatusTab) -> Vec<&Issue> {
        filter_issues(&self.issues, filter, tab, self.session.reporter_name())
    }

    /// Status counts for the stats bar.
    pub fn stats(&self) -> IssueStats {
        IssueStats::collect(&self.issues)
    }

    /// The whitelisted slice mirrored to persistence: user, isLoggedIn,
    /// userVotes, comments, issues.
    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            user: self.session.user().cloned(),
            is_logged_in: self.session.is_logged_in(),
            user_votes: self.user_votes.clone(),
            comments: self.comments.clone(),
            issues: self.issues.clone(),
        }
    }

    // --- Mutations ---

    /// Report a new issue. Assigns id = max(existing ids, 0) + 1, stamps
    /// the report time, and prepends so newest issues display first.
    /// Returns the assigned id.
    pub fn add_issue(&mut self, draft: IssueDraft) -> IssueId {
        let id = self.issues.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        let status = IssueStatus::Reported;
        let issue = Issue {
            id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            status,
            location: draft.location,
            coordinates: draft.coordinates,
            reported_by: draft.reported_by,
            reported_at: Utc::now(),
            votes: 0,
            comments: 0,
            images: draft.images,
            progress: status.progress_percent(),
        };
        self.issues.insert(0, issue);
        self.mirror();
        id
    }

    /// Apply a partial update to one issue. Returns false (no-op) when the
    /// id is absent. Identity fields (id, reported_by, reported_at) are
    /// not reachable through `IssueUpdate`.
    pub fn edit_issue(&mut self, id: IssueId, update: &IssueUpdate) -> bool {
        let Some(issue) = self.issues.iter_mut().find(|i| i.id == id) else {
            return false;
        };
        update.apply(issue);
        self.mirror();
        true
    }

    /// Remove an issue from the canonical list, retaining it in the
    /// bounded trash for undo. Returns the removed snapshot, or None when
    /// the id is absent. Associated comments are left in place as orphaned
    /// history.
    pub fn delete_issue(&mut self, id: IssueId) -> Option<Issue> {
        let pos = self.issues.iter().position(|i| i.id == id)?;
        let issue = self.issues.remove(pos);
        self.trash.push(DeletedIssue {
            issue: issue.clone(),
            deleted_at: Utc::now(),
        });
        if self.trash.len() > TRASH_CAPACITY {
            self.trash.remove(0);
        }
        self.mirror();
        Some(issue)
    }

    /// Re-insert a previously deleted issue verbatim, appended to the end
    /// of the list. Returns false (no-op) if an issue with that id already
    /// exists, so id uniqueness holds unconditionally.
    pub fn restore_issue(&mut self, issue: Issue) -> bool {
        if self.issues.iter().any(|i| i.id == issue.id) {
            return false;
        }
        self.trash.retain(|t| t.issue.id != issue.id);
        self.issues.push(issue);
        self.mirror();
        true
    }

    /// Undo a delete from the store-held trash. Returns false when the id
    /// is no longer in the undo window.
    pub fn undo_delete(&mut self, id: IssueId) -> bool {
        let Some(pos) = self.trash.iter().position(|t| t.issue.id == id) else {
            return false;
        };
        let tombstone = self.trash.remove(pos);
        self.restore_issue(tombstone.issue)
    }

    /// Add a comment and increment the parent issue's counter in the same
    /// step. Returns the assigned comment id, or None (no-op, counter
    /// untouched) when the issue id does not resolve.
    pub fn add_comment(&mut self, draft: CommentDraft) -> Option<CommentId> {
        let issue = self.issues.iter_mut().find(|i| i.id == draft.issue_id)?;
        issue.comments += 1;
        let id = self.comments.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        self.comments.push(Comment {
            id,
            issue_id: draft.issue_id,
            author: draft.author,
            avatar_url: draft.avatar_url,
            content: draft.content,
            timestamp: Utc::now(),
            is_official: draft.is_official,
        });
        self.mirror();
        Some(id)
    }

    /// Toggle the session's vote on an issue. A false→true flip increments
    /// the vote count; true→false decrements it, clamped at zero so
    /// bookkeeping drift can never drive it negative. Returns the new
    /// voted state, or None when the issue does not exist.
    pub fn toggle_vote(&mut self, issue_id: IssueId) -> Option<bool> {
        let issue = self.issues.iter_mut().find(|i| i.id == issue_id)?;
        let voted = self.user_votes.entry(issue_id).or_insert(false);
        *voted = !*voted;
        if *voted {
            issue.votes += 1;
        } else {
            issue.votes = issue.votes.saturating_sub(1);
        }
        let now_voted = *voted;
        self.mirror();
        Some(now_voted)
    }

    /// Advance an issue one step along reported → in_progress → completed,
    /// updating the paired progress value. Returns the new status, or None
    /// (no-op) when the issue is absent or already completed. There is no
    /// reverse operation.
    pub fn progress_issue(&mut self, issue_id: IssueId) -> Option<IssueStatus> {
        let issue = self.issues.iter_mut().find(|i| i.id == issue_id)?;
        let next = issue.status.next()?;
        issue.status = next;
        issue.progress = next.progress_percent();
        self.mirror();
        Some(next)
    }

    /// Log in, synthesizing a deterministic account from the name. A login
    /// while a session is active simply replaces it.
    pub fn login(&mut self, name: &str) -> User {
        let user = User::synthesized(name);
        self.session = Session::LoggedIn(user.clone());
        self.mirror();
        user
    }

    /// Clear the session slot.
    pub fn logout(&mut self) {
        self.session = Session::LoggedOut;
        self.mirror();
    }

    /// Merge a partial profile update into the session user. Returns false
    /// (no-op) when logged out.
    pub fn update_user_profile(&mut self, patch: &UserPatch) -> bool {
        let Session::LoggedIn(user) = &mut self.session else {
            return false;
        };
        patch.apply(user);
        self.mirror();
        true
    }

    /// Merge a partial settings update. Returns false (no-op) when logged
    /// out.
    pub fn update_user_settings(&mut self, patch: &SettingsPatch) -> bool {
        if !self.session.is_logged_in() {
            return false;
        }
        patch.apply(&mut self.settings);
        self.mirror();
        true
    }

    /// Mirror the whitelisted slice to the sink. Best-effort: failures are
    /// logged and the in-memory store stays authoritative.
    fn mirror(&mut self) {
        if self.sink.is_none() {
            return;
        }
        let state = self.snapshot();
        if let Some(sink) = self.sink.as_mut() {
            if let Err(e) = sink.save(&state) {
                tracing::warn!("failed to persist state: {e}");
            }
        }
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}
