//! Field validation for drafts
//!
//! The store trusts its inputs; collaborators run these checks before
//! dispatching a mutation.

use crate::comment::CommentDraft;
use crate::issue::IssueDraft;

/// Why a draft was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("field '{0}' must not be empty")]
    Empty(&'static str),

    #[error("coordinates must be finite numbers")]
    NonFiniteCoordinates,
}

impl IssueDraft {
    /// Check the report form constraints: title, description, and location
    /// non-empty after trimming, coordinates finite.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::Empty("title"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::Empty("description"));
        }
        if self.location.trim().is_empty() {
            return Err(ValidationError::Empty("location"));
        }
        if !self.coordinates.is_finite() {
            return Err(ValidationError::NonFiniteCoordinates);
        }
        Ok(())
    }
}

impl CommentDraft {
    /// Comment content must be non-empty after trimming.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.content.trim().is_empty() {
            return Err(ValidationError::Empty("content"));
        }
        Ok(())
    }
}
