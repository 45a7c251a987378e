//! Municipal contact directory entries

use serde::{Deserialize, Serialize};

/// A municipal department residents can reach directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u64,
    pub department: String,
    pub description: String,
    pub phone: String,
    pub email: String,
}
