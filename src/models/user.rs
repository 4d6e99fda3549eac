//! User model for storage.

use serde::{Deserialize, Serialize};

/// A dataset user, keyed by its directory name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Directory name from the dataset (also used as document ID)
    pub id: String,
    /// Whether a label file exists for this user
    pub has_labels: bool,
}
