//! Risk categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk category, ordered by severity
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// No rule set matched (yet)
    #[default]
    Uncategorized,
    /// Stable
    Green,
    /// At risk
    Orange,
    /// Critical
    Red,
}

impl Category {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Uncategorized => "uncategorized",
            Category::Green => "green",
            Category::Orange => "orange",
            Category::Red => "red",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
