use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four record categories produced for the map viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Resources,
    Collectibles,
    Artifacts,
    Wells,
}

impl Category {
    /// Every category, in output order.
    pub const ALL: [Category; 4] = [
        Category::Resources,
        Category::Collectibles,
        Category::Artifacts,
        Category::Wells,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Category::Resources => "resources",
            Category::Collectibles => "collectibles",
            Category::Artifacts => "artifacts",
            Category::Wells => "wells",
        }
    }

    /// Name of the JSON file this category is persisted to.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.json", self.slug())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}
