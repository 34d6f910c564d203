//! Portfolio category entity
//!
//! The seven portfolio buckets and the Google Drive folders that back them.

use serde::Serialize;

/// A named bucket of portfolio content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Boxing,
    Food,
    Gym,
    Jewellery,
    Portraits,
    Sports,
    Reels,
}

impl Category {
    /// Every category, in portfolio display order
    pub const ALL: [Category; 7] = [
        Category::Boxing,
        Category::Food,
        Category::Gym,
        Category::Jewellery,
        Category::Portraits,
        Category::Sports,
        Category::Reels,
    ];

    /// Google Drive folder holding this category's images
    pub fn folder_id(&self) -> &'static str {
        match self {
            Category::Boxing => "1NQU_f6yya0LWnsybExRA_ctVFUZjnrV6",
            Category::Food => "1RBtzqXIVl4-cp03VZSUxFndVyGTmiafe",
            Category::Gym => "14TbyU-TAWsiqo2JHb_q1nf9pL-24WWzt",
            Category::Jewellery => "1ewTYQD0NbfgE2sHmMMP1SUyS88E6cKoQ",
            Category::Portraits => "1vkEl6sOR0Mqv6qp2f_mDsWNkGxolfCBp",
            Category::Sports => "15ukGGuJAmjUmlrmaDsu3dfBGtnjx-lho",
            Category::Reels => "1Fl4i5xX_KBMeanEdvRF8X9ssAk-pYpsH",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Boxing => "Boxing",
            Category::Food => "Food",
            Category::Gym => "Gym",
            Category::Jewellery => "Jewellery",
            Category::Portraits => "Portraits",
            Category::Sports => "Sports",
            Category::Reels => "Reels",
        }
    }

    /// Drive's own folder view, used when no structured listing is available
    pub fn embed_url(&self) -> String {
        embed_url(self.folder_id())
    }
}

/// Embedded folder view for an arbitrary Drive folder id
pub fn embed_url(folder_id: &str) -> String {
    format!(
        "https://drive.google.com/embeddedfolderview?id={}#grid",
        folder_id
    )
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Boxing => write!(f, "boxing"),
            Category::Food => write!(f, "food"),
            Category::Gym => write!(f, "gym"),
            Category::Jewellery => write!(f, "jewellery"),
            Category::Portraits => write!(f, "portraits"),
            Category::Sports => write!(f, "sports"),
            Category::Reels => write!(f, "reels"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    /// Category names are matched exactly, the way the site links them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boxing" => Ok(Category::Boxing),
            "food" => Ok(Category::Food),
            "gym" => Ok(Category::Gym),
            "jewellery" => Ok(Category::Jewellery),
            "portraits" => Ok(Category::Portraits),
            "sports" => Ok(Category::Sports),
            "reels" => Ok(Category::Reels),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}
