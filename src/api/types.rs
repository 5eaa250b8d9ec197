use serde::{Deserialize, Serialize};

/// A quest as delivered by the platform's quest feed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Reward in platform points.
    pub reward: u32,
    /// Remote banner image; only rendered if the origin allowlist permits it.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Response envelope for `GET /quests`.
#[derive(Deserialize, Debug)]
pub struct QuestFeed {
    pub quests: Vec<Quest>,
}
