use serde::{Deserialize, Serialize};

/// A named region aggregate. `hotel_ids` is a lookup set, not ownership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub country: String,
    pub region: String,
    pub slug: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub hero_image: String,
    #[serde(default)]
    pub best_time_to_visit: String,
    #[serde(default)]
    pub average_temp: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub hotel_ids: Vec<String>,
    #[serde(default)]
    pub attractions: Vec<String>,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Destination {
    pub fn hotel_count(&self) -> usize {
        self.hotel_ids.len()
    }
}
