use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: String,
    pub name: String,
    pub category: String,
    pub icon: String,
    pub description: String,
}
