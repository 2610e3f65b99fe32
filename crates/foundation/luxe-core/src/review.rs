use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A guest review of one hotel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub hotel_id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_avatar: String,
    /// Whole stars, 1 through 5
    pub rating: u8,
    pub title: String,
    pub comment: String,
    pub date: NaiveDate,
    pub helpful: u32,
    pub not_helpful: u32,
    pub room_type: String,
    pub stay_duration: String,
    pub travel_type: String,
}

impl Review {
    pub fn validate(&self) -> Result<()> {
        if !(1..=5).contains(&self.rating) {
            return Err(Error::invalid(
                "review",
                &self.id,
                format!("rating {} outside 1..=5", self.rating),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_from_fixture_json() {
        let json = r#"{
            "id": "r1", "hotelId": "1", "userId": "u1", "userName": "Ana",
            "userAvatar": "A", "rating": 4, "title": "Lovely", "comment": "Great views",
            "date": "2024-05-02", "helpful": 12, "notHelpful": 1,
            "roomType": "Deluxe King Room", "stayDuration": "3 nights", "travelType": "Couple"
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.rating, 4);
        assert_eq!(review.date, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        assert!(review.validate().is_ok());
    }

    #[test]
    fn test_zero_star_review_rejected() {
        let json = r#"{
            "id": "r0", "hotelId": "1", "userId": "u1", "userName": "Ana",
            "userAvatar": "A", "rating": 0, "title": "", "comment": "",
            "date": "2024-05-02", "helpful": 0, "notHelpful": 0,
            "roomType": "", "stayDuration": "", "travelType": ""
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert!(review.validate().is_err());
    }
}
