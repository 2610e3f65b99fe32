//! Review statistics, filtering and sorting

use luxe_core::Review;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::{Catalog, Error, Result};

/// Aggregate over one hotel's reviews
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    /// Mean star rating rounded to one decimal, 0 when there are no reviews
    pub average_rating: f64,
    pub total_reviews: usize,
    /// Count per star bucket, keys 1 through 5 always present
    pub distribution: BTreeMap<u8, usize>,
}

impl ReviewStats {
    pub fn from_reviews<'a>(reviews: impl IntoIterator<Item = &'a Review>) -> Self {
        let mut distribution: BTreeMap<u8, usize> = (1..=5).map(|stars| (stars, 0)).collect();
        let mut total = 0usize;
        let mut sum = 0u64;

        for review in reviews {
            if let Some(count) = distribution.get_mut(&review.rating) {
                *count += 1;
                total += 1;
                sum += u64::from(review.rating);
            }
        }

        let average_rating = if total == 0 {
            0.0
        } else {
            round_one_decimal(sum as f64 / total as f64)
        };

        Self {
            average_rating,
            total_reviews: total,
            distribution,
        }
    }

    pub fn count(&self, stars: u8) -> usize {
        self.distribution.get(&stars).copied().unwrap_or(0)
    }

    /// Share of reviews in a bucket, 0 to 100
    pub fn percent(&self, stars: u8) -> u32 {
        if self.total_reviews == 0 {
            return 0;
        }
        (self.count(stars) as f64 * 100.0 / self.total_reviews as f64).round() as u32
    }
}

/// Half away from zero, matching `f64::round`
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewSort {
    Recent,
    Helpful,
    Rating,
}

impl ReviewSort {
    pub const ALL: [ReviewSort; 3] = [ReviewSort::Recent, ReviewSort::Helpful, ReviewSort::Rating];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewSort::Recent => "recent",
            ReviewSort::Helpful => "helpful",
            ReviewSort::Rating => "rating",
        }
    }

    pub fn apply(&self, reviews: &mut [&Review]) {
        match self {
            ReviewSort::Recent => reviews.sort_by(|a, b| b.date.cmp(&a.date)),
            ReviewSort::Helpful => reviews.sort_by(|a, b| b.helpful.cmp(&a.helpful)),
            ReviewSort::Rating => reviews.sort_by(|a, b| b.rating.cmp(&a.rating)),
        }
    }
}

impl fmt::Display for ReviewSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewSort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ReviewSort::ALL
            .into_iter()
            .find(|sort| sort.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownReviewSort(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReviewFilter {
    /// Keep only reviews with exactly this many stars
    pub rating: Option<u8>,
    pub sort: Option<ReviewSort>,
}

impl Catalog {
    pub fn reviews_for_hotel(&self, hotel_id: &str) -> Vec<&Review> {
        self.store()
            .reviews()
            .iter()
            .filter(|r| r.hotel_id == hotel_id)
            .collect()
    }

    pub fn review_stats(&self, hotel_id: &str) -> ReviewStats {
        ReviewStats::from_reviews(self.reviews_for_hotel(hotel_id))
    }

    pub fn filter_reviews(&self, hotel_id: &str, filter: &ReviewFilter) -> Vec<&Review> {
        let mut reviews = self.reviews_for_hotel(hotel_id);
        if let Some(stars) = filter.rating {
            reviews.retain(|r| r.rating == stars);
        }
        if let Some(sort) = filter.sort {
            sort.apply(&mut reviews);
        }
        reviews
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::catalog;
    use chrono::NaiveDate;

    fn review(id: &str, rating: u8) -> Review {
        Review {
            id: id.into(),
            hotel_id: "x".into(),
            user_id: "u".into(),
            user_name: "Tester".into(),
            user_avatar: "T".into(),
            rating,
            title: String::new(),
            comment: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            helpful: 0,
            not_helpful: 0,
            room_type: String::new(),
            stay_duration: String::new(),
            travel_type: String::new(),
        }
    }

    #[test]
    fn test_stats_for_fixture_hotel() {
        let stats = catalog().review_stats("1");
        assert_eq!(stats.total_reviews, 3);
        assert_eq!(stats.count(5), 2);
        assert_eq!(stats.count(4), 1);
        assert_eq!(stats.average_rating, 4.7);
    }

    #[test]
    fn test_buckets_sum_to_total() {
        let catalog = catalog();
        for hotel in catalog.hotels() {
            let stats = catalog.review_stats(&hotel.id);
            let sum: usize = stats.distribution.values().sum();
            assert_eq!(sum, stats.total_reviews);
            assert_eq!(stats.distribution.len(), 5);
        }
    }

    #[test]
    fn test_no_reviews_is_all_zero() {
        let stats = catalog().review_stats("4");
        assert_eq!(stats.total_reviews, 0);
        assert_eq!(stats.average_rating, 0.0);
        assert!(stats.distribution.values().all(|&c| c == 0));
        assert_eq!(stats.percent(5), 0);
    }

    #[test]
    fn test_average_rounds_half_away_from_zero() {
        // 4 + 4 + 4 + 5 = 17 / 4 = 4.25
        let reviews = [review("a", 4), review("b", 4), review("c", 4), review("d", 5)];
        let stats = ReviewStats::from_reviews(&reviews);
        assert_eq!(stats.average_rating, 4.3);
        assert_eq!(stats.percent(4), 75);
    }

    #[test]
    fn test_stats_serialize_camel_case() {
        let json = serde_json::to_value(catalog().review_stats("2")).unwrap();
        assert_eq!(json["totalReviews"], 2);
        assert_eq!(json["averageRating"], 5.0);
        assert_eq!(json["distribution"]["5"], 2);
    }

    #[test]
    fn test_filter_by_exact_rating() {
        let catalog = catalog();
        let filter = ReviewFilter {
            rating: Some(4),
            sort: None,
        };
        let fours = catalog.filter_reviews("3", &filter);
        assert_eq!(fours.len(), 2);
        assert!(fours.iter().all(|r| r.rating == 4));
    }

    #[test]
    fn test_sort_orders() {
        let catalog = catalog();

        let recent = catalog.filter_reviews(
            "3",
            &ReviewFilter {
                rating: None,
                sort: Some(ReviewSort::Recent),
            },
        );
        assert!(recent.windows(2).all(|w| w[0].date >= w[1].date));

        let helpful = catalog.filter_reviews(
            "3",
            &ReviewFilter {
                rating: None,
                sort: Some(ReviewSort::Helpful),
            },
        );
        assert_eq!(helpful[0].helpful, 25);

        let rated = catalog.filter_reviews(
            "3",
            &ReviewFilter {
                rating: None,
                sort: Some(ReviewSort::Rating),
            },
        );
        assert_eq!(rated[0].rating, 5);
        assert_eq!(rated.last().map(|r| r.rating), Some(3));
    }

    #[test]
    fn test_review_sort_parse() {
        assert_eq!("Helpful".parse::<ReviewSort>().unwrap(), ReviewSort::Helpful);
        assert!("oldest".parse::<ReviewSort>().is_err());
    }
}
