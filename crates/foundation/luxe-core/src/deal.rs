//! Time-bounded discount offers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DealType {
    Seasonal,
    LastMinute,
    Package,
}

impl DealType {
    pub const ALL: [DealType; 3] = [DealType::Seasonal, DealType::LastMinute, DealType::Package];

    pub fn as_str(&self) -> &'static str {
        match self {
            DealType::Seasonal => "seasonal",
            DealType::LastMinute => "last-minute",
            DealType::Package => "package",
        }
    }

    /// Tab label on the deals screen
    pub fn label(&self) -> &'static str {
        match self {
            DealType::Seasonal => "Seasonal",
            DealType::LastMinute => "Last Minute",
            DealType::Package => "Packages",
        }
    }
}

impl fmt::Display for DealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DealType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        DealType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| Error::UnknownDealType(s.to_string()))
    }
}

/// Remaining validity of a deal, as shown on deal cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLeft {
    Expired,
    Days(i64),
    Hours(i64),
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TimeLeft::Expired => f.write_str("Expired"),
            TimeLeft::Days(d) => write!(f, "{} day{} left", d, if d == 1 { "" } else { "s" }),
            TimeLeft::Hours(h) => write!(f, "{} hour{} left", h, if h == 1 { "" } else { "s" }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub deal_type: DealType,
    pub discount_percent: u8,
    #[serde(default)]
    pub hotel_ids: Vec<String>,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    #[serde(default)]
    pub booking_period: String,
    #[serde(default)]
    pub travel_period: String,
    pub image: String,
    #[serde(default)]
    pub terms: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub savings: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub includes: Option<Vec<String>>,
}

impl Deal {
    pub fn validate(&self) -> Result<()> {
        if self.valid_from > self.valid_until {
            return Err(Error::invalid("deal", &self.id, "validFrom is after validUntil"));
        }
        if self.discount_percent > 100 {
            return Err(Error::invalid(
                "deal",
                &self.id,
                format!("discount {}% above 100%", self.discount_percent),
            ));
        }
        Ok(())
    }

    /// Active iff `valid_from <= now <= valid_until`, both bounds inclusive.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.valid_from <= now && now <= self.valid_until
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.valid_until
    }

    pub fn time_left_at(&self, now: DateTime<Utc>) -> TimeLeft {
        let remaining = self.valid_until - now;
        if remaining <= chrono::Duration::zero() {
            return TimeLeft::Expired;
        }
        let days = remaining.num_days();
        if days > 0 {
            TimeLeft::Days(days)
        } else {
            TimeLeft::Hours(remaining.num_hours())
        }
    }

    pub fn includes(&self) -> &[String] {
        self.includes.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn deal(from: DateTime<Utc>, until: DateTime<Utc>) -> Deal {
        Deal {
            id: "d1".into(),
            title: "Summer".into(),
            description: String::new(),
            deal_type: DealType::Seasonal,
            discount_percent: 20,
            hotel_ids: vec!["5".into()],
            valid_from: from,
            valid_until: until,
            booking_period: String::new(),
            travel_period: String::new(),
            image: String::new(),
            terms: vec![],
            featured: false,
            savings: String::new(),
            includes: None,
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_deal_type_parse() {
        assert_eq!("last-minute".parse::<DealType>().unwrap(), DealType::LastMinute);
        assert_eq!("last_minute".parse::<DealType>().unwrap(), DealType::LastMinute);
        assert_eq!("Package".parse::<DealType>().unwrap(), DealType::Package);
        assert!("flash".parse::<DealType>().is_err());
    }

    #[test]
    fn test_deal_type_serde() {
        let json = serde_json::to_string(&DealType::LastMinute).unwrap();
        assert_eq!(json, "\"last-minute\"");
    }

    #[test]
    fn test_active_window_inclusive() {
        let d = deal(at(2025, 6, 1, 0), at(2025, 8, 31, 0));

        assert!(!d.is_active_at(at(2025, 5, 31, 23)));
        assert!(d.is_active_at(at(2025, 6, 1, 0)));
        assert!(d.is_active_at(at(2025, 7, 15, 12)));
        assert!(d.is_active_at(at(2025, 8, 31, 0)));
        assert!(!d.is_active_at(at(2025, 8, 31, 1)));
        assert!(d.is_expired_at(at(2025, 8, 31, 1)));
    }

    #[test]
    fn test_inverted_window_rejected() {
        let d = deal(at(2025, 8, 31, 0), at(2025, 6, 1, 0));
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_time_left_labels() {
        let d = deal(at(2025, 1, 1, 0), at(2025, 1, 10, 0));

        assert_eq!(d.time_left_at(at(2025, 1, 8, 0)), TimeLeft::Days(2));
        assert_eq!(d.time_left_at(at(2025, 1, 9, 0)).to_string(), "1 day left");
        assert_eq!(d.time_left_at(at(2025, 1, 9, 19)), TimeLeft::Hours(5));
        assert_eq!(d.time_left_at(at(2025, 1, 9, 23)).to_string(), "1 hour left");
        assert_eq!(d.time_left_at(at(2025, 1, 10, 0)), TimeLeft::Expired);
        assert_eq!(TimeLeft::Expired.to_string(), "Expired");
    }
}
