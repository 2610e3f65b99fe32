//! Deal activity windows and the deals screen tabs

use chrono::{DateTime, Utc};
use luxe_core::{Deal, DealType};
use std::fmt;
use std::str::FromStr;

use crate::{Catalog, Error, Result};

/// Tabs on the deals screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DealsTab {
    /// Everything not yet expired, including deals that have not started
    #[default]
    All,
    Type(DealType),
}

impl DealsTab {
    pub fn all_tabs() -> impl Iterator<Item = DealsTab> {
        std::iter::once(DealsTab::All).chain(DealType::ALL.into_iter().map(DealsTab::Type))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DealsTab::All => "all",
            DealsTab::Type(t) => t.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DealsTab::All => "All Deals",
            DealsTab::Type(t) => t.label(),
        }
    }
}

impl fmt::Display for DealsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DealsTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() || s.trim().eq_ignore_ascii_case("all") {
            return Ok(DealsTab::All);
        }
        s.parse::<DealType>()
            .map(DealsTab::Type)
            .map_err(|_| Error::UnknownTab(s.to_string()))
    }
}

impl Catalog {
    pub fn deals(&self) -> &[Deal] {
        self.store().deals()
    }

    pub fn deal(&self, id: &str) -> Option<&Deal> {
        self.store().deals().iter().find(|d| d.id == id)
    }

    pub fn active_deals_at(&self, now: DateTime<Utc>) -> Vec<&Deal> {
        self.store()
            .deals()
            .iter()
            .filter(|d| d.is_active_at(now))
            .collect()
    }

    pub fn active_deals(&self) -> Vec<&Deal> {
        self.active_deals_at(Utc::now())
    }

    pub fn featured_deals_at(&self, now: DateTime<Utc>) -> Vec<&Deal> {
        let mut deals = self.active_deals_at(now);
        deals.retain(|d| d.featured);
        deals
    }

    pub fn featured_deals(&self) -> Vec<&Deal> {
        self.featured_deals_at(Utc::now())
    }

    pub fn deals_by_type_at(&self, deal_type: DealType, now: DateTime<Utc>) -> Vec<&Deal> {
        let mut deals = self.active_deals_at(now);
        deals.retain(|d| d.deal_type == deal_type);
        deals
    }

    pub fn deals_by_type(&self, deal_type: DealType) -> Vec<&Deal> {
        self.deals_by_type_at(deal_type, Utc::now())
    }

    /// Active deals that reference `hotel_id`
    pub fn hotel_deals_at(&self, hotel_id: &str, now: DateTime<Utc>) -> Vec<&Deal> {
        let mut deals = self.active_deals_at(now);
        deals.retain(|d| d.hotel_ids.iter().any(|id| id == hotel_id));
        deals
    }

    pub fn hotel_deals(&self, hotel_id: &str) -> Vec<&Deal> {
        self.hotel_deals_at(hotel_id, Utc::now())
    }

    pub fn deals_for_tab_at(&self, tab: DealsTab, now: DateTime<Utc>) -> Vec<&Deal> {
        match tab {
            DealsTab::All => self
                .store()
                .deals()
                .iter()
                .filter(|d| !d.is_expired_at(now))
                .collect(),
            DealsTab::Type(t) => self.deals_by_type_at(t, now),
        }
    }

    pub fn deals_for_tab(&self, tab: DealsTab) -> Vec<&Deal> {
        self.deals_for_tab_at(tab, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::catalog;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn ids(deals: &[&Deal]) -> Vec<String> {
        deals.iter().map(|d| d.id.clone()).collect()
    }

    #[test]
    fn test_expired_and_upcoming_are_not_active() {
        let catalog = catalog();
        let active = ids(&catalog.active_deals_at(now()));
        assert!(!active.contains(&"deal4".to_string()));
        assert!(!active.contains(&"deal5".to_string()));
        assert_eq!(active, vec!["deal1", "deal2", "deal3", "deal6"]);
    }

    #[test]
    fn test_expired_deal_active_inside_its_window() {
        let catalog = catalog();
        let winter = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let active = ids(&catalog.deals_by_type_at(DealType::Seasonal, winter));
        assert_eq!(active, vec!["deal4"]);
    }

    #[test]
    fn test_typed_results_never_include_expired() {
        let catalog = catalog();
        for deal_type in DealType::ALL {
            for deal in catalog.deals_by_type_at(deal_type, now()) {
                assert_eq!(deal.deal_type, deal_type);
                assert!(deal.is_active_at(now()));
            }
        }
    }

    #[test]
    fn test_all_tab_includes_upcoming() {
        let catalog = catalog();
        let all = ids(&catalog.deals_for_tab_at(DealsTab::All, now()));
        assert!(all.contains(&"deal5".to_string()));
        assert!(!all.contains(&"deal4".to_string()));

        let packages = ids(&catalog.deals_for_tab_at(DealsTab::Type(DealType::Package), now()));
        assert_eq!(packages, vec!["deal3"]);
    }

    #[test]
    fn test_featured_and_hotel_deals() {
        let catalog = catalog();
        assert_eq!(ids(&catalog.featured_deals_at(now())), vec!["deal1", "deal2"]);
        assert_eq!(ids(&catalog.hotel_deals_at("1", now())), vec!["deal1", "deal3"]);
        assert!(catalog.hotel_deals_at("4", now()).is_empty());
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!("all".parse::<DealsTab>().unwrap(), DealsTab::All);
        assert_eq!("".parse::<DealsTab>().unwrap(), DealsTab::All);
        assert_eq!(
            "last-minute".parse::<DealsTab>().unwrap(),
            DealsTab::Type(DealType::LastMinute)
        );
        assert!("clearance".parse::<DealsTab>().is_err());
        assert_eq!(DealsTab::all_tabs().count(), 4);
    }

    #[test]
    fn test_deal_lookup() {
        let catalog = catalog();
        assert_eq!(catalog.deal("deal3").map(|d| d.includes().len()), Some(3));
        assert!(catalog.deal("nope").is_none());
    }
}
