//! Stay pricing: nightly rate times nights, a flat service fee and extras

use chrono::NaiveDate;
use luxe_config::BookingConfig;
use luxe_core::ExtraFacility;
use serde::Serialize;

/// Fixed terms every quote is computed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    pub nights: u32,
    pub service_fee: u32,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            nights: 5,
            service_fee: 170,
        }
    }
}

impl From<&BookingConfig> for PricingPolicy {
    fn from(config: &BookingConfig) -> Self {
        Self {
            nights: config.nights,
            service_fee: config.service_fee,
        }
    }
}

impl PricingPolicy {
    pub fn quote(&self, nightly_rate: u32, extras: &[ExtraFacility]) -> PriceQuote {
        let accommodation = nightly_rate.saturating_mul(self.nights);
        let lines: Vec<QuoteLine> = extras
            .iter()
            .map(|e| QuoteLine {
                name: e.name.clone(),
                amount: e.price,
            })
            .collect();
        let extras_total = lines.iter().fold(0u32, |sum, l| sum.saturating_add(l.amount));

        PriceQuote {
            nightly_rate,
            nights: self.nights,
            accommodation,
            service_fee: self.service_fee,
            extras: lines,
            extras_total,
            total: accommodation
                .saturating_add(self.service_fee)
                .saturating_add(extras_total),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteLine {
    pub name: String,
    pub amount: u32,
}

/// Itemised price of one stay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub nightly_rate: u32,
    pub nights: u32,
    pub accommodation: u32,
    pub service_fee: u32,
    pub extras: Vec<QuoteLine>,
    pub extras_total: u32,
    pub total: u32,
}

/// Whole days between two dates, in either order
pub fn calculate_nights(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
    (check_out - check_in).num_days().unsigned_abs() as u32
}

/// `base_price * nights + sum(extras)`, no service fee. Saturates at `u32::MAX`.
pub fn calculate_total_price(base_price: u32, nights: u32, extras: &[u32]) -> u32 {
    extras
        .iter()
        .fold(base_price.saturating_mul(nights), |sum, e| sum.saturating_add(*e))
}

/// Price after a percentage discount, rounded to the nearest whole unit
pub fn apply_discount(price: u32, discount_percent: u8) -> u32 {
    let factor = 1.0 - f64::from(discount_percent.min(100)) / 100.0;
    (f64::from(price) * factor).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extra(id: &str, name: &str, price: u32) -> ExtraFacility {
        ExtraFacility {
            id: id.into(),
            name: name.into(),
            price,
        }
    }

    #[test]
    fn test_base_quote() {
        let quote = PricingPolicy::default().quote(450, &[]);
        assert_eq!(quote.accommodation, 2250);
        assert_eq!(quote.total, 2420);
    }

    #[test]
    fn test_quote_with_extras() {
        let extras = [extra("e1", "Buffet Breakfast", 45), extra("e2", "Spa Access", 120)];
        let quote = PricingPolicy::default().quote(400, &extras);
        assert_eq!(quote.extras_total, 165);
        assert_eq!(quote.total, 400 * 5 + 170 + 165);
        assert_eq!(quote.extras[1].name, "Spa Access");
    }

    #[test]
    fn test_policy_from_config() {
        let config = BookingConfig {
            nights: 3,
            service_fee: 0,
            ..BookingConfig::default()
        };
        let quote = PricingPolicy::from(&config).quote(100, &[]);
        assert_eq!(quote.total, 300);
    }

    #[test]
    fn test_oversized_stay_saturates() {
        let policy = PricingPolicy {
            nights: 10_000_000,
            service_fee: 170,
        };
        let quote = policy.quote(850, &[extra("e1", "Buffet Breakfast", 45)]);
        assert_eq!(quote.accommodation, u32::MAX);
        assert_eq!(quote.total, u32::MAX);
        assert_eq!(calculate_total_price(u32::MAX, 2, &[10]), u32::MAX);
    }

    #[test]
    fn test_calculate_nights_either_order() {
        let a = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        assert_eq!(calculate_nights(a, b), 5);
        assert_eq!(calculate_nights(b, a), 5);
        assert_eq!(calculate_nights(a, a), 0);
    }

    #[test]
    fn test_total_and_discount_helpers() {
        assert_eq!(calculate_total_price(320, 4, &[15, 45]), 1340);
        assert_eq!(apply_discount(850, 30), 595);
        assert_eq!(apply_discount(333, 15), 283);
        assert_eq!(apply_discount(100, 0), 100);
        assert_eq!(apply_discount(100, 100), 0);
    }
}
