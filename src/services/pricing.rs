//! Rental pricing
//!
//! A rental is billed per started day. The effective daily rate depends on
//! the length of the rental: 30 days or more use the monthly price spread
//! over 30 days, 7 days or more use the weekly price spread over 7 days,
//! anything shorter uses the listed daily price. There is no proration
//! across tiers.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use utoipa::ToSchema;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Listed prices of one equipment item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateCard {
    pub daily: Decimal,
    pub weekly: Decimal,
    pub monthly: Decimal,
}

impl RateCard {
    /// Effective daily rate for a rental of `days` days
    pub fn daily_rate(&self, days: i64) -> Decimal {
        if days >= 30 {
            self.monthly / Decimal::from(30)
        } else if days >= 7 {
            self.weekly / Decimal::from(7)
        } else {
            self.daily
        }
    }
}

/// Computed price for a rental range
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PriceQuote {
    /// Billed days (started days count as whole days)
    pub days: i64,
    /// Effective daily rate, rounded to cents
    pub daily_rate: Decimal,
    pub quantity: i32,
    pub total_price: Decimal,
}

/// Whole days between `start` and `end`, rounded up; zero when `end` is
/// not after `start`
pub fn rental_days(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let ms = (end - start).num_milliseconds();
    if ms <= 0 {
        0
    } else {
        (ms + DAY_MS - 1) / DAY_MS
    }
}

fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Price a rental. Empty or inverted ranges cost nothing.
pub fn quote(card: &RateCard, start: DateTime<Utc>, end: DateTime<Utc>, quantity: i32) -> PriceQuote {
    let days = rental_days(start, end);
    let rate = card.daily_rate(days);

    let total = if days <= 0 {
        Decimal::ZERO
    } else {
        round_cents(rate * Decimal::from(days) * Decimal::from(quantity))
    };

    PriceQuote {
        days,
        daily_rate: round_cents(rate),
        quantity,
        total_price: total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn card(daily: i64, weekly: i64, monthly: i64) -> RateCard {
        RateCard {
            daily: Decimal::from(daily),
            weekly: Decimal::from(weekly),
            monthly: Decimal::from(monthly),
        }
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_one_day_uses_daily_price() {
        let q = quote(&card(100, 600, 2000), start(), start() + Duration::days(1), 1);
        assert_eq!(q.days, 1);
        assert_eq!(q.total_price, Decimal::from(100));
    }

    #[test]
    fn test_seven_days_uses_weekly_price() {
        let q = quote(&card(150, 700, 2500), start(), start() + Duration::days(7), 1);
        assert_eq!(q.days, 7);
        assert_eq!(q.daily_rate, Decimal::from(100));
        assert_eq!(q.total_price, Decimal::from(700));
    }

    #[test]
    fn test_thirty_days_uses_monthly_price() {
        let q = quote(&card(150, 800, 3000), start(), start() + Duration::days(30), 1);
        assert_eq!(q.days, 30);
        assert_eq!(q.total_price, Decimal::from(3000));
    }

    #[test]
    fn test_six_days_stays_on_daily_tier() {
        let q = quote(&card(100, 500, 2000), start(), start() + Duration::days(6), 1);
        assert_eq!(q.total_price, Decimal::from(600));
    }

    #[test]
    fn test_partial_day_counts_as_whole_day() {
        let q = quote(&card(100, 700, 3000), start(), start() + Duration::hours(25), 1);
        assert_eq!(q.days, 2);
        assert_eq!(q.total_price, Decimal::from(200));
    }

    #[test]
    fn test_quantity_multiplies_total() {
        let q = quote(&card(80, 400, 1500), start(), start() + Duration::days(2), 3);
        assert_eq!(q.total_price, Decimal::from(480));
    }

    #[test]
    fn test_empty_or_inverted_range_is_free() {
        let c = card(100, 700, 3000);
        assert_eq!(quote(&c, start(), start(), 1).total_price, Decimal::ZERO);
        let q = quote(&c, start(), start() - Duration::days(3), 1);
        assert_eq!(q.days, 0);
        assert_eq!(q.total_price, Decimal::ZERO);
    }

    #[test]
    fn test_total_rounded_to_cents() {
        // 1000 / 7 does not divide evenly
        let q = quote(&card(200, 1000, 4000), start(), start() + Duration::days(7), 1);
        assert_eq!(q.total_price, Decimal::new(100000, 2));
        assert_eq!(q.daily_rate, Decimal::new(14286, 2));
    }
}
