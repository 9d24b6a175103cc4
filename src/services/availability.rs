//! Equipment availability calendar
//!
//! Approved rentals block every calendar day (UTC) from their start date
//! to their end date inclusive. Pending, rejected and completed requests
//! never block, so overlapping pending requests can coexist.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::rental::{RentalRequest, RentalStatus},
};

/// Blocked dates of one equipment item
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Availability {
    pub equipment_id: i32,
    pub blocked_dates: Vec<NaiveDate>,
}

/// Every day from `start` to `end`, inclusive
pub fn expand_days(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

/// Union of the days covered by approved rentals
pub fn blocked_dates<'a, I>(rentals: I) -> BTreeSet<NaiveDate>
where
    I: IntoIterator<Item = &'a RentalRequest>,
{
    rentals
        .into_iter()
        .filter(|rental| rental.status == RentalStatus::Approved)
        .flat_map(|rental| expand_days(rental.start_date.date_naive(), rental.end_date.date_naive()))
        .collect()
}

/// Reject ranges covering more than `max_days` calendar days (inclusive)
pub fn check_span(start: DateTime<Utc>, end: DateTime<Utc>, max_days: i64) -> AppResult<()> {
    let days = (end.date_naive() - start.date_naive()).num_days() + 1;
    if days > max_days {
        return Err(AppError::Validation(format!(
            "Rentals are limited to {} days, requested {}",
            max_days, days
        )));
    }
    Ok(())
}

/// Selectable-day rules for one equipment item
#[derive(Debug, Clone)]
pub struct AvailabilityCalendar {
    blocked: BTreeSet<NaiveDate>,
    today: NaiveDate,
}

impl AvailabilityCalendar {
    pub fn new(blocked: BTreeSet<NaiveDate>, today: NaiveDate) -> Self {
        Self { blocked, today }
    }

    pub fn from_rentals(rentals: &[RentalRequest], today: NaiveDate) -> Self {
        Self::new(blocked_dates(rentals), today)
    }

    pub fn is_blocked(&self, date: NaiveDate) -> bool {
        self.blocked.contains(&date)
    }

    pub fn is_in_past(&self, date: NaiveDate) -> bool {
        date < self.today
    }

    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        !self.is_in_past(date) && !self.is_blocked(date)
    }

    /// No blocked day between `start` and `end`, inclusive
    pub fn range_is_free(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.blocked.range(start..=end).next().is_none()
    }

    pub fn blocked(&self) -> impl Iterator<Item = &NaiveDate> {
        self.blocked.iter()
    }

    /// Validate a requested rental range against the calendar
    pub fn check_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> AppResult<()> {
        if end < start {
            return Err(AppError::Validation("End date must not be before start date".to_string()));
        }
        let (start, end) = (start.date_naive(), end.date_naive());

        if self.is_in_past(start) {
            return Err(AppError::Validation(format!("Start date {} is in the past", start)));
        }

        let selection = DateSelection::Empty.click(start, self).click(end, self);
        if selection.range() != Some((start, end)) || !self.range_is_free(start, end) {
            return Err(AppError::BusinessRule(format!(
                "Equipment is already booked between {} and {}",
                start, end
            )));
        }
        Ok(())
    }
}

/// Two-click range picker state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSelection {
    Empty,
    Open(NaiveDate),
    Closed(NaiveDate, NaiveDate),
}

impl DateSelection {
    /// Apply a click on `date`. Unselectable days are ignored; a second
    /// click before the open start restarts the range there.
    pub fn click(self, date: NaiveDate, calendar: &AvailabilityCalendar) -> Self {
        if !calendar.is_selectable(date) {
            return self;
        }
        match self {
            DateSelection::Open(start) if date >= start => DateSelection::Closed(start, date),
            _ => DateSelection::Open(date),
        }
    }

    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match *self {
            DateSelection::Closed(start, end) => Some((start, end)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
    }

    fn rental(start: u32, end: u32, status: RentalStatus) -> RentalRequest {
        let now = Utc::now();
        RentalRequest {
            id: 1,
            equipment_id: 7,
            user_id: "user_1".to_string(),
            start_date: Utc.with_ymd_and_hms(2025, 7, start, 9, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 7, end, 18, 0, 0).unwrap(),
            quantity: 1,
            total_price: Decimal::from(300),
            status,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_approved_rental_blocks_inclusive_range() {
        let rentals = vec![rental(10, 12, RentalStatus::Approved)];
        let calendar = AvailabilityCalendar::from_rentals(&rentals, day(1));

        let blocked: Vec<_> = calendar.blocked().copied().collect();
        assert_eq!(blocked, vec![day(10), day(11), day(12)]);
        assert!(calendar.is_selectable(day(9)));
        assert!(calendar.is_selectable(day(13)));
    }

    #[test]
    fn test_non_approved_rentals_do_not_block() {
        let rentals = vec![
            rental(10, 12, RentalStatus::Pending),
            rental(11, 14, RentalStatus::Rejected),
            rental(2, 3, RentalStatus::Completed),
        ];
        assert!(blocked_dates(&rentals).is_empty());
    }

    #[test]
    fn test_overlapping_approved_rentals_union() {
        let rentals = vec![
            rental(10, 12, RentalStatus::Approved),
            rental(12, 13, RentalStatus::Approved),
        ];
        assert_eq!(blocked_dates(&rentals).len(), 4);
    }

    #[test]
    fn test_past_dates_not_selectable() {
        let calendar = AvailabilityCalendar::new(BTreeSet::new(), day(15));
        assert!(!calendar.is_selectable(day(14)));
        assert!(calendar.is_selectable(day(15)));
    }

    #[test]
    fn test_selection_opens_then_closes() {
        let calendar = AvailabilityCalendar::new(BTreeSet::new(), day(1));
        let selection = DateSelection::Empty.click(day(5), &calendar);
        assert_eq!(selection, DateSelection::Open(day(5)));
        let selection = selection.click(day(8), &calendar);
        assert_eq!(selection.range(), Some((day(5), day(8))));
    }

    #[test]
    fn test_earlier_second_click_restarts() {
        let calendar = AvailabilityCalendar::new(BTreeSet::new(), day(1));
        let selection = DateSelection::Empty
            .click(day(8), &calendar)
            .click(day(5), &calendar);
        assert_eq!(selection, DateSelection::Open(day(5)));
    }

    #[test]
    fn test_click_after_closed_range_starts_over() {
        let calendar = AvailabilityCalendar::new(BTreeSet::new(), day(1));
        let selection = DateSelection::Closed(day(3), day(4)).click(day(20), &calendar);
        assert_eq!(selection, DateSelection::Open(day(20)));
    }

    #[test]
    fn test_blocked_click_ignored() {
        let calendar = AvailabilityCalendar::from_rentals(&[rental(10, 12, RentalStatus::Approved)], day(1));
        let selection = DateSelection::Open(day(5)).click(day(11), &calendar);
        assert_eq!(selection, DateSelection::Open(day(5)));
    }

    #[test]
    fn test_span_limit_boundary() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
        let last_allowed = Utc.with_ymd_and_hms(2025, 12, 31, 18, 0, 0).unwrap();

        assert!(check_span(start, last_allowed, 365).is_ok());
        assert!(matches!(
            check_span(start, last_allowed + chrono::Duration::days(1), 365),
            Err(AppError::Validation(_))
        ));
        assert!(check_span(start, start, 1).is_ok());
    }

    #[test]
    fn test_far_future_end_rejected() {
        let start = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(9999, 12, 31, 0, 0, 0).unwrap();
        assert!(matches!(check_span(start, end, 365), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_check_range_rejects_booked_span() {
        let calendar = AvailabilityCalendar::from_rentals(&[rental(10, 12, RentalStatus::Approved)], day(1));
        let at = |d| Utc.with_ymd_and_hms(2025, 7, d, 12, 0, 0).unwrap();

        assert!(calendar.check_range(at(5), at(9)).is_ok());
        assert!(calendar.check_range(at(13), at(20)).is_ok());
        // endpoints free but the range spans the booking
        assert!(matches!(
            calendar.check_range(at(8), at(14)),
            Err(AppError::BusinessRule(_))
        ));
        assert!(matches!(
            calendar.check_range(at(9), at(4)),
            Err(AppError::Validation(_))
        ));
    }
}
