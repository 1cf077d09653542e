//! # Booking Confirmation & History
//!
//! Turns an eligible stay into a `BookingRecord` and renders the
//! confirmation summary.
//!
//! ## Confirmation Flow
//! ```text
//! StayRequest::decide(auth)
//!      │
//!      ├── Rejected(reason) ──► confirm_booking returns Err(reason)
//!      │
//!      └── Eligible(quote) ──► ConfirmationSummary (shown in the dialog)
//!                                   │ user confirms (one shot, no undo)
//!                                   ▼
//!                              BookingRecord (status: Confirmed)
//! ```

use chrono::{NaiveDate, TimeZone};
use std::fmt;
use uuid::Uuid;

use crate::money::{Money, DEFAULT_CURRENCY_SYMBOL};
use crate::stay::{BookingDecision, RejectionReason, StayQuote, StayRequest};
use crate::types::{BookingRecord, BookingStatus, Hotel};

/// Formats a stay date the way the booking form shows it: `Mon, Nov 10`.
pub fn format_stay_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

// =============================================================================
// Confirmation Summary
// =============================================================================

/// Body of the "Confirm Booking" dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationSummary {
    pub hotel_name: String,
    pub location: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: u32,
    pub rooms: u32,
    pub guests: u32,
    pub total: Money,
}

impl ConfirmationSummary {
    /// Builds the summary for an eligible decision.
    pub fn for_decision<Tz: TimeZone>(
        hotel: &Hotel,
        request: &StayRequest<Tz>,
        decision: &BookingDecision,
    ) -> Result<Self, RejectionReason> {
        let quote = match decision {
            BookingDecision::Eligible(quote) => *quote,
            BookingDecision::Rejected(reason) => return Err(*reason),
        };

        Ok(ConfirmationSummary {
            hotel_name: hotel.name.clone(),
            location: hotel.location.clone(),
            check_in: request.check_in().date_naive(),
            check_out: request.check_out().date_naive(),
            nights: quote.nights,
            rooms: request.rooms(),
            guests: request.guests(),
            total: quote.total_cost,
        })
    }

    /// "R2200 × 1 room × 2 nights" line of the price summary.
    pub fn price_breakdown(&self, nightly_rate: Money, symbol: &str) -> String {
        let plural = |n: u32| if n > 1 { "s" } else { "" };
        format!(
            "{} × {} room{} × {} night{}",
            nightly_rate.format_with(symbol),
            self.rooms,
            plural(self.rooms),
            self.nights,
            plural(self.nights)
        )
    }

    /// Converts the accepted summary into a history record.
    pub fn into_record(self, booked_on: NaiveDate) -> BookingRecord {
        BookingRecord {
            id: Uuid::new_v4().to_string(),
            hotel_name: self.hotel_name,
            location: self.location,
            check_in: self.check_in,
            check_out: self.check_out,
            nights: self.nights,
            guests: self.guests,
            rooms: self.rooms,
            total_cents: self.total.cents(),
            status: BookingStatus::Confirmed,
            booked_on,
        }
    }

    /// Dialog text with amounts in `symbol`.
    pub fn render(&self, symbol: &str) -> String {
        format!(
            "Hotel: {}\nLocation: {}\nCheck-in: {}\nCheck-out: {}\nRooms: {}\nGuests: {}\nTotal: {}",
            self.hotel_name,
            self.location,
            format_stay_date(self.check_in),
            format_stay_date(self.check_out),
            self.rooms,
            self.guests,
            self.total.format_with(symbol)
        )
    }
}

impl fmt::Display for ConfirmationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl BookingRecord {
    /// Records an accepted quote for `hotel` as a confirmed booking.
    pub fn confirm<Tz: TimeZone>(
        hotel: &Hotel,
        request: &StayRequest<Tz>,
        quote: &StayQuote,
        today: NaiveDate,
    ) -> BookingRecord {
        ConfirmationSummary {
            hotel_name: hotel.name.clone(),
            location: hotel.location.clone(),
            check_in: request.check_in().date_naive(),
            check_out: request.check_out().date_naive(),
            nights: quote.nights,
            rooms: request.rooms(),
            guests: request.guests(),
            total: quote.total_cost,
        }
        .into_record(today)
    }
}

/// Gate, summarise and record in one step.
///
/// ## Returns
/// - `Ok(record)` for an eligible stay
/// - `Err(reason)` carrying the rejection the UI should surface
pub fn confirm_booking<Tz: TimeZone>(
    hotel: &Hotel,
    request: &StayRequest<Tz>,
    decision: &BookingDecision,
    booked_on: NaiveDate,
) -> Result<BookingRecord, RejectionReason> {
    ConfirmationSummary::for_decision(hotel, request, decision)
        .map(|summary| summary.into_record(booked_on))
}

// =============================================================================
// Travel Stats
// =============================================================================

/// Profile header numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TravelStats {
    pub bookings: usize,
    pub nights: u32,
    /// Confirmed bookings.
    pub upcoming: usize,
}

pub fn travel_stats(history: &[BookingRecord]) -> TravelStats {
    TravelStats {
        bookings: history.len(),
        nights: history.iter().map(|b| b.nights).fold(0, u32::saturating_add),
        upcoming: history
            .iter()
            .filter(|b| b.status == BookingStatus::Confirmed)
            .count(),
    }
}

// =============================================================================
// Sample History
// =============================================================================

/// Booking history a new profile starts with.
pub fn sample_bookings() -> Vec<BookingRecord> {
    let date = |y: i32, m: u32, d: u32| NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN);

    vec![
        BookingRecord {
            id: "1".to_string(),
            hotel_name: "Ocean View Hotel".to_string(),
            location: "Cape Town".to_string(),
            check_in: date(2025, 11, 10),
            check_out: date(2025, 11, 12),
            nights: 2,
            guests: 2,
            rooms: 1,
            total_cents: Money::from_major(4400).cents(),
            status: BookingStatus::Confirmed,
            booked_on: date(2024, 10, 25),
        },
        BookingRecord {
            id: "2".to_string(),
            hotel_name: "Mountain Lodge".to_string(),
            location: "Drakensberg".to_string(),
            check_in: date(2025, 12, 5),
            check_out: date(2025, 12, 8),
            nights: 3,
            guests: 4,
            rooms: 2,
            total_cents: Money::from_major(10_800).cents(),
            status: BookingStatus::Pending,
            booked_on: date(2024, 10, 20),
        },
        BookingRecord {
            id: "3".to_string(),
            hotel_name: "Sunset Beach Resort".to_string(),
            location: "Durban".to_string(),
            check_in: date(2025, 9, 15),
            check_out: date(2025, 9, 17),
            nights: 2,
            guests: 2,
            rooms: 1,
            total_cents: Money::from_major(3000).cents(),
            status: BookingStatus::Confirmed,
            booked_on: date(2024, 8, 30),
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_hotel, sample_hotels};
    use crate::clock::FixedClock;
    use crate::counter::BookingLimits;
    use crate::types::{AuthStatus, AuthUser};
    use chrono::Utc;

    fn request_for(hotel: &Hotel) -> StayRequest<Utc> {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 11, 10, 0, 0, 0).unwrap());
        let mut request =
            StayRequest::open(&clock, hotel.price_per_night(), BookingLimits::default()).unwrap();
        request.select_check_out(Utc.with_ymd_and_hms(2025, 11, 12, 0, 0, 0).unwrap());
        request
    }

    fn signed_in() -> AuthStatus {
        AuthStatus::Authenticated(AuthUser {
            uid: "u".to_string(),
            email: "u@example.com".to_string(),
            display_name: None,
        })
    }

    #[test]
    fn test_format_stay_date() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 10).unwrap();
        assert_eq!(format_stay_date(date), "Mon, Nov 10");
        let date = NaiveDate::from_ymd_opt(2025, 12, 5).unwrap();
        assert_eq!(format_stay_date(date), "Fri, Dec 5");
    }

    #[test]
    fn test_summary_text() {
        let hotels = sample_hotels();
        let hotel = find_hotel(&hotels, "1").unwrap();
        let request = request_for(hotel);
        let decision = request.decide(&signed_in()).unwrap();

        let summary = ConfirmationSummary::for_decision(hotel, &request, &decision).unwrap();
        assert_eq!(
            summary.to_string(),
            "Hotel: The Royal Hotel\nLocation: Cape Town\nCheck-in: Mon, Nov 10\n\
             Check-out: Wed, Nov 12\nRooms: 1\nGuests: 2\nTotal: R4400"
        );
        assert_eq!(
            summary.price_breakdown(hotel.price_per_night(), "R"),
            "R2200 × 1 room × 2 nights"
        );
    }

    #[test]
    fn test_confirm_booking_records_stay() {
        let hotels = sample_hotels();
        let hotel = find_hotel(&hotels, "1").unwrap();
        let request = request_for(hotel);
        let decision = request.decide(&signed_in()).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 10, 18).unwrap();

        let record = confirm_booking(hotel, &request, &decision, today).unwrap();
        assert_eq!(record.hotel_name, "The Royal Hotel");
        assert_eq!(record.nights, 2);
        assert_eq!(record.total(), Money::from_major(4400));
        assert_eq!(record.status, BookingStatus::Confirmed);
        assert_eq!(record.booked_on, today);
    }

    #[test]
    fn test_confirm_booking_surfaces_rejection() {
        let hotels = sample_hotels();
        let hotel = find_hotel(&hotels, "2").unwrap();
        let request = request_for(hotel);
        let decision = request.decide(&AuthStatus::Anonymous).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 10, 18).unwrap();

        assert_eq!(
            confirm_booking(hotel, &request, &decision, today).unwrap_err(),
            RejectionReason::NotAuthenticated
        );
    }

    #[test]
    fn test_record_confirm_from_quote() {
        let hotels = sample_hotels();
        let hotel = find_hotel(&hotels, "5").unwrap();
        let mut request = request_for(hotel);
        request.increment_rooms();
        let quote = request.quote().unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 10, 18).unwrap();

        let record = BookingRecord::confirm(hotel, &request, &quote, today);
        assert_eq!(record.rooms, 2);
        assert_eq!(record.total(), Money::from_major(14_000));
        assert_eq!(record.check_out, NaiveDate::from_ymd_opt(2025, 11, 12).unwrap());
    }

    #[test]
    fn test_travel_stats() {
        let stats = travel_stats(&sample_bookings());
        assert_eq!(
            stats,
            TravelStats {
                bookings: 3,
                nights: 7,
                upcoming: 2
            }
        );
        assert_eq!(travel_stats(&[]), TravelStats::default());
    }

    #[test]
    fn test_sample_bookings_are_consistent() {
        for record in sample_bookings() {
            let nights = (record.check_out - record.check_in).num_days();
            assert_eq!(nights, i64::from(record.nights), "{}", record.hotel_name);
        }
    }
}
