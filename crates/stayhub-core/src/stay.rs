//! # Stay Pricing & Booking Eligibility
//!
//! The StayBookingCalculator: nights, total cost, check-out adjustment and the
//! booking gate, plus the `StayRequest` record the booking form mutates.
//!
//! ## Booking Form Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Screen opens ──► StayRequest::open(clock, rate, limits)               │
//! │                   check_in = now, check_out = now + 1 calendar day     │
//! │                   rooms = 1, adults = 2, children = 0                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Pick check-in ──► adjust_check_out_if_invalid (may push check-out)    │
//! │  Pick check-out ─► stored as-is                                        │
//! │  (+)/(−)        ─► counter::increment / counter::decrement             │
//! │       │                                                                 │
//! │       ▼  every change                                                   │
//! │  compute_nights ──► compute_total_cost ──► "R4400" summary             │
//! │       │                                                                 │
//! │       ▼  Confirm pressed                                                │
//! │  decide_eligibility(auth, ...)                                         │
//! │       ├── Rejected(NotAuthenticated) ──► route to sign-in              │
//! │       ├── Rejected(..)               ──► alert with title/message      │
//! │       └── Eligible(quote)            ──► confirmation step             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Night Counting
//! Nights are `ceil(elapsed_ms / 86_400_000)` over absolute instants, not a
//! calendar-day difference. Time of day therefore matters: 10:00 → 11:00 two
//! days later is 49 hours, which is **three** nights. For instants in a zone
//! with daylight saving, a calendar day across the autumn change is 25 hours
//! and also counts as two nights.

use chrono::{DateTime, Days, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::clock::Clock;
use crate::counter::{self, BookingLimits};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::AuthStatus;

/// Milliseconds in one night.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Largest absolute epoch offset a JavaScript `Date` accepts (±100M days).
pub const MAX_EPOCH_MILLIS: f64 = 8.64e15;

/// Adults on a freshly opened booking form.
pub const DEFAULT_ADULTS: u32 = 2;

// =============================================================================
// Quote & Decision
// =============================================================================

/// Nights and total for the current selection. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StayQuote {
    pub nights: u32,
    pub total_cost: Money,
}

/// Why a booking cannot proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// Nobody is signed in; the caller routes to sign-in.
    NotAuthenticated,
    /// Check-out is not strictly after check-in.
    CheckOutBeforeOrEqualCheckIn,
    /// The stay rounds to zero nights.
    ZeroNights,
}

impl RejectionReason {
    /// Alert title.
    pub fn title(&self) -> &'static str {
        match self {
            RejectionReason::NotAuthenticated => "Login Required",
            RejectionReason::CheckOutBeforeOrEqualCheckIn => "Invalid Dates",
            RejectionReason::ZeroNights => "Invalid Stay",
        }
    }

    /// Alert body.
    pub fn message(&self) -> &'static str {
        match self {
            RejectionReason::NotAuthenticated => "Please sign in to book a room.",
            RejectionReason::CheckOutBeforeOrEqualCheckIn => "Check-out must be after check-in.",
            RejectionReason::ZeroNights => "Minimum stay is 1 night.",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

/// Outcome of the booking gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BookingDecision {
    Eligible(StayQuote),
    Rejected(RejectionReason),
}

impl BookingDecision {
    pub fn is_eligible(&self) -> bool {
        matches!(self, BookingDecision::Eligible(_))
    }

    /// The quote, if eligible.
    pub fn quote(&self) -> Option<StayQuote> {
        match self {
            BookingDecision::Eligible(quote) => Some(*quote),
            BookingDecision::Rejected(_) => None,
        }
    }
}

// =============================================================================
// Calculator Functions
// =============================================================================

/// Number of nights between two instants.
///
/// `ceil(elapsed / 24h)` when `check_out` is after `check_in`, otherwise 0.
/// Sub-millisecond differences count as zero, like a JavaScript `Date`.
///
/// ## Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use stayhub_core::stay::compute_nights;
///
/// let check_in = Utc.with_ymd_and_hms(2025, 11, 10, 0, 0, 0).unwrap();
/// let check_out = Utc.with_ymd_and_hms(2025, 11, 12, 0, 0, 0).unwrap();
/// assert_eq!(compute_nights(&check_in, &check_out), 2);
/// assert_eq!(compute_nights(&check_out, &check_in), 0);
/// ```
pub fn compute_nights<Tz: TimeZone>(check_in: &DateTime<Tz>, check_out: &DateTime<Tz>) -> u32 {
    let elapsed_ms = check_out
        .clone()
        .signed_duration_since(check_in.clone())
        .num_milliseconds();

    if elapsed_ms <= 0 {
        return 0;
    }

    let nights = (elapsed_ms + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
    u32::try_from(nights).unwrap_or(u32::MAX)
}

/// `nights × nightly_rate × rooms`.
///
/// ## Errors
/// - `Validation(MustBeNonNegative)` for a negative rate
/// - `AmountOverflow` if the product does not fit in `i64` cents
pub fn compute_total_cost(nights: u32, nightly_rate: Money, rooms: u32) -> CoreResult<Money> {
    validate_nightly_rate(nightly_rate)?;

    nightly_rate
        .checked_mul(nights)
        .and_then(|per_room| per_room.checked_mul(rooms))
        .ok_or_else(|| CoreError::AmountOverflow {
            operation: "stay total".to_string(),
        })
}

/// Returns the check-out to keep after the user picks `check_in`.
///
/// When `check_in` is at or after the current `check_out`, check-out moves to
/// exactly one calendar day after `check_in`; otherwise it is unchanged. Only
/// check-in selection runs this.
pub fn adjust_check_out_if_invalid<Tz: TimeZone>(
    check_in: &DateTime<Tz>,
    check_out: &DateTime<Tz>,
) -> CoreResult<DateTime<Tz>> {
    if check_in >= check_out {
        next_calendar_day(check_in)
    } else {
        Ok(check_out.clone())
    }
}

/// The booking gate. First matching rule wins:
///
/// 1. not authenticated → `NotAuthenticated`
/// 2. `check_out <= check_in` → `CheckOutBeforeOrEqualCheckIn`
/// 3. `nights == 0` → `ZeroNights`
/// 4. otherwise → `Eligible`
pub fn decide_eligibility<Tz: TimeZone>(
    auth: &AuthStatus,
    check_in: &DateTime<Tz>,
    check_out: &DateTime<Tz>,
    nights: u32,
    total_cost: Money,
) -> BookingDecision {
    if !auth.is_authenticated() {
        return BookingDecision::Rejected(RejectionReason::NotAuthenticated);
    }

    if check_out <= check_in {
        return BookingDecision::Rejected(RejectionReason::CheckOutBeforeOrEqualCheckIn);
    }

    if nights == 0 {
        return BookingDecision::Rejected(RejectionReason::ZeroNights);
    }

    BookingDecision::Eligible(StayQuote { nights, total_cost })
}

/// Same wall-clock time on the next calendar day, in the instant's own zone.
///
/// Falls back to +24h when the next day's wall-clock time does not exist or
/// is ambiguous (a DST transition).
pub fn next_calendar_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> CoreResult<DateTime<Tz>> {
    instant
        .clone()
        .checked_add_days(Days::new(1))
        .or_else(|| instant.clone().checked_add_signed(Duration::days(1)))
        .ok_or_else(|| CoreError::DateOutOfRange(format!("no day after {instant:?}")))
}

/// Converts a JavaScript-style epoch timestamp (milliseconds, possibly
/// fractional) into an instant.
///
/// ## Errors
/// `Validation(InvalidFormat)` for NaN, infinities, or values outside the
/// ±8.64e15 ms range a `Date` can hold.
pub fn instant_from_epoch_millis(millis: f64) -> CoreResult<DateTime<Utc>> {
    if !millis.is_finite() {
        return Err(invalid_timestamp("must be a finite number").into());
    }

    if millis.abs() > MAX_EPOCH_MILLIS {
        return Err(invalid_timestamp("outside the supported date range").into());
    }

    Utc.timestamp_millis_opt(millis.trunc() as i64)
        .single()
        .ok_or_else(|| invalid_timestamp("outside the supported date range").into())
}

fn invalid_timestamp(reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: "timestamp".to_string(),
        reason: reason.to_string(),
    }
}

fn validate_nightly_rate(rate: Money) -> CoreResult<()> {
    if rate.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "nightly rate".to_string(),
        }
        .into());
    }
    Ok(())
}

// =============================================================================
// Stay Request
// =============================================================================

/// The booking form's working state.
///
/// Lives as long as the booking screen and is never persisted.
#[derive(Debug, Clone)]
pub struct StayRequest<Tz: TimeZone> {
    check_in: DateTime<Tz>,
    check_out: DateTime<Tz>,
    rooms: u32,
    adults: u32,
    children: u32,
    nightly_rate: Money,
    limits: BookingLimits,
}

impl<Tz: TimeZone> StayRequest<Tz> {
    /// Opens a request with the form defaults: check-in now, check-out one
    /// calendar day later, one room, two adults, no children.
    ///
    /// Defaults are clamped into `limits`.
    pub fn open<C>(clock: &C, nightly_rate: Money, limits: BookingLimits) -> CoreResult<Self>
    where
        C: Clock<Tz = Tz>,
    {
        validate_nightly_rate(nightly_rate)?;
        limits.validate()?;

        let check_in = clock.now();
        let check_out = next_calendar_day(&check_in)?;

        Ok(StayRequest {
            check_in,
            check_out,
            rooms: limits.rooms.clamp(1),
            adults: limits.adults.clamp(DEFAULT_ADULTS),
            children: limits.children.clamp(0),
            nightly_rate,
            limits,
        })
    }

    pub fn check_in(&self) -> &DateTime<Tz> {
        &self.check_in
    }

    pub fn check_out(&self) -> &DateTime<Tz> {
        &self.check_out
    }

    pub fn rooms(&self) -> u32 {
        self.rooms
    }

    pub fn adults(&self) -> u32 {
        self.adults
    }

    pub fn children(&self) -> u32 {
        self.children
    }

    /// Adults plus children.
    pub fn guests(&self) -> u32 {
        self.adults + self.children
    }

    pub fn nightly_rate(&self) -> Money {
        self.nightly_rate
    }

    pub fn limits(&self) -> &BookingLimits {
        &self.limits
    }

    /// Sets check-in, pushing check-out forward if it is no longer after it.
    pub fn select_check_in(&mut self, check_in: DateTime<Tz>) -> CoreResult<()> {
        self.check_out = adjust_check_out_if_invalid(&check_in, &self.check_out)?;
        self.check_in = check_in;
        Ok(())
    }

    /// Sets check-out as picked. Ordering problems surface in `decide`.
    pub fn select_check_out(&mut self, check_out: DateTime<Tz>) {
        self.check_out = check_out;
    }

    /// Earliest instant the check-out picker offers (check-in + 24h).
    pub fn min_check_out(&self) -> CoreResult<DateTime<Tz>> {
        self.check_in
            .clone()
            .checked_add_signed(Duration::milliseconds(MILLIS_PER_DAY))
            .ok_or_else(|| CoreError::DateOutOfRange("check-out picker minimum".to_string()))
    }

    pub fn increment_rooms(&mut self) -> u32 {
        self.rooms = counter::increment(self.rooms, self.limits.rooms);
        self.rooms
    }

    pub fn decrement_rooms(&mut self) -> u32 {
        self.rooms = counter::decrement(self.rooms, self.limits.rooms);
        self.rooms
    }

    pub fn increment_adults(&mut self) -> u32 {
        self.adults = counter::increment(self.adults, self.limits.adults);
        self.adults
    }

    pub fn decrement_adults(&mut self) -> u32 {
        self.adults = counter::decrement(self.adults, self.limits.adults);
        self.adults
    }

    pub fn increment_children(&mut self) -> u32 {
        self.children = counter::increment(self.children, self.limits.children);
        self.children
    }

    pub fn decrement_children(&mut self) -> u32 {
        self.children = counter::decrement(self.children, self.limits.children);
        self.children
    }

    pub fn nights(&self) -> u32 {
        compute_nights(&self.check_in, &self.check_out)
    }

    pub fn total_cost(&self) -> CoreResult<Money> {
        compute_total_cost(self.nights(), self.nightly_rate, self.rooms)
    }

    /// Current nights and total.
    pub fn quote(&self) -> CoreResult<StayQuote> {
        Ok(StayQuote {
            nights: self.nights(),
            total_cost: self.total_cost()?,
        })
    }

    /// Whether the confirm button is enabled: at least one night and a
    /// non-zero total.
    pub fn can_submit(&self) -> bool {
        self.quote()
            .map(|quote| quote.nights > 0 && quote.total_cost.is_positive())
            .unwrap_or(false)
    }

    /// Runs the booking gate against the current selection.
    pub fn decide(&self, auth: &AuthStatus) -> CoreResult<BookingDecision> {
        let quote = self.quote()?;
        Ok(decide_eligibility(
            auth,
            &self.check_in,
            &self.check_out,
            quote.nights,
            quote.total_cost,
        ))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
