//! # Guest & Room Counters
//!
//! Bounded integer controls used by the booking form.
//!
//! ## Counter Behaviour
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rooms     [1 ... 10]      (−) 1 (+)   ← (−) disabled at 1             │
//! │  Adults    [1 ... 10]      (−) 2 (+)                                   │
//! │  Children  [0 ... 10]      (−) 0 (+)   ← (−) disabled at 0             │
//! │                                                                         │
//! │  The UI disables buttons at the bounds, but increment/decrement clamp  │
//! │  on their own: pressing (+) at 10 returns 10.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::ValidationResult;

/// Upper bound shared by every booking counter.
pub const MAX_COUNTER_VALUE: u32 = 10;

// =============================================================================
// Counter Bounds
// =============================================================================

/// Inclusive `[min, max]` range for a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CounterBounds {
    pub min: u32,
    pub max: u32,
}

impl CounterBounds {
    /// Creates bounds without checking `min <= max`.
    pub const fn new(min: u32, max: u32) -> Self {
        CounterBounds { min, max }
    }

    /// Checks that the range is non-empty.
    pub fn validate(&self, field: &str) -> ValidationResult<()> {
        if self.min > self.max {
            return Err(ValidationError::OutOfRange {
                field: field.to_string(),
                min: i64::from(self.min),
                max: i64::from(self.max),
            });
        }
        Ok(())
    }

    /// Forces `value` into the range.
    ///
    /// Never panics, even for inverted bounds (then `max` wins).
    #[inline]
    pub fn clamp(&self, value: u32) -> u32 {
        value.max(self.min).min(self.max)
    }

    /// Whether `value` lies inside the range.
    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Rooms: at least one, at most ten.
pub const ROOM_BOUNDS: CounterBounds = CounterBounds::new(1, MAX_COUNTER_VALUE);

/// Adults: at least one, at most ten.
pub const ADULT_BOUNDS: CounterBounds = CounterBounds::new(1, MAX_COUNTER_VALUE);

/// Children: may be zero, at most ten.
pub const CHILD_BOUNDS: CounterBounds = CounterBounds::new(0, MAX_COUNTER_VALUE);

// =============================================================================
// Clamped Operations
// =============================================================================

/// Returns `value + 1`, clamped into `bounds`.
pub fn increment(value: u32, bounds: CounterBounds) -> u32 {
    bounds.clamp(value.saturating_add(1))
}

/// Returns `value - 1`, clamped into `bounds`.
pub fn decrement(value: u32, bounds: CounterBounds) -> u32 {
    bounds.clamp(value.saturating_sub(1))
}

/// Whether the (+) button should be enabled.
pub fn can_increment(value: u32, bounds: CounterBounds) -> bool {
    value < bounds.max
}

/// Whether the (−) button should be enabled.
pub fn can_decrement(value: u32, bounds: CounterBounds) -> bool {
    value > bounds.min
}

// =============================================================================
// Booking Limits
// =============================================================================

/// Bounds for every counter on the booking form.
///
/// Passed in as configuration rather than hard-coded into the form so a
/// deployment can, for example, cap rooms per booking lower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookingLimits {
    #[serde(default = "default_rooms")]
    pub rooms: CounterBounds,
    #[serde(default = "default_adults")]
    pub adults: CounterBounds,
    #[serde(default = "default_children")]
    pub children: CounterBounds,
}

fn default_rooms() -> CounterBounds {
    ROOM_BOUNDS
}

fn default_adults() -> CounterBounds {
    ADULT_BOUNDS
}

fn default_children() -> CounterBounds {
    CHILD_BOUNDS
}

impl BookingLimits {
    /// Validates every range.
    pub fn validate(&self) -> ValidationResult<()> {
        self.rooms.validate("rooms")?;
        self.adults.validate("adults")?;
        self.children.validate("children")?;
        Ok(())
    }
}

impl Default for BookingLimits {
    fn default() -> Self {
        BookingLimits {
            rooms: ROOM_BOUNDS,
            adults: ADULT_BOUNDS,
            children: CHILD_BOUNDS,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
