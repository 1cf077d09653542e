//! # Domain Types
//!
//! Core domain types used throughout StayHub.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Hotel       │   │  BookingRecord  │   │     Review      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  name/location  │   │  hotel_name     │   │  author         │       │
//! │  │  rating         │   │  check_in/out   │   │  rating 1-5     │       │
//! │  │  price_cents    │   │  total_cents    │   │  posted_at      │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   AuthStatus    │   │ BookingStatus   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Anonymous      │   │  Confirmed      │                             │
//! │  │  Authenticated  │   │  Pending        │                             │
//! │  │   (AuthUser)    │   │  Cancelled      │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

/// Greeting used when no user name can be derived.
pub const ANONYMOUS_GREETING: &str = "Traveler";

/// Review author used when no user name can be derived.
pub const ANONYMOUS_AUTHOR: &str = "Guest";

// =============================================================================
// Authentication
// =============================================================================

/// A signed-in user as reported by the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AuthUser {
    /// Identity-service user id.
    pub uid: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl AuthUser {
    /// Part of the e-mail before `@`, if non-empty.
    pub fn email_local_part(&self) -> Option<&str> {
        self.email.split('@').next().filter(|part| !part.is_empty())
    }

    /// Non-blank display name.
    fn named(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Name for the explore screen greeting ("Hello lerato!").
    pub fn greeting_name(&self) -> &str {
        self.email_local_part().unwrap_or(ANONYMOUS_GREETING)
    }

    /// Name shown on a review this user writes.
    pub fn author_name(&self) -> &str {
        self.named()
            .or_else(|| self.email_local_part())
            .unwrap_or(ANONYMOUS_AUTHOR)
    }

    /// Upper-cased first letter of the e-mail, for the avatar bubble.
    pub fn initial(&self) -> char {
        self.email
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('U')
    }
}

/// Whether someone is signed in, captured at call time.
///
/// The app refreshes this from identity-service notifications and hands the
/// current value to the booking gate; the core never subscribes itself.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AuthStatus {
    #[default]
    Anonymous,
    Authenticated(AuthUser),
}

impl AuthStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthStatus::Authenticated(_))
    }

    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            AuthStatus::Authenticated(user) => Some(user),
            AuthStatus::Anonymous => None,
        }
    }
}

impl From<Option<AuthUser>> for AuthStatus {
    fn from(user: Option<AuthUser>) -> Self {
        user.map_or(AuthStatus::Anonymous, AuthStatus::Authenticated)
    }
}

// =============================================================================
// Hotel
// =============================================================================

/// A hotel in the browse list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    /// City or region shown under the name.
    pub location: String,
    /// Average guest rating, 0.0 to 5.0.
    pub rating: f32,
    /// Nightly rate in cents.
    pub price_per_night_cents: i64,
    pub image_url: String,
    pub amenities: Vec<String>,
}

impl Hotel {
    /// Returns the nightly rate as Money.
    #[inline]
    pub fn price_per_night(&self) -> Money {
        Money::from_cents(self.price_per_night_cents)
    }
}

// =============================================================================
// Review
// =============================================================================

/// A guest review on the hotel detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Review {
    pub id: String,
    pub author: String,
    /// Stars, 1 to 5.
    pub rating: u8,
    pub text: String,
    #[ts(as = "String")]
    pub posted_at: DateTime<Utc>,
}

// =============================================================================
// Booking Status
// =============================================================================

/// Lifecycle state of a booking in the profile history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Confirmed,
    Pending,
    Cancelled,
}

impl BookingStatus {
    /// Badge text.
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Pending => "Pending",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    /// Parses an optional status; missing values are treated as confirmed.
    pub fn parse_or_default(value: Option<&str>) -> Result<Self, ValidationError> {
        value.map_or(Ok(BookingStatus::default()), str::parse)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BookingStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "confirmed" => Ok(BookingStatus::Confirmed),
            "pending" => Ok(BookingStatus::Pending),
            "cancelled" | "canceled" => Ok(BookingStatus::Cancelled),
            other => Err(ValidationError::InvalidFormat {
                field: "status".to_string(),
                reason: format!("unknown booking status '{other}'"),
            }),
        }
    }
}

// =============================================================================
// Booking Record
// =============================================================================

/// A booking as shown in the profile's booking history.
///
/// Dates are calendar dates: once a stay is confirmed, time of day no longer
/// matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookingRecord {
    pub id: String,
    pub hotel_name: String,
    pub location: String,
    #[ts(as = "String")]
    pub check_in: NaiveDate,
    #[ts(as = "String")]
    pub check_out: NaiveDate,
    pub nights: u32,
    pub guests: u32,
    pub rooms: u32,
    pub total_cents: i64,
    #[serde(default)]
    pub status: BookingStatus,
    #[ts(as = "String")]
    pub booked_on: NaiveDate,
}

impl BookingRecord {
    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// "1 night" / "3 nights".
    pub fn nights_label(&self) -> String {
        match self.nights {
            1 => "1 night".to_string(),
            n => format!("{n} nights"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
