//! # stayhub-core: Pure Business Logic for StayHub
//!
//! Everything the booking app decides lives here as plain functions and
//! value types, with no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        StayHub Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    stayhub-cli (screens / commands)             │   │
//! │  │   onboarding ──► hotels ──► hotel ──► quote/book ──► profile    │   │
//! │  └──────────┬──────────────────────┬───────────────────────┬───────┘   │
//! │             │                      │                       │           │
//! │  ┌──────────▼──────────┐ ┌─────────▼─────────┐ ┌───────────▼───────┐   │
//! │  │  stayhub-session    │ │ ★ stayhub-core ★  │ │  stayhub-store    │   │
//! │  │  IdentityProvider   │ │  (THIS CRATE)     │ │  KeyValueStore    │   │
//! │  │  AuthStatusChannel  │ │                   │ │  Preferences      │   │
//! │  └─────────────────────┘ └───────────────────┘ └───────────────────┘   │
//! │                                                                         │
//! │   ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌─────────┐  │
//! │   │   stay    │ │  counter  │ │  catalog  │ │  review   │ │ booking │  │
//! │   │  nights   │ │  bounds   │ │  search   │ │  board    │ │ summary │  │
//! │   │  cost     │ │  clamp    │ │  sort     │ │  drafts   │ │ history │  │
//! │   │  gate     │ │           │ │           │ │           │ │         │  │
//! │   └───────────┘ └───────────┘ └───────────┘ └───────────┘ └─────────┘  │
//! │                                                                         │
//! │   NO I/O • NO DATABASE • NO NETWORK • TIME COMES FROM A Clock          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`stay`] - Night count, stay cost and the booking gate
//! - [`counter`] - Bounded room/guest counters
//! - [`clock`] - Injectable "now"
//! - [`money`] - Integer-cent Money
//! - [`catalog`] - Sample hotels, search and sort
//! - [`review`] - Review drafts and the review board
//! - [`booking`] - Confirmation summary and booking history
//! - [`onboarding`] - First-launch slides
//! - [`validation`] - Auth and profile form checks
//! - [`types`] - Shared domain types
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Rejections are values**: a stay that may not be booked is a
//!    `BookingDecision::Rejected`, never an error
//! 2. **Integer Money**: all amounts are cents (i64)
//! 3. **Explicit time**: "now" is passed in through `Clock`
//! 4. **Explicit auth**: the gate receives an `AuthStatus`, it never asks for one
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{FixedOffset, TimeZone};
//! use stayhub_core::stay::{compute_nights, compute_total_cost, decide_eligibility};
//! use stayhub_core::{AuthStatus, Money};
//!
//! let sast = FixedOffset::east_opt(2 * 3600).unwrap();
//! let check_in = sast.with_ymd_and_hms(2025, 11, 10, 14, 0, 0).unwrap();
//! let check_out = sast.with_ymd_and_hms(2025, 11, 12, 14, 0, 0).unwrap();
//!
//! let nights = compute_nights(&check_in, &check_out);
//! let total = compute_total_cost(nights, Money::from_major(2200), 1).unwrap();
//! assert_eq!(total.to_string(), "R4400");
//!
//! let decision = decide_eligibility(&AuthStatus::Anonymous, &check_in, &check_out, nights, total);
//! assert!(!decision.is_eligible());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod booking;
pub mod catalog;
pub mod clock;
pub mod counter;
pub mod error;
pub mod money;
pub mod onboarding;
pub mod review;
pub mod stay;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use clock::{Clock, FixedClock, SystemClock};
pub use counter::{BookingLimits, CounterBounds};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use stay::{BookingDecision, RejectionReason, StayQuote, StayRequest};
pub use types::*;
