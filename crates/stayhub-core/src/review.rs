//! # Reviews
//!
//! Guest reviews on the hotel detail screen.
//!
//! New reviews go to the top of the list. Only signed-in users may write
//! one; the caller checks `AuthStatus` before offering the form, the same
//! way the booking gate does.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::types::{AuthUser, Review};
use crate::validation::ValidationResult;

/// Highest star rating.
pub const MAX_STARS: u8 = 5;

// =============================================================================
// Draft
// =============================================================================

/// What the user typed into the review form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    /// Selected stars; 0 means none selected yet.
    pub rating: u8,
    pub text: String,
}

impl ReviewDraft {
    pub fn new(rating: u8, text: impl Into<String>) -> Self {
        ReviewDraft {
            rating,
            text: text.into(),
        }
    }

    /// Requires a star rating and non-blank text.
    pub fn validate(&self) -> ValidationResult<()> {
        if self.rating > MAX_STARS {
            return Err(ValidationError::OutOfRange {
                field: "rating".to_string(),
                min: 1,
                max: i64::from(MAX_STARS),
            });
        }

        if self.rating == 0 || self.text.trim().is_empty() {
            return Err(ValidationError::IncompleteReview);
        }

        Ok(())
    }
}

// =============================================================================
// Board
// =============================================================================

/// Reviews for one hotel, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewBoard {
    reviews: Vec<Review>,
}

impl ReviewBoard {
    pub fn new(reviews: Vec<Review>) -> Self {
        ReviewBoard { reviews }
    }

    /// The three seed reviews every hotel starts with, aged relative to `now`.
    pub fn sample(now: DateTime<Utc>) -> Self {
        let seed = |id: &str, author: &str, rating: u8, text: &str, age: Duration| Review {
            id: id.to_string(),
            author: author.to_string(),
            rating,
            text: text.to_string(),
            posted_at: now - age,
        };

        ReviewBoard::new(vec![
            seed(
                "1",
                "Lerato M.",
                5,
                "Amazing hotel! Super clean and friendly staff. The location was perfect for exploring the city.",
                Duration::weeks(2),
            ),
            seed(
                "2",
                "Thabo S.",
                4,
                "Great location and comfortable rooms. Breakfast was delicious with good variety.",
                Duration::days(30),
            ),
            seed(
                "3",
                "Sarah K.",
                5,
                "Absolutely loved our stay! The pool area was fantastic and the room was spacious.",
                Duration::days(3),
            ),
        ])
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Validates `draft` and puts it at the top of the list.
    pub fn submit(
        &mut self,
        draft: &ReviewDraft,
        author: &AuthUser,
        now: DateTime<Utc>,
    ) -> ValidationResult<&Review> {
        draft.validate()?;

        let review = Review {
            id: Uuid::new_v4().to_string(),
            author: author.author_name().to_string(),
            rating: draft.rating,
            text: draft.text.trim().to_string(),
            posted_at: now,
        };

        self.reviews.insert(0, review);
        Ok(&self.reviews[0])
    }

    /// Mean star rating, or `None` with no reviews.
    pub fn average_rating(&self) -> Option<f32> {
        if self.reviews.is_empty() {
            return None;
        }

        let sum: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        Some(sum as f32 / self.reviews.len() as f32)
    }
}

// =============================================================================
// Display Helpers
// =============================================================================

/// "Just now", "5 minutes ago", "3 days ago", "2 weeks ago", "1 month ago".
///
/// Timestamps in the future read as "Just now".
pub fn relative_age_label(posted_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(posted_at);

    let (count, unit) = if age < Duration::minutes(1) {
        return "Just now".to_string();
    } else if age < Duration::hours(1) {
        (age.num_minutes(), "minute")
    } else if age < Duration::days(1) {
        (age.num_hours(), "hour")
    } else if age < Duration::weeks(1) {
        (age.num_days(), "day")
    } else if age < Duration::days(30) {
        (age.num_weeks(), "week")
    } else if age < Duration::days(365) {
        (age.num_days() / 30, "month")
    } else {
        (age.num_days() / 365, "year")
    };

    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Filled and empty stars, e.g. `★★★★☆`.
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_STARS));
    let empty = usize::from(MAX_STARS) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 18, 12, 0, 0).unwrap()
    }

    fn author() -> AuthUser {
        AuthUser {
            uid: "u-9".to_string(),
            email: "naledi@example.com".to_string(),
            display_name: None,
        }
    }

    #[test]
    fn test_draft_requires_rating_and_text() {
        assert_eq!(
            ReviewDraft::new(0, "Lovely").validate().unwrap_err(),
            ValidationError::IncompleteReview
        );
        assert_eq!(
            ReviewDraft::new(4, "   ").validate().unwrap_err(),
            ValidationError::IncompleteReview
        );
        assert!(matches!(
            ReviewDraft::new(6, "Lovely").validate().unwrap_err(),
            ValidationError::OutOfRange { .. }
        ));
        assert!(ReviewDraft::new(5, "Lovely").validate().is_ok());
    }

    #[test]
    fn test_submit_prepends() {
        let mut board = ReviewBoard::sample(now());
        let review = board
            .submit(&ReviewDraft::new(3, "  Decent value. "), &author(), now())
            .unwrap();

        assert_eq!(review.author, "naledi");
        assert_eq!(review.text, "Decent value.");
        assert_eq!(board.len(), 4);
        assert_eq!(board.reviews()[0].rating, 3);
        assert_eq!(board.reviews()[1].author, "Lerato M.");
    }

    #[test]
    fn test_rejected_draft_leaves_board_untouched() {
        let mut board = ReviewBoard::sample(now());
        assert!(board.submit(&ReviewDraft::default(), &author(), now()).is_err());
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn test_average_rating() {
        assert_eq!(ReviewBoard::default().average_rating(), None);
        let avg = ReviewBoard::sample(now()).average_rating().unwrap();
        assert!((avg - 14.0 / 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_sample_ages() {
        let board = ReviewBoard::sample(now());
        let labels: Vec<String> = board
            .reviews()
            .iter()
            .map(|r| relative_age_label(r.posted_at, now()))
            .collect();
        assert_eq!(labels, vec!["2 weeks ago", "1 month ago", "3 days ago"]);
    }

    #[test]
    fn test_relative_age_label_edges() {
        let n = now();
        assert_eq!(relative_age_label(n, n), "Just now");
        assert_eq!(relative_age_label(n + Duration::hours(2), n), "Just now");
        assert_eq!(relative_age_label(n - Duration::minutes(1), n), "1 minute ago");
        assert_eq!(relative_age_label(n - Duration::hours(5), n), "5 hours ago");
        assert_eq!(relative_age_label(n - Duration::days(1), n), "1 day ago");
        assert_eq!(relative_age_label(n - Duration::days(400), n), "1 year ago");
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(9), "★★★★★");
    }
}
