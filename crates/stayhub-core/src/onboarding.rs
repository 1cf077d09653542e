//! # Onboarding
//!
//! The three intro slides shown on first launch.
//!
//! Finishing or skipping the flow is what sets the "has seen onboarding"
//! preference; the flow itself only tracks the current slide.

use serde::Serialize;

/// One intro slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OnboardingSlide {
    pub title: &'static str,
    pub description: &'static str,
}

/// Slides in display order.
pub const SLIDES: [OnboardingSlide; 3] = [
    OnboardingSlide {
        title: "Browse Hotels",
        description: "Easily explore top-rated hotels from around the world.",
    },
    OnboardingSlide {
        title: "Book Your Stay",
        description: "Reserve rooms quickly and securely with just a few taps.",
    },
    OnboardingSlide {
        title: "Enjoy Your Trip",
        description: "Get 24/7 support and exclusive offers while traveling.",
    },
];

/// Position in the slide carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OnboardingFlow {
    index: usize,
    finished: bool,
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &'static OnboardingSlide {
        &SLIDES[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == SLIDES.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// "Next" on every slide but the last, "Get Started" on the last.
    pub fn button_label(&self) -> &'static str {
        if self.is_last() {
            "Get Started"
        } else {
            "Next"
        }
    }

    /// Advances one slide, finishing the flow from the last one.
    pub fn next(&mut self) {
        if self.is_last() {
            self.finished = true;
        } else {
            self.index += 1;
        }
    }

    /// Ends the flow from any slide.
    pub fn skip(&mut self) {
        self.finished = true;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walks_all_slides() {
        let mut flow = OnboardingFlow::new();
        assert_eq!(flow.current().title, "Browse Hotels");
        assert_eq!(flow.button_label(), "Next");

        flow.next();
        flow.next();
        assert!(flow.is_last());
        assert_eq!(flow.current().title, "Enjoy Your Trip");
        assert_eq!(flow.button_label(), "Get Started");
        assert!(!flow.is_finished());

        flow.next();
        assert!(flow.is_finished());
        assert_eq!(flow.index(), 2);
    }

    #[test]
    fn test_skip_finishes_immediately() {
        let mut flow = OnboardingFlow::new();
        flow.skip();
        assert!(flow.is_finished());
        assert_eq!(flow.index(), 0);
    }
}
