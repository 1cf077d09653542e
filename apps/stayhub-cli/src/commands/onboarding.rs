//! First-launch intro slides.

use stayhub_core::onboarding::OnboardingFlow;

use crate::app::App;
use crate::error::AppResult;

/// Slide texts in the order the carousel shows them, each with its button.
pub fn walk(mut flow: OnboardingFlow) -> Vec<String> {
    let mut lines = Vec::new();
    while !flow.is_finished() {
        let slide = flow.current();
        lines.push(format!(
            "{}. {}\n   {}\n   [{}]",
            flow.index() + 1,
            slide.title,
            slide.description,
            flow.button_label()
        ));
        flow.next();
    }
    lines
}

pub async fn run(app: &App, skip: bool, again: bool) -> AppResult<()> {
    let preferences = app.preferences();

    if preferences.has_seen_onboarding().await && !again {
        println!("Onboarding already completed. Use --again to see it.");
        return Ok(());
    }

    if !skip {
        for slide in walk(OnboardingFlow::new()) {
            println!("{slide}");
        }
    }

    preferences.set_onboarding_seen().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_shows_every_slide_once() {
        let lines = walk(OnboardingFlow::new());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Browse Hotels"));
        assert!(lines[0].ends_with("[Next]"));
        assert!(lines[2].ends_with("[Get Started]"));
    }
}
