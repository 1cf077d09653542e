//! `hotels` and `hotel`.

use chrono::{DateTime, Utc};
use tracing::info;

use stayhub_core::catalog::{find_hotel, results_label, search_hotels, SortOption};
use stayhub_core::review::{relative_age_label, stars, ReviewBoard, ReviewDraft};
use stayhub_core::{AuthStatus, AuthUser, Hotel, ANONYMOUS_GREETING};

use crate::app::App;
use crate::error::{AppError, AppResult};

/// Greeting line on the explore screen.
pub fn greeting(status: &AuthStatus) -> String {
    let name = status
        .user()
        .map(AuthUser::greeting_name)
        .unwrap_or(ANONYMOUS_GREETING);
    format!("Hello {name}!")
}

fn hotel_line(app: &App, hotel: &Hotel) -> String {
    format!(
        "[{}] {} - {}  ★ {:.1}  {} / night",
        hotel.id,
        hotel.name,
        hotel.location,
        hotel.rating,
        app.money(hotel.price_per_night())
    )
}

pub fn list(app: &App, query: &str, sort: SortOption) {
    let results = search_hotels(&app.hotels, query, sort);

    println!("{}", greeting(&app.auth_status()));
    println!("{} (sorted by {})", results_label(results.len()), sort);
    for hotel in &results {
        println!("  {}", hotel_line(app, hotel));
    }
}

/// Adds a review to `board` on behalf of the signed-in user.
pub fn add_review(
    board: &mut ReviewBoard,
    status: &AuthStatus,
    draft: &ReviewDraft,
    now: DateTime<Utc>,
) -> AppResult<()> {
    let author = status
        .user()
        .ok_or(AppError::LoginRequired("Please sign in to leave a review."))?;
    board.submit(draft, author, now)?;
    Ok(())
}

pub fn show(app: &App, id: &str, review: Option<ReviewDraft>) -> AppResult<()> {
    let hotel = find_hotel(&app.hotels, id)?;
    let now = Utc::now();
    let mut board = ReviewBoard::sample(now);

    if let Some(draft) = review {
        add_review(&mut board, &app.auth_status(), &draft, now)?;
        info!(hotel = %hotel.id, rating = draft.rating, "Review added");
        println!("Thank you! Your review has been submitted.");
        println!();
    }

    println!("{}", hotel_line(app, hotel));
    if !hotel.amenities.is_empty() {
        println!("Amenities: {}", hotel.amenities.join(", "));
    }

    println!();
    match board.average_rating() {
        Some(average) => println!("Reviews ({}) ★ {:.1}", board.len(), average),
        None => println!("No reviews yet"),
    }
    for review in board.reviews() {
        println!(
            "  {} {} · {}",
            stars(review.rating),
            review.author,
            relative_age_label(review.posted_at, now)
        );
        println!("    {}", review.text);
    }

    Ok(())
}
