//! `profile` and `bookings`.

use stayhub_core::booking::{format_stay_date, travel_stats, TravelStats};
use stayhub_core::BookingRecord;

use crate::app::App;
use crate::error::{AppError, AppResult};

/// Header counters under the avatar.
pub fn stats_line(stats: &TravelStats) -> String {
    format!(
        "{} Bookings · {} Nights · {} Upcoming",
        stats.bookings, stats.nights, stats.upcoming
    )
}

pub async fn show(app: &App, name: Option<&str>) -> AppResult<()> {
    if let Some(name) = name {
        app.session
            .update_display_name(name)
            .await
            .map_err(AppError::session("Error"))?;
        println!("Profile updated successfully!");
        println!();
    }

    let user = app
        .session
        .current_user()
        .await
        .map_err(AppError::session("Error"))?
        .ok_or(AppError::LoginRequired("Please sign in to view your profile."))?;

    let history = app.preferences().bookings().await?;

    println!("({}) {}", user.initial(), user.email);
    if let Some(display_name) = user.display_name.as_deref() {
        println!("Name: {display_name}");
    }
    println!("{}", stats_line(&travel_stats(&history)));
    Ok(())
}

fn booking_lines(app: &App, record: &BookingRecord) -> [String; 3] {
    [
        format!("{} [{}]", record.hotel_name, record.status.label()),
        format!(
            "  {}  {} - {} ({})",
            record.location,
            format_stay_date(record.check_in),
            format_stay_date(record.check_out),
            record.nights_label()
        ),
        format!(
            "  {} guest{} · {} room{} · {}",
            record.guests,
            if record.guests == 1 { "" } else { "s" },
            record.rooms,
            if record.rooms == 1 { "" } else { "s" },
            app.money(record.total())
        ),
    ]
}

pub async fn bookings(app: &App) -> AppResult<()> {
    let history = app.preferences().bookings().await?;

    if history.is_empty() {
        println!("No bookings yet");
        return Ok(());
    }

    println!("My Bookings ({})", history.len());
    for record in &history {
        for line in booking_lines(app, record) {
            println!("{line}");
        }
    }
    Ok(())
}
