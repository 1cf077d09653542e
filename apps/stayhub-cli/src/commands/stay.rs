//! `quote` and `book`.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use tracing::info;

use stayhub_core::booking::{confirm_booking, format_stay_date, ConfirmationSummary};
use stayhub_core::catalog::find_hotel;
use stayhub_core::{
    BookingDecision, BookingLimits, Clock, CoreError, Hotel, StayRequest, SystemClock,
    ValidationError,
};

use crate::app::App;
use crate::cli::StayArgs;
use crate::error::{AppError, AppResult};

/// Places `raw` (YYYY-MM-DD) at the reference instant's time of day, the way
/// a date picker keeps the time of the value it edits.
pub fn on_date<Tz: TimeZone>(reference: &DateTime<Tz>, raw: &str) -> AppResult<DateTime<Tz>> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        ValidationError::InvalidFormat {
            field: "date".to_string(),
            reason: format!("'{raw}' is not YYYY-MM-DD"),
        }
    })?;

    let local = date.and_time(reference.naive_local().time());
    reference
        .timezone()
        .from_local_datetime(&local)
        .earliest()
        .ok_or_else(|| CoreError::DateOutOfRange(raw.to_string()).into())
}

type Getter<Tz> = fn(&StayRequest<Tz>) -> u32;
type Press<Tz> = fn(&mut StayRequest<Tz>) -> u32;

/// Presses a counter's buttons until it reads `target` or stops moving at
/// its bound.
fn step_to<Tz: TimeZone>(
    request: &mut StayRequest<Tz>,
    target: u32,
    value: Getter<Tz>,
    increment: Press<Tz>,
    decrement: Press<Tz>,
) {
    let mut current = value(request);
    while current != target {
        let next = if current < target {
            increment(request)
        } else {
            decrement(request)
        };
        if next == current {
            break;
        }
        current = next;
    }
}

/// Builds the booking form state the arguments describe.
pub fn build_request<C: Clock>(
    clock: &C,
    hotel: &Hotel,
    limits: BookingLimits,
    args: &StayArgs,
) -> AppResult<StayRequest<C::Tz>> {
    let mut request = StayRequest::open(clock, hotel.price_per_night(), limits)?;

    if let Some(raw) = &args.check_in {
        let check_in = on_date(request.check_in(), raw)?;
        request.select_check_in(check_in)?;
    }
    if let Some(raw) = &args.check_out {
        let check_out = on_date(request.check_out(), raw)?;
        request.select_check_out(check_out);
    }

    step_to(
        &mut request,
        args.rooms,
        StayRequest::rooms,
        StayRequest::increment_rooms,
        StayRequest::decrement_rooms,
    );
    step_to(
        &mut request,
        args.adults,
        StayRequest::adults,
        StayRequest::increment_adults,
        StayRequest::decrement_adults,
    );
    step_to(
        &mut request,
        args.children,
        StayRequest::children,
        StayRequest::increment_children,
        StayRequest::decrement_children,
    );

    Ok(request)
}

fn print_form(app: &App, hotel: &Hotel, request: &StayRequest<Local>) -> AppResult<()> {
    let quote = request.quote()?;
    let plural = |n: u32| if n > 1 { "s" } else { "" };

    println!("{} ({})", hotel.name, hotel.location);
    println!("{} / night", app.money(hotel.price_per_night()));
    println!("Check-in:  {}", format_stay_date(request.check_in().date_naive()));
    println!("Check-out: {}", format_stay_date(request.check_out().date_naive()));
    println!(
        "Rooms: {}  Adults: {}  Children: {}",
        request.rooms(),
        request.adults(),
        request.children()
    );
    println!(
        "{} × {} room{} × {} night{}",
        app.money(hotel.price_per_night()),
        request.rooms(),
        plural(request.rooms()),
        quote.nights,
        plural(quote.nights)
    );
    println!("Total: {}", app.money(quote.total_cost));
    Ok(())
}

pub fn quote(app: &App, args: &StayArgs) -> AppResult<()> {
    let hotel = find_hotel(&app.hotels, &args.hotel)?;
    let request = build_request(&SystemClock, hotel, app.config.booking, args)?;

    print_form(app, hotel, &request)?;

    match request.decide(&app.auth_status())? {
        BookingDecision::Eligible(_) if request.can_submit() => println!("Ready to book."),
        BookingDecision::Eligible(_) => println!("Nothing to book yet."),
        BookingDecision::Rejected(reason) => println!("{reason}"),
    }
    Ok(())
}

pub async fn book(app: &App, args: &StayArgs, confirmed: bool) -> AppResult<()> {
    let hotel = find_hotel(&app.hotels, &args.hotel)?;
    let request = build_request(&SystemClock, hotel, app.config.booking, args)?;
    let decision = request.decide(&app.auth_status())?;

    let summary =
        ConfirmationSummary::for_decision(hotel, &request, &decision).map_err(AppError::Rejected)?;

    println!("Confirm Booking");
    println!("{}", summary.render(&app.config.display.currency_symbol));

    if !confirmed {
        println!();
        println!("Re-run with --yes to confirm this booking.");
        return Ok(());
    }

    let today = Local::now().date_naive();
    let record = confirm_booking(hotel, &request, &decision, today).map_err(AppError::Rejected)?;
    info!(booking_id = %record.id, hotel = %hotel.id, "Booking confirmed");
    app.preferences().add_booking(record).await?;

    println!();
    println!("Booking Confirmed!");
    println!("Your room has been booked successfully. You will receive a confirmation email shortly.");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike};
    use stayhub_core::catalog::sample_hotels;
    use stayhub_core::{AuthStatus, FixedClock, RejectionReason};

    fn clock() -> FixedClock<FixedOffset> {
        let sast = FixedOffset::east_opt(2 * 3600).unwrap();
        FixedClock::new(sast.with_ymd_and_hms(2025, 11, 1, 9, 30, 0).unwrap())
    }

    fn args(check_in: Option<&str>, check_out: Option<&str>) -> StayArgs {
        StayArgs {
            hotel: "1".to_string(),
            check_in: check_in.map(str::to_string),
            check_out: check_out.map(str::to_string),
            rooms: 1,
            adults: 2,
            children: 0,
        }
    }

    #[test]
    fn test_on_date_keeps_time_of_day() {
        let reference = clock().now();
        let at = on_date(&reference, "2025-11-10").unwrap();
        assert_eq!(at.date_naive(), NaiveDate::from_ymd_opt(2025, 11, 10).unwrap());
        assert_eq!((at.hour(), at.minute()), (9, 30));
        assert!(on_date(&reference, "10/11/2025").is_err());
    }

    #[test]
    fn test_build_request_prices_the_stay() {
        let hotels = sample_hotels();
        let request = build_request(
            &clock(),
            &hotels[0],
            BookingLimits::default(),
            &args(Some("2025-11-10"), Some("2025-11-12")),
        )
        .unwrap();

        let quote = request.quote().unwrap();
        assert_eq!(quote.nights, 2);
        assert_eq!(quote.total_cost.to_string(), "R4400");
    }

    #[test]
    fn test_check_out_date_keeps_check_out_time() {
        use chrono_tz::Europe::London;

        // 01:30 on 30 March does not exist in London, so the default
        // check-out lands 24h later at 02:30.
        let clock = FixedClock::new(London.with_ymd_and_hms(2025, 3, 29, 1, 30, 0).unwrap());
        let hotels = sample_hotels();
        let request = build_request(
            &clock,
            &hotels[0],
            BookingLimits::default(),
            &args(None, Some("2025-03-31")),
        )
        .unwrap();

        let check_out = request.check_out();
        assert_eq!(check_out.date_naive(), NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
        assert_eq!((check_out.hour(), check_out.minute()), (2, 30));
    }

    #[test]
    fn test_counters_stop_at_limits() {
        let hotels = sample_hotels();
        let mut wanted = args(None, None);
        wanted.rooms = 40;
        wanted.adults = 0;
        wanted.children = 3;

        let request =
            build_request(&clock(), &hotels[0], BookingLimits::default(), &wanted).unwrap();
        assert_eq!(request.rooms(), 10);
        assert_eq!(request.adults(), 1);
        assert_eq!(request.children(), 3);
    }

    #[test]
    fn test_check_out_before_check_in_is_rejected() {
        let hotels = sample_hotels();
        let request = build_request(
            &clock(),
            &hotels[0],
            BookingLimits::default(),
            &args(Some("2025-11-10"), Some("2025-11-08")),
        )
        .unwrap();

        let signed_in = AuthStatus::Authenticated(stayhub_core::AuthUser {
            uid: "u".to_string(),
            email: "u@example.com".to_string(),
            display_name: None,
        });
        assert_eq!(
            request.decide(&signed_in).unwrap(),
            BookingDecision::Rejected(RejectionReason::CheckOutBeforeOrEqualCheckIn)
        );
    }
}
