//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use stayhub_core::catalog::SortOption;

#[derive(Debug, Parser)]
#[command(name = "stayhub", version, about = "Browse and book hotels")]
pub struct Cli {
    /// Config file (defaults to stayhub.toml in the platform config dir).
    #[arg(long, global = true, env = "STAYHUB_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the intro slides and remember they were seen.
    Onboarding {
        /// Skip straight past the slides.
        #[arg(long)]
        skip: bool,
        /// Show them even if already seen.
        #[arg(long)]
        again: bool,
    },

    /// List hotels.
    Hotels {
        /// Filter by name or location.
        #[arg(long, short, default_value = "")]
        search: String,
        /// rating, price or name.
        #[arg(long, default_value_t = SortOption::Rating)]
        sort: SortOption,
    },

    /// Hotel details and reviews, optionally adding a review.
    Hotel {
        id: String,
        /// Stars for a new review (1-5).
        #[arg(long, requires = "comment")]
        rating: Option<u8>,
        /// Text for a new review.
        #[arg(long, requires = "rating")]
        comment: Option<String>,
    },

    /// Price a stay without booking it.
    Quote(StayArgs),

    /// Book a stay.
    Book {
        #[command(flatten)]
        stay: StayArgs,
        /// Confirm without asking.
        #[arg(long)]
        yes: bool,
    },

    SignUp {
        #[arg(long)]
        email: String,
        #[arg(long, env = "STAYHUB_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },

    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long, env = "STAYHUB_PASSWORD", hide_env_values = true)]
        password: String,
    },

    SignOut,

    /// Send a password reset e-mail.
    ResetPassword {
        #[arg(long)]
        email: String,
    },

    /// Show the profile, optionally changing the display name.
    Profile {
        #[arg(long)]
        name: Option<String>,
    },

    /// Booking history.
    Bookings,
}

/// Stay selection shared by `quote` and `book`.
#[derive(Debug, Clone, Args)]
pub struct StayArgs {
    /// Hotel id (see `stayhub hotels`).
    pub hotel: String,

    /// Check-in date, YYYY-MM-DD (default: today).
    #[arg(long)]
    pub check_in: Option<String>,

    /// Check-out date, YYYY-MM-DD (default: the day after check-in).
    #[arg(long)]
    pub check_out: Option<String>,

    #[arg(long, default_value_t = 1)]
    pub rooms: u32,

    #[arg(long, default_value_t = 2)]
    pub adults: u32,

    #[arg(long, default_value_t = 0)]
    pub children: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_book() {
        let cli = Cli::parse_from([
            "stayhub", "book", "1", "--check-in", "2025-11-10", "--check-out", "2025-11-12",
            "--rooms", "2", "--yes",
        ]);

        match cli.command {
            Command::Book { stay, yes } => {
                assert!(yes);
                assert_eq!(stay.hotel, "1");
                assert_eq!(stay.rooms, 2);
                assert_eq!(stay.adults, 2);
                assert_eq!(stay.check_out.as_deref(), Some("2025-11-12"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_sort() {
        let cli = Cli::parse_from(["stayhub", "hotels", "--sort", "price", "-s", "lodge"]);
        assert!(matches!(
            cli.command,
            Command::Hotels { sort: SortOption::Price, ref search } if search == "lodge"
        ));
    }
}
