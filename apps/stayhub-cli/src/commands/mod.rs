//! # Commands
//!
//! One function per subcommand; `run` routes to them.

mod account;
mod explore;
mod onboarding;
mod profile;
mod stay;

use stayhub_core::review::ReviewDraft;

use crate::app::App;
use crate::cli::Command;
use crate::error::AppResult;

pub async fn run(app: &App, command: Command) -> AppResult<()> {
    match command {
        Command::Onboarding { skip, again } => onboarding::run(app, skip, again).await,
        Command::Hotels { search, sort } => {
            explore::list(app, &search, sort);
            Ok(())
        }
        Command::Hotel {
            id,
            rating,
            comment,
        } => {
            let draft = rating.map(|rating| ReviewDraft::new(rating, comment.unwrap_or_default()));
            explore::show(app, &id, draft)
        }
        Command::Quote(args) => stay::quote(app, &args),
        Command::Book { stay: args, yes } => stay::book(app, &args, yes).await,
        Command::SignUp {
            email,
            password,
            confirm_password,
        } => account::sign_up(app, &email, &password, &confirm_password).await,
        Command::SignIn { email, password } => account::sign_in(app, &email, &password).await,
        Command::SignOut => account::sign_out(app).await,
        Command::ResetPassword { email } => account::reset_password(app, &email).await,
        Command::Profile { name } => profile::show(app, name.as_deref()).await,
        Command::Bookings => profile::bookings(app).await,
    }
}
