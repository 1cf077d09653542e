//! Sign-up, sign-in, sign-out and password reset.

use crate::app::App;
use crate::error::{AppError, AppResult};

pub async fn sign_up(app: &App, email: &str, password: &str, confirm_password: &str) -> AppResult<()> {
    let user = app
        .session
        .sign_up(email, password, confirm_password)
        .await
        .map_err(AppError::session("Sign Up Failed"))?;

    println!("Welcome!: Account created successfully for {}", user.email);
    Ok(())
}

pub async fn sign_in(app: &App, email: &str, password: &str) -> AppResult<()> {
    let user = app
        .session
        .sign_in(email, password)
        .await
        .map_err(AppError::session("Login Failed"))?;

    println!("Welcome Back: Successfully logged in as {}", user.email);
    Ok(())
}

pub async fn sign_out(app: &App) -> AppResult<()> {
    app.session
        .sign_out()
        .await
        .map_err(AppError::session("Error"))?;

    println!("Signed out.");
    Ok(())
}

pub async fn reset_password(app: &App, email: &str) -> AppResult<()> {
    app.session
        .request_password_reset(email)
        .await
        .map_err(AppError::session("Error"))?;

    println!("Password Reset Email Sent: Check your email for instructions to reset your password.");
    Ok(())
}
