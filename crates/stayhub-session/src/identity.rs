//! # Identity Provider
//!
//! The seam to the email/password identity service.

use async_trait::async_trait;

use stayhub_core::AuthUser;

use crate::error::IdentityResult;
use crate::status::AuthStatusChannel;

/// Email/password identity service.
///
/// Implementations publish every change of signed-in user on
/// [`IdentityProvider::status`]. `sign_up` leaves the new user signed in.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> IdentityResult<AuthUser>;

    async fn sign_up(&self, email: &str, password: &str) -> IdentityResult<AuthUser>;

    async fn send_password_reset(&self, email: &str) -> IdentityResult<()>;

    /// Renames the signed-in user.
    async fn update_display_name(&self, display_name: &str) -> IdentityResult<AuthUser>;

    async fn sign_out(&self) -> IdentityResult<()>;

    async fn current_user(&self) -> IdentityResult<Option<AuthUser>>;

    /// Where status changes are published.
    fn status(&self) -> &AuthStatusChannel;
}
