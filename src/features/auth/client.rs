//! Client wrappers for the submission endpoints. These helpers centralize
//! endpoint resolution so form components never hardcode paths; the login
//! endpoint stays overridable per call site for embedded placements.

use crate::app_lib::{AppError, config::AppConfig, post_form};
use crate::features::auth::types::{LoginFields, RegisterFields, SubmitResponse};

/// Submits the login form. `endpoint` overrides the configured login path when
/// the hosting page provides its own.
pub(crate) async fn login(
    fields: &LoginFields,
    endpoint: Option<&str>,
) -> Result<SubmitResponse, AppError> {
    let config = AppConfig::load();
    let path = endpoint.unwrap_or(&config.login_path).to_string();
    post_form(&path, fields).await
}

/// Submits the registration form.
pub(crate) async fn register(fields: &RegisterFields) -> Result<SubmitResponse, AppError> {
    let config = AppConfig::load();
    post_form(&config.signup_path, fields).await
}
