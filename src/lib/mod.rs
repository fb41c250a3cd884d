//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! ## Submission contract
//!
//! Both auth forms speak the same envelope to the backend:
//!
//! 1. The form fields are serialized to `application/x-www-form-urlencoded`
//!    and POSTed to the form's endpoint (`/loginsignup/login/` or
//!    `/loginsignup/create/user/`).
//! 2. A 2xx response carries `{success, dashboard_url?, message?}` where
//!    `message` maps field names (or `__all__`) to lists of error strings.
//! 3. Non-2xx responses and network failures surface as transport errors and
//!    never as field errors.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated request setup in the form components.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::post_form;
pub(crate) use errors::AppError;
