//! Auth feature module covering the login/registration submission contract:
//! envelope types, error placement, post-success navigation, and the phone
//! widget glue. It keeps submission logic out of the UI and must stay aligned
//! with the backend's form-validation error format.
//!
//! Flow Overview: a submit click clears prior error markup, serializes the
//! form, and POSTs it. A `success: true` envelope navigates (reload, captured
//! `?next=` target, or dashboard URL); a `success: false` envelope maps field
//! names to inline or summary error lines; transport failures render a generic
//! error without touching the field map.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod navigate;
pub(crate) mod phone;
pub(crate) mod render;
pub(crate) mod submit;
pub(crate) mod types;
#[cfg(target_arch = "wasm32")]
pub(crate) mod widget;
