//! Submission outcome interpretation. One request/response cycle moves the
//! form from idle through an in-flight request to exactly one of: navigating
//! away, showing field errors, or showing a transport error, then back to
//! idle ready for another attempt.

use crate::app_lib::AppError;
use crate::features::auth::navigate::{
    PostSubmitNav, resolve_login_navigation, resolve_register_navigation,
};
use crate::features::auth::render::{ErrorLine, FormScope, plan_error_lines};
use crate::features::auth::types::SubmitResponse;

/// Fixed message shown when registration is attempted without accepting the
/// terms. No request is issued in that case.
pub(crate) const TERMS_REQUIRED_MESSAGE: &str = "Please agree to Terms & Conditions";

/// Message for a rejection that carried no field error map. Kept distinct from
/// validation failures so the UI never renders a stale or absent map.
const UNSTRUCTURED_REJECTION_MESSAGE: &str =
    "The server rejected the request without details. Please try again.";

/// How one completed submission cycle resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum SubmitOutcome {
    Navigate(PostSubmitNav),
    FieldErrors(Vec<ErrorLine>),
    TransportError(String),
}

/// Checks the terms-acceptance precondition before any registration request.
pub(crate) fn preflight_register(terms_accepted: bool) -> Result<(), ErrorLine> {
    if terms_accepted {
        Ok(())
    } else {
        Err(ErrorLine::unlabeled(TERMS_REQUIRED_MESSAGE))
    }
}

/// Interprets a completed login submission.
pub(crate) fn login_outcome(
    result: Result<SubmitResponse, AppError>,
    modal_visible: bool,
    context: Option<&str>,
    return_to: Option<&str>,
) -> SubmitOutcome {
    match result {
        Ok(response) if response.success => SubmitOutcome::Navigate(resolve_login_navigation(
            context,
            return_to,
            response.dashboard_url.as_deref(),
        )),
        Ok(response) => rejection_outcome(&FormScope::login(), response, modal_visible),
        Err(error) => transport_outcome(&error),
    }
}

/// Interprets a completed registration submission.
pub(crate) fn register_outcome(
    result: Result<SubmitResponse, AppError>,
    modal_visible: bool,
) -> SubmitOutcome {
    match result {
        Ok(response) if response.success => {
            SubmitOutcome::Navigate(resolve_register_navigation())
        }
        Ok(response) => rejection_outcome(&FormScope::register(), response, modal_visible),
        Err(error) => transport_outcome(&error),
    }
}

/// Maps a `success: false` envelope to planned error lines. A rejection with
/// no message map is its own case, not an empty validation failure.
fn rejection_outcome(
    scope: &FormScope,
    response: SubmitResponse,
    modal_visible: bool,
) -> SubmitOutcome {
    match response.message {
        Some(errors) if !errors.is_empty() => {
            SubmitOutcome::FieldErrors(plan_error_lines(scope, &errors, modal_visible))
        }
        _ => SubmitOutcome::TransportError(UNSTRUCTURED_REJECTION_MESSAGE.to_string()),
    }
}

/// Maps a transport failure to a generic, user-facing error state.
fn transport_outcome(error: &AppError) -> SubmitOutcome {
    SubmitOutcome::TransportError(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::navigate::CHECKOUT_CONTEXT;
    use crate::features::auth::render::{FormKind, Placement, RenderedErrors};
    use crate::features::auth::types::{ALL_FIELDS, FieldErrorMap};

    fn failure(entries: &[(&str, &[&str])]) -> SubmitResponse {
        let message: FieldErrorMap = entries
            .iter()
            .map(|(field, messages)| {
                (
                    field.to_string(),
                    messages.iter().map(|m| m.to_string()).collect(),
                )
            })
            .collect();
        SubmitResponse {
            success: false,
            dashboard_url: None,
            message: Some(message),
        }
    }

    fn success(dashboard_url: Option<&str>) -> SubmitResponse {
        SubmitResponse {
            success: true,
            dashboard_url: dashboard_url.map(str::to_string),
            message: None,
        }
    }

    #[test]
    fn unchecked_terms_aborts_with_the_fixed_message() {
        let line = preflight_register(false).expect_err("precondition must fail");
        assert_eq!(line.text, TERMS_REQUIRED_MESSAGE);
        assert_eq!(line.placement, Placement::Summary { label: None });
        assert!(preflight_register(true).is_ok());
    }

    #[test]
    fn login_success_honors_checkout_context_then_return_to_then_dashboard() {
        let outcome = login_outcome(
            Ok(success(Some("/dashboard/"))),
            false,
            Some(CHECKOUT_CONTEXT),
            Some("/cart/"),
        );
        assert_eq!(outcome, SubmitOutcome::Navigate(PostSubmitNav::Reload));

        let outcome = login_outcome(Ok(success(Some("/dashboard/"))), false, None, Some("/cart/"));
        assert_eq!(
            outcome,
            SubmitOutcome::Navigate(PostSubmitNav::Goto("/cart/".to_string()))
        );

        let outcome = login_outcome(Ok(success(Some("/dashboard/"))), false, None, None);
        assert_eq!(
            outcome,
            SubmitOutcome::Navigate(PostSubmitNav::Goto("/dashboard/".to_string()))
        );
    }

    #[test]
    fn register_success_always_navigates_home() {
        let outcome = register_outcome(Ok(success(None)), false);
        assert_eq!(
            outcome,
            SubmitOutcome::Navigate(PostSubmitNav::Goto("/".to_string()))
        );
    }

    #[test]
    fn rejection_plans_one_line_per_error_string() {
        let response = failure(&[
            ("email", &["taken"][..]),
            (ALL_FIELDS, &["Invalid credentials", "Account locked"][..]),
        ]);
        let SubmitOutcome::FieldErrors(lines) = login_outcome(Ok(response), false, None, None)
        else {
            panic!("expected field errors");
        };
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn modal_register_rejection_stays_renderable_through_the_shared_state() {
        let response = failure(&[
            ("email", &["Account already exists"][..]),
            ("phone_number", &["Enter a valid phone number"][..]),
        ]);
        let SubmitOutcome::FieldErrors(lines) = register_outcome(Ok(response), true) else {
            panic!("expected field errors");
        };

        let mut rendered = RenderedErrors::default();
        rendered.render(lines);

        // Every string stays displayable: the rerouted email line sits in the
        // login slot both modal forms share, the rest in register slots.
        assert_eq!(rendered.total(), 2);
        assert_eq!(
            rendered.inline_for(FormKind::Login, "email"),
            vec!["Account already exists".to_string()]
        );
        assert_eq!(
            rendered.inline_for(FormKind::Register, "phone_number"),
            vec!["Enter a valid phone number".to_string()]
        );
    }

    #[test]
    fn rejection_without_a_message_map_is_a_transport_style_error() {
        let response = SubmitResponse {
            success: false,
            dashboard_url: None,
            message: None,
        };
        let outcome = login_outcome(Ok(response), false, None, None);
        assert!(matches!(outcome, SubmitOutcome::TransportError(_)));

        let outcome = register_outcome(Ok(failure(&[])), false);
        assert!(matches!(outcome, SubmitOutcome::TransportError(_)));
    }

    #[test]
    fn transport_failure_surfaces_a_generic_message() {
        let outcome = login_outcome(
            Err(AppError::Http {
                status: 500,
                message: "Internal Server Error".to_string(),
            }),
            false,
            None,
            None,
        );
        assert_eq!(
            outcome,
            SubmitOutcome::TransportError("Request failed (500): Internal Server Error".to_string())
        );
    }
}
