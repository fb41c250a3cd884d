//! Login form driving one submission cycle per click: clear prior error
//! markup, POST the serialized fields, then navigate or render the returned
//! errors. The `?next=` target is captured once when the form mounts.

use crate::components::ui::{Alert, AlertKind, Button, ErrorSummary, FieldError, Spinner};
use crate::features::auth::client;
use crate::features::auth::navigate::{self, capture_return_to};
use crate::features::auth::render::{FormKind, RenderedErrors};
use crate::features::auth::submit::{SubmitOutcome, login_outcome};
use crate::features::auth::types::LoginFields;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Renders the login form.
///
/// All collaborators are explicit parameters: `errors` is the error state this
/// form renders from (the modal passes one signal to both forms so lines
/// targeted at either form stay displayable), `modal_visible` reports whether
/// the shared login/register modal is showing (email errors then resolve to
/// this form), `context` is the hosting page's hint (`"checkout"` reloads in
/// place after success), and `endpoint` overrides the configured login path.
#[component]
pub fn LoginForm(
    errors: RwSignal<RenderedErrors>,
    modal_visible: Signal<bool>,
    context: Option<&'static str>,
    endpoint: Option<&'static str>,
) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (transport_error, set_transport_error) = signal::<Option<String>>(None);

    // Captured once at mount; later address changes do not retarget it.
    let return_to = StoredValue::new(
        web_sys::window()
            .and_then(|window| window.location().href().ok())
            .and_then(|href| capture_return_to(&href)),
    );

    let login_action = Action::new_local(move |fields: &LoginFields| {
        let fields = fields.clone();
        async move { client::login(&fields, endpoint).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            let outcome = login_outcome(
                result,
                modal_visible.get_untracked(),
                context,
                return_to.get_value().as_deref(),
            );
            match outcome {
                SubmitOutcome::Navigate(nav) => navigate::perform(&nav),
                SubmitOutcome::FieldErrors(lines) => {
                    set_transport_error.set(None);
                    errors.update(|state| state.render(lines));
                }
                SubmitOutcome::TransportError(message) => {
                    errors.update(|state| state.reset());
                    set_transport_error.set(Some(message));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        // Idempotent cleanup before every attempt.
        errors.update(|state| state.reset());
        set_transport_error.set(None);

        login_action.dispatch(LoginFields {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        });
    };

    let rendered_errors = Signal::derive(move || errors.get());

    view! {
        <form id="login_form" class="mx-auto w-full max-w-sm" on:submit=on_submit>
            <div class="mb-5">
                <label class="mb-2 block text-sm font-medium text-gray-900" for="login_email">
                    "Email"
                </label>
                <input
                    id="login_email"
                    name="email"
                    type="email"
                    class="block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 focus:border-indigo-500 focus:ring-indigo-500"
                    autocomplete="email"
                    required
                    on:input=move |event| set_email.set(event_target_value(&event))
                />
                <FieldError errors=rendered_errors form=FormKind::Login field="email" />
            </div>
            <div class="mb-5">
                <label class="mb-2 block text-sm font-medium text-gray-900" for="login_password">
                    "Password"
                </label>
                <input
                    id="login_password"
                    name="password"
                    type="password"
                    class="block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 focus:border-indigo-500 focus:ring-indigo-500"
                    autocomplete="current-password"
                    required
                    on:input=move |event| set_password.set(event_target_value(&event))
                />
                <FieldError errors=rendered_errors form=FormKind::Login field="password" />
            </div>
            <Button button_type="submit" disabled=login_action.pending()>
                "Log in"
            </Button>
            {move || {
                login_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
            }}
            {move || {
                transport_error
                    .get()
                    .map(|message| {
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Error message=message />
                            </div>
                        }
                    })
            }}
            <ErrorSummary errors=rendered_errors />
        </form>
    }
}
