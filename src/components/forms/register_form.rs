//! Registration form. Submission is gated on the terms checkbox before any
//! request is issued; the phone input carries the keypress filter and the
//! dial-code refill glue around the page's intl-tel-input widget.

use crate::components::ui::{Alert, AlertKind, Button, ErrorSummary, FieldError, Spinner};
use crate::features::auth::client;
use crate::features::auth::navigate;
use crate::features::auth::phone::{DialCodeSource, ensure_dial_code_prefix, is_allowed_phone_key};
use crate::features::auth::render::{FormKind, RenderedErrors};
use crate::features::auth::submit::{SubmitOutcome, preflight_register, register_outcome};
use crate::features::auth::types::RegisterFields;
use crate::features::auth::widget::WindowDialCodeSource;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Renders the registration form. `errors` is the error state this form
/// renders from; inside the modal it is the same signal the login form reads,
/// so a duplicate `email` error rerouted to the login input still renders.
/// `modal_visible` reports whether the shared login/register modal is showing.
#[component]
pub fn RegisterForm(
    errors: RwSignal<RenderedErrors>,
    modal_visible: Signal<bool>,
) -> impl IntoView {
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone_number, set_phone_number) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (terms_accepted, set_terms_accepted) = signal(false);
    let (transport_error, set_transport_error) = signal::<Option<String>>(None);

    let register_action = Action::new_local(move |fields: &RegisterFields| {
        let fields = fields.clone();
        async move { client::register(&fields).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match register_outcome(result, modal_visible.get_untracked()) {
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

    let on_phone_keypress = move |event: web_sys::KeyboardEvent| {
        let current_len = phone_number.get_untracked().len();
        if !is_allowed_phone_key(event.char_code(), current_len) {
            event.prevent_default();
        }
    };

    let on_phone_blur = move |_| {
        let current = phone_number.get_untracked();
        let dial_code = WindowDialCodeSource.dial_code();
        if let Some(filled) = ensure_dial_code_prefix(&current, &dial_code) {
            set_phone_number.set(filled);
        }
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        // Idempotent cleanup before every attempt.
        errors.update(|state| state.reset());
        set_transport_error.set(None);

        if let Err(line) = preflight_register(terms_accepted.get_untracked()) {
            errors.update(|state| state.render(vec![line]));
            return;
        }

        register_action.dispatch(RegisterFields {
            first_name: first_name.get_untracked().trim().to_string(),
            last_name: last_name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            phone_number: phone_number.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            terms_conditions: true,
        });
    };

    let rendered_errors = Signal::derive(move || errors.get());
    let input_class = "block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 focus:border-indigo-500 focus:ring-indigo-500";

    view! {
        <form id="register_form" class="mx-auto w-full max-w-sm" on:submit=on_submit>
            <div class="mb-5">
                <label class="mb-2 block text-sm font-medium text-gray-900" for="id_first_name">
                    "First name"
                </label>
                <input
                    id="id_first_name"
                    name="first_name"
                    type="text"
                    class=input_class
                    autocomplete="given-name"
                    on:input=move |event| set_first_name.set(event_target_value(&event))
                />
                <FieldError errors=rendered_errors form=FormKind::Register field="first_name" />
            </div>
            <div class="mb-5">
                <label class="mb-2 block text-sm font-medium text-gray-900" for="id_last_name">
                    "Last name"
                </label>
                <input
                    id="id_last_name"
                    name="last_name"
                    type="text"
                    class=input_class
                    autocomplete="family-name"
                    on:input=move |event| set_last_name.set(event_target_value(&event))
                />
                <FieldError errors=rendered_errors form=FormKind::Register field="last_name" />
            </div>
            <div class="mb-5">
                <label class="mb-2 block text-sm font-medium text-gray-900" for="register_email">
                    "Email"
                </label>
                <input
                    id="register_email"
                    name="email"
                    type="email"
                    class=input_class
                    autocomplete="email"
                    required
                    on:input=move |event| set_email.set(event_target_value(&event))
                />
                <FieldError errors=rendered_errors form=FormKind::Register field="email" />
            </div>
            <div class="mb-5">
                <label class="mb-2 block text-sm font-medium text-gray-900" for="id_phone_number">
                    "Phone number"
                </label>
                <input
                    id="id_phone_number"
                    name="phone_number"
                    type="tel"
                    class=input_class
                    autocomplete="tel"
                    prop:value=move || phone_number.get()
                    on:input=move |event| set_phone_number.set(event_target_value(&event))
                    on:keypress=on_phone_keypress
                    on:blur=on_phone_blur
                />
                <FieldError errors=rendered_errors form=FormKind::Register field="phone_number" />
            </div>
            <div class="mb-5">
                <label class="mb-2 block text-sm font-medium text-gray-900" for="register_password">
                    "Password"
                </label>
                <input
                    id="register_password"
                    name="password"
                    type="password"
                    class=input_class
                    autocomplete="new-password"
                    required
                    on:input=move |event| set_password.set(event_target_value(&event))
                />
                <FieldError errors=rendered_errors form=FormKind::Register field="password" />
            </div>
            <div class="mb-5">
                <label
                    class="mb-2 block text-sm font-medium text-gray-900"
                    for="register_confirm_password"
                >
                    "Confirm password"
                </label>
                <input
                    id="register_confirm_password"
                    name="confirm_password"
                    type="password"
                    class=input_class
                    autocomplete="new-password"
                    required
                    on:input=move |event| set_confirm_password.set(event_target_value(&event))
                />
                <FieldError
                    errors=rendered_errors
                    form=FormKind::Register
                    field="confirm_password"
                />
            </div>
            <div class="mb-5 flex items-center gap-2">
                <input
                    id="terms_conditions"
                    name="terms_conditions"
                    type="checkbox"
                    class="h-4 w-4 rounded border-gray-300"
                    on:change=move |event| set_terms_accepted.set(event_target_checked(&event))
                />
                <label class="text-sm text-gray-700" for="terms_conditions">
                    "I agree to the Terms & Conditions"
                </label>
            </div>
            <Button button_type="submit" disabled=register_action.pending()>
                "Create account"
            </Button>
            {move || {
                register_action
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
