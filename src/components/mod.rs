//! Shared UI components exported for routes and forms.

pub(crate) mod forms;
pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use forms::{LoginForm, RegisterForm};
pub(crate) use layout::{AuthModal, PageShell};
pub(crate) use ui::{Alert, AlertKind, Button, ErrorSummary, FieldError, Spinner};
