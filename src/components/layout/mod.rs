mod auth_modal;
mod page_shell;

pub(crate) use auth_modal::AuthModal;
pub(crate) use page_shell::PageShell;
