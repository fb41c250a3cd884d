//! Post-success navigation rules. A checkout-context login reloads in place so
//! the surrounding page keeps its state; otherwise the `?next=` target captured
//! at page load wins, then the server-provided dashboard URL, then `/`.

/// Context hint for pages that must reload in place after login.
pub(crate) const CHECKOUT_CONTEXT: &str = "checkout";

/// Fallback route when the server provides no destination.
const DEFAULT_ROUTE: &str = "/";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum PostSubmitNav {
    /// Reload the current page in place.
    Reload,
    /// Navigate the browser to the given URL.
    Goto(String),
}

/// Extracts the "return to" target from the page address, kept raw exactly as
/// it appears after the first `?next=`.
pub(crate) fn capture_return_to(href: &str) -> Option<String> {
    let (_, target) = href.split_once("?next=")?;
    if target.is_empty() {
        None
    } else {
        Some(target.to_string())
    }
}

/// Resolves where a successful login sends the browser.
pub(crate) fn resolve_login_navigation(
    context: Option<&str>,
    return_to: Option<&str>,
    dashboard_url: Option<&str>,
) -> PostSubmitNav {
    if context == Some(CHECKOUT_CONTEXT) {
        return PostSubmitNav::Reload;
    }
    if let Some(target) = return_to {
        return PostSubmitNav::Goto(target.to_string());
    }
    match dashboard_url {
        Some(url) if !url.is_empty() => PostSubmitNav::Goto(url.to_string()),
        _ => PostSubmitNav::Goto(DEFAULT_ROUTE.to_string()),
    }
}

/// A successful registration always lands on the home page.
pub(crate) fn resolve_register_navigation() -> PostSubmitNav {
    PostSubmitNav::Goto(DEFAULT_ROUTE.to_string())
}

/// Applies a navigation decision to the browser.
#[cfg(target_arch = "wasm32")]
pub(crate) fn perform(nav: &PostSubmitNav) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let result = match nav {
        PostSubmitNav::Reload => location.reload(),
        PostSubmitNav::Goto(url) => location.set_href(url),
    };
    if result.is_err() {
        leptos::logging::warn!("navigation failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_context_reloads_in_place() {
        let nav = resolve_login_navigation(
            Some(CHECKOUT_CONTEXT),
            Some("/cart/"),
            Some("/dashboard/"),
        );
        assert_eq!(nav, PostSubmitNav::Reload);
    }

    #[test]
    fn captured_return_to_wins_over_dashboard_url() {
        let nav = resolve_login_navigation(None, Some("/books/42/"), Some("/dashboard/"));
        assert_eq!(nav, PostSubmitNav::Goto("/books/42/".to_string()));
    }

    #[test]
    fn dashboard_url_applies_when_nothing_else_matches() {
        let nav = resolve_login_navigation(None, None, Some("/dashboard/"));
        assert_eq!(nav, PostSubmitNav::Goto("/dashboard/".to_string()));
    }

    #[test]
    fn missing_dashboard_url_falls_back_to_home() {
        assert_eq!(
            resolve_login_navigation(None, None, None),
            PostSubmitNav::Goto("/".to_string())
        );
        assert_eq!(
            resolve_login_navigation(None, None, Some("")),
            PostSubmitNav::Goto("/".to_string())
        );
    }

    #[test]
    fn registration_always_lands_on_home() {
        assert_eq!(
            resolve_register_navigation(),
            PostSubmitNav::Goto("/".to_string())
        );
    }

    #[test]
    fn capture_return_to_takes_the_raw_next_target() {
        assert_eq!(
            capture_return_to("https://lms.example/login?next=/books/7/"),
            Some("/books/7/".to_string())
        );
        assert_eq!(capture_return_to("https://lms.example/login"), None);
        assert_eq!(capture_return_to("https://lms.example/login?next="), None);
    }
}
