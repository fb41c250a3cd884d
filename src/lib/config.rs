//! Build-time configuration for the submission endpoints with an optional
//! runtime override. The runtime config is read from `window.LMS_CONFIG` (if
//! present) so static deployments can repoint endpoints without rebuilding.
//! Configuration values are public; do not store secrets here.

/// Default login endpoint, kept stable for backend compatibility.
pub const DEFAULT_LOGIN_PATH: &str = "/loginsignup/login/";
/// Default registration endpoint, kept stable for backend compatibility.
pub const DEFAULT_SIGNUP_PATH: &str = "/loginsignup/create/user/";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub login_path: String,
    pub signup_path: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("LMS_API_BASE_URL").unwrap_or("");
        let login_path = option_env!("LMS_LOGIN_PATH").unwrap_or(DEFAULT_LOGIN_PATH);
        let signup_path = option_env!("LMS_SIGNUP_PATH").unwrap_or(DEFAULT_SIGNUP_PATH);

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            login_path: login_path.to_string(),
            signup_path: signup_path.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    login_path: Option<String>,
    signup_path: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.login_path {
        config.login_path = value;
    }
    if let Some(value) = runtime.signup_path {
        config.signup_path = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("LMS_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        login_path: read_runtime_value(&object, "login_path"),
        signup_path: read_runtime_value(&object, "signup_path"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value,
        DEFAULT_LOGIN_PATH, DEFAULT_SIGNUP_PATH,
    };

    #[test]
    fn load_keeps_compatibility_endpoints_by_default() {
        let config = AppConfig::load();
        assert_eq!(config.login_path, DEFAULT_LOGIN_PATH);
        assert_eq!(config.signup_path, DEFAULT_SIGNUP_PATH);
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://lms.example "),
            Some("https://lms.example".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = AppConfig {
            api_base_url: "https://api.default".to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            signup_path: DEFAULT_SIGNUP_PATH.to_string(),
        };
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            login_path: normalize_runtime_value("  "),
            signup_path: normalize_runtime_value(""),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.default");
        assert_eq!(config.login_path, DEFAULT_LOGIN_PATH);
        assert_eq!(config.signup_path, DEFAULT_SIGNUP_PATH);
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig {
            api_base_url: String::new(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            signup_path: DEFAULT_SIGNUP_PATH.to_string(),
        };
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            login_path: normalize_runtime_value("/accounts/login/"),
            signup_path: normalize_runtime_value("/accounts/create/"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.login_path, "/accounts/login/");
        assert_eq!(config.signup_path, "/accounts/create/");
    }
}
