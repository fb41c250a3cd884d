//! Dial-code source backed by the page-registered intl-tel-input instance.
//! The hosting page initializes the widget and exposes it as
//! `window.LMS_PHONE_WIDGET`; this reader calls `getSelectedCountryData()` on
//! it and falls back to the default dial code when the widget is absent.

use crate::features::auth::phone::{DEFAULT_DIAL_CODE, DialCodeSource};
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

pub(crate) struct WindowDialCodeSource;

impl DialCodeSource for WindowDialCodeSource {
    fn dial_code(&self) -> String {
        read_widget_dial_code().unwrap_or_else(|| DEFAULT_DIAL_CODE.to_string())
    }
}

fn read_widget_dial_code() -> Option<String> {
    let window = web_sys::window()?;
    let widget = Reflect::get(&window, &JsValue::from_str("LMS_PHONE_WIDGET")).ok()?;
    if widget.is_null() || widget.is_undefined() {
        return None;
    }

    let method = Reflect::get(&widget, &JsValue::from_str("getSelectedCountryData")).ok()?;
    let method = method.dyn_into::<Function>().ok()?;
    let country_data = method.call0(&widget).ok()?;
    let dial_code = Reflect::get(&country_data, &JsValue::from_str("dialCode"))
        .ok()?
        .as_string()?;

    let trimmed = dial_code.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
