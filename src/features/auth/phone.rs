//! Phone input glue around the intl-tel-input widget. The widget owns country
//! selection and formatting; this module only filters keystrokes and refills
//! an emptied input with the selected dial code.

/// Maximum characters accepted in the phone input.
pub(crate) const MAX_PHONE_LENGTH: usize = 15;

/// Dial code used when the widget is unavailable. The widget initializes with
/// India as the initial and preferred country.
pub(crate) const DEFAULT_DIAL_CODE: &str = "91";

/// Capability interface over the widget's selected-country dial code, so the
/// form logic never depends on the concrete widget object shape.
pub(crate) trait DialCodeSource {
    fn dial_code(&self) -> String;
}

/// Fixed dial code, used as a widget-free source in tests and fallbacks.
pub(crate) struct FixedDialCode(pub String);

impl DialCodeSource for FixedDialCode {
    fn dial_code(&self) -> String {
        self.0.clone()
    }
}

/// Keypress filter for the phone input: control keys, digits, and `.` pass;
/// everything else is rejected, as is any key once the input holds more than
/// [`MAX_PHONE_LENGTH`] characters.
pub(crate) fn is_allowed_phone_key(key_code: u32, current_len: usize) -> bool {
    if current_len > MAX_PHONE_LENGTH {
        return false;
    }
    key_code <= 31 || key_code == 46 || (48..=57).contains(&key_code)
}

/// Refill value for an emptied phone input: `+<dial code>`. Returns `None`
/// when the input already has content.
pub(crate) fn ensure_dial_code_prefix(value: &str, dial_code: &str) -> Option<String> {
    if value.is_empty() {
        Some(format!("+{dial_code}"))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_control_keys_pass_the_filter() {
        for digit in b'0'..=b'9' {
            assert!(is_allowed_phone_key(u32::from(digit), 0));
        }
        assert!(is_allowed_phone_key(8, 5)); // backspace
        assert!(is_allowed_phone_key(46, 5)); // '.'
    }

    #[test]
    fn letters_and_symbols_are_rejected() {
        assert!(!is_allowed_phone_key(u32::from(b'a'), 0));
        assert!(!is_allowed_phone_key(u32::from(b'Z'), 0));
        assert!(!is_allowed_phone_key(u32::from(b'-'), 0));
        assert!(!is_allowed_phone_key(u32::from(b' '), 0));
    }

    #[test]
    fn filter_caps_input_length() {
        assert!(is_allowed_phone_key(u32::from(b'7'), MAX_PHONE_LENGTH));
        assert!(!is_allowed_phone_key(u32::from(b'7'), MAX_PHONE_LENGTH + 1));
    }

    #[test]
    fn empty_input_is_refilled_with_the_dial_code() {
        let source = FixedDialCode(DEFAULT_DIAL_CODE.to_string());
        assert_eq!(
            ensure_dial_code_prefix("", &source.dial_code()),
            Some("+91".to_string())
        );
    }

    #[test]
    fn populated_input_is_left_alone() {
        assert_eq!(ensure_dial_code_prefix("+919876543210", "91"), None);
        assert_eq!(ensure_dial_code_prefix("9876", "91"), None);
    }
}
