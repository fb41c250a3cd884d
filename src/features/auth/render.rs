//! Error placement planning and the per-attempt error state. One parametrized
//! routine decides, for every server error string, whether it renders inline
//! next to a named input or in the page-level summary region, so login and
//! registration share the exact same rendering rules.

use crate::features::auth::types::{ALL_FIELDS, FieldErrorMap};

/// Input names present in the login form.
const LOGIN_FIELD_NAMES: &[&str] = &["email", "password"];
/// Input names present in the registration form.
const REGISTER_FIELD_NAMES: &[&str] = &[
    "first_name",
    "last_name",
    "email",
    "phone_number",
    "password",
    "confirm_password",
    "terms_conditions",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum FormKind {
    Login,
    Register,
}

/// The set of input names a form renders, used to resolve error placement.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FormScope {
    kind: FormKind,
    fields: &'static [&'static str],
}

impl FormScope {
    pub(crate) fn login() -> Self {
        Self {
            kind: FormKind::Login,
            fields: LOGIN_FIELD_NAMES,
        }
    }

    pub(crate) fn register() -> Self {
        Self {
            kind: FormKind::Register,
            fields: REGISTER_FIELD_NAMES,
        }
    }

    pub(crate) fn kind(&self) -> FormKind {
        self.kind
    }

    fn contains(&self, field: &str) -> bool {
        self.fields.contains(&field)
    }

    /// Resolves a field name to the input it should annotate, if any.
    ///
    /// When the shared login/register modal is visible, `email` always
    /// resolves inside the login form scope: both co-mounted forms carry an
    /// `email` input and the login one is the authoritative target.
    fn resolve(&self, field: &str, modal_visible: bool) -> Option<FieldTarget> {
        if modal_visible && field == "email" {
            return Some(FieldTarget {
                form: FormKind::Login,
                field: field.to_string(),
            });
        }
        if self.contains(field) {
            return Some(FieldTarget {
                form: self.kind,
                field: field.to_string(),
            });
        }
        None
    }
}

/// A specific input within a specific form.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct FieldTarget {
    pub form: FormKind,
    pub field: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Placement {
    /// Rendered as a sibling element immediately after the named input.
    Inline(FieldTarget),
    /// Rendered in the page-level summary region; `label` is the field name
    /// prefix, omitted for whole-form errors.
    Summary { label: Option<String> },
}

/// One error string with its resolved placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ErrorLine {
    pub placement: Placement,
    pub text: String,
}

impl ErrorLine {
    /// A summary line with no field label, used for client preconditions and
    /// whole-form errors.
    pub(crate) fn unlabeled(text: impl Into<String>) -> Self {
        Self {
            placement: Placement::Summary { label: None },
            text: text.into(),
        }
    }
}

/// Plans one line per error string in the map. Fields that resolve to an
/// input in scope render inline; everything else lands in the summary region,
/// with the `__all__` sentinel rendered without a field label.
pub(crate) fn plan_error_lines(
    scope: &FormScope,
    errors: &FieldErrorMap,
    modal_visible: bool,
) -> Vec<ErrorLine> {
    let mut lines = Vec::new();
    for (field, messages) in errors {
        let placement = match scope.resolve(field, modal_visible) {
            Some(target) => Placement::Inline(target),
            None => Placement::Summary {
                label: (field != ALL_FIELDS).then(|| field.clone()),
            },
        };
        for message in messages {
            lines.push(ErrorLine {
                placement: placement.clone(),
                text: message.clone(),
            });
        }
    }
    lines
}

/// A line in the page-level summary region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SummaryLine {
    pub label: Option<String>,
    pub text: String,
}

impl SummaryLine {
    /// The display text; labeled lines render as `label: text`.
    pub(crate) fn display(&self) -> String {
        match &self.label {
            Some(label) => format!("{label}: {}", self.text),
            None => self.text.clone(),
        }
    }
}

/// Error markup state for one submission attempt. Every cycle replaces the
/// previous cycle's content wholesale, so stale messages never accumulate
/// across repeated attempts and concurrent completions are last-writer-wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RenderedErrors {
    inline: std::collections::BTreeMap<FieldTarget, Vec<String>>,
    summary: Vec<SummaryLine>,
}

impl RenderedErrors {
    /// Clears all rendered error markup.
    pub(crate) fn reset(&mut self) {
        self.inline.clear();
        self.summary.clear();
    }

    /// Replaces the current markup with the planned lines.
    pub(crate) fn render(&mut self, lines: Vec<ErrorLine>) {
        self.reset();
        for line in lines {
            match line.placement {
                Placement::Inline(target) => {
                    self.inline.entry(target).or_default().push(line.text);
                }
                Placement::Summary { label } => {
                    self.summary.push(SummaryLine {
                        label,
                        text: line.text,
                    });
                }
            }
        }
    }

    /// Error strings rendered as siblings of the given input.
    pub(crate) fn inline_for(&self, form: FormKind, field: &str) -> Vec<String> {
        self.inline
            .get(&FieldTarget {
                form,
                field: field.to_string(),
            })
            .cloned()
            .unwrap_or_default()
    }

    /// Lines rendered in the page-level summary region.
    pub(crate) fn summary(&self) -> &[SummaryLine] {
        &self.summary
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.inline.is_empty() && self.summary.is_empty()
    }

    /// Total rendered error strings across inline and summary placements.
    pub(crate) fn total(&self) -> usize {
        self.inline.values().map(Vec::len).sum::<usize>() + self.summary.len()
    }
}
