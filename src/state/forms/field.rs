//! Per-field state and input shaping

use super::rule::FieldKind;

/// Separator placed between phone digit groups
pub const PHONE_DELIMITER: char = '-';
/// Digits kept by phone formatting
const PHONE_MAX_DIGITS: usize = 10;

/// Mutable state of one rendered field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    /// Set after the first blur or a failed validation; enables live re-validation
    pub touched: bool,
    pub error: Option<String>,
    pub has_focus: bool,
}

impl FieldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presentation hint: focused or holding content
    pub fn is_focused(&self) -> bool {
        self.has_focus || !self.value.is_empty()
    }

    pub fn is_errored(&self) -> bool {
        self.error.is_some()
    }

    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Back to empty and untouched; focus is left alone
    pub fn reset(&mut self) {
        self.value.clear();
        self.touched = false;
        self.error = None;
    }
}

/// Shape raw input according to the field kind.
///
/// Phone input is reformatted and capped text is truncated. A choice keeps
/// only one of its options; anything else becomes empty. Plain text passes
/// through unchanged.
pub fn shape_input(kind: FieldKind, raw: &str) -> String {
    match kind {
        FieldKind::Phone => format_phone(raw),
        FieldKind::Capped(max) => truncate_chars(raw, max).to_string(),
        FieldKind::Choice(options) if options.iter().any(|o| *o == raw) => raw.to_string(),
        FieldKind::Choice(_) => String::new(),
        FieldKind::Text => raw.to_string(),
    }
}

/// Regroup the digits of `raw` as `XXX-XXX-XXXX`.
///
/// Non-digits are dropped and anything past ten digits is discarded.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_MAX_DIGITS)
        .collect();

    let mut formatted = String::with_capacity(PHONE_MAX_DIGITS + 2);
    for (i, digit) in digits.chars().enumerate() {
        if i == 3 || i == 6 {
            formatted.push(PHONE_DELIMITER);
        }
        formatted.push(digit);
    }
    formatted
}

/// Longest prefix of `s` holding at most `max` characters
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Step through a choice list; an empty value selects the first or last option
pub fn cycle_choice(options: &[&str], current: &str, forward: bool) -> String {
    if options.is_empty() {
        return String::new();
    }
    let last = options.len() - 1;
    let next = match options.iter().position(|o| *o == current) {
        None if forward => 0,
        None => last,
        Some(i) if forward => (i + 1) % options.len(),
        Some(0) => last,
        Some(i) => i - 1,
    };
    options[next].to_string()
}
