//! Platform-specific key hint labels

/// Submit shortcut display for the key hints
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Previous field shortcut display
/// - macOS: "⇧Tab"
/// - Linux/Windows: "Shift+Tab"
#[cfg(target_os = "macos")]
pub const PREV_FIELD_SHORTCUT: &str = "⇧Tab";

#[cfg(not(target_os = "macos"))]
pub const PREV_FIELD_SHORTCUT: &str = "Shift+Tab";
