//! Platform-specific key bindings and shortcut labels

/// Ctrl+<key> submits the form from any field
pub const SUBMIT_KEY: char = 's';

/// Ctrl+<key> shows or hides the password
pub const TOGGLE_PASSWORD_KEY: char = 't';

/// Submit shortcut display for help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Password visibility shortcut display
/// - macOS terminals label the Control key with a caret
/// - Linux/Windows: "Ctrl+T"
#[cfg(target_os = "macos")]
pub const TOGGLE_PASSWORD_SHORTCUT: &str = "^T";

#[cfg(not(target_os = "macos"))]
pub const TOGGLE_PASSWORD_SHORTCUT: &str = "Ctrl+T";
