//! System clipboard access for the copy actions
//!
//! Thin wrapper over `arboard`. No coupling to UI or application state;
//! callers turn failures into a status line.

/// Copy text to the OS clipboard.
pub fn copy_text(text: &str) -> Result<(), String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
    clipboard.set_text(text.to_string()).map_err(|e| e.to_string())
}

/// Read text from the OS clipboard, if any.
pub fn paste_text() -> Result<String, String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
    clipboard.get_text().map_err(|e| e.to_string())
}
