//! Spinner animation frames

/// Braille-style spinner frames
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Get the spinner character for a given tick value (tick/2 slows the cycle)
pub fn get_spinner(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick as usize / 2) % SPINNER_FRAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_spinner_cycles() {
        let mut seen = std::collections::HashSet::new();
        for i in 0..20 {
            seen.insert(get_spinner(i));
        }
        assert_eq!(seen.len(), SPINNER_FRAMES.len());
    }
}
