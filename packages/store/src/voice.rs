//! Spoken navigation: map a speech-recognition transcript to a route path.

/// (phrase, path). Checked in order; the first phrase contained in the
/// transcript wins, so longer phrases come before their prefixes.
pub const DEFAULT_COMMANDS: &[(&str, &str)] = &[
    ("virtual makeup", "/makeup"),
    ("try makeup", "/makeup"),
    ("my dashboard", "/dashboard"),
    ("dashboard", "/dashboard"),
    ("wishlist", "/wishlist"),
    ("workshop", "/workshops"),
    ("service", "/services"),
    ("book", "/services"),
    ("offer", "/offers"),
    ("contact", "/contact"),
    ("login", "/login"),
    ("sign in", "/login"),
    ("home", "/"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct VoiceCommands {
    commands: Vec<(String, String)>,
}

impl Default for VoiceCommands {
    fn default() -> Self {
        Self::new(DEFAULT_COMMANDS)
    }
}

impl VoiceCommands {
    pub fn new(table: &[(&str, &str)]) -> Self {
        Self {
            commands: table
                .iter()
                .map(|(phrase, path)| (phrase.to_lowercase(), path.to_string()))
                .collect(),
        }
    }

    /// Substring match on the lowercased transcript.
    pub fn resolve(&self, transcript: &str) -> Option<&str> {
        let heard = transcript.trim().to_lowercase();
        if heard.is_empty() {
            return None;
        }
        self.commands
            .iter()
            .find(|(phrase, _)| heard.contains(phrase.as_str()))
            .map(|(_, path)| path.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_case_insensitively() {
        let commands = VoiceCommands::default();
        assert_eq!(commands.resolve("Open my WISHLIST please"), Some("/wishlist"));
        assert_eq!(commands.resolve("show workshops"), Some("/workshops"));
        assert_eq!(commands.resolve("I want to book a makeup artist"), Some("/services"));
    }

    #[test]
    fn earlier_phrases_win() {
        let commands = VoiceCommands::default();
        assert_eq!(commands.resolve("try makeup on my photo"), Some("/makeup"));
    }

    #[test]
    fn unknown_or_empty_transcript() {
        let commands = VoiceCommands::default();
        assert_eq!(commands.resolve("what's the weather"), None);
        assert_eq!(commands.resolve("   "), None);
    }
}
