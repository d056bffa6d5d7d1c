use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Per-person rankings and monthly activity charts from an email metadata CSV
#[derive(Parser, Debug, Clone)]
#[command(
    name = "mail-activity",
    about = "Per-person rankings and monthly activity charts from an email metadata CSV",
    version
)]
pub struct Settings {
    /// Path to the input CSV export
    /// (columns: timestamp, message id, sender, recipients, topic, mode)
    pub input: PathBuf,
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_path() {
        let settings = Settings::try_parse_from(["mail-activity", "emails.csv"]).unwrap();
        assert_eq!(settings.input, PathBuf::from("emails.csv"));
    }

    #[test]
    fn test_input_path_is_required() {
        assert!(Settings::try_parse_from(["mail-activity"]).is_err());
    }

    #[test]
    fn test_rejects_extra_positional_arguments() {
        assert!(Settings::try_parse_from(["mail-activity", "a.csv", "b.csv"]).is_err());
    }
}
