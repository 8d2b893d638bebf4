use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

/// Narrower terminals fall back to unconstrained tables.
const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

impl UiPrefs {
    /// Derive preferences from the flags and the terminal environment.
    fn resolve(flags: &GlobalFlags, stdout_is_tty: bool, no_color: bool, columns: Option<&str>) -> Self {
        let table_color =
            stdout_is_tty && flags.format == OutputFormat::Table && !flags.quiet && !no_color;
        let term_width = columns
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|width| *width >= MIN_TERM_WIDTH);
        Self {
            table_color,
            term_width,
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let columns = std::env::var("COLUMNS").ok();
    let prefs = UiPrefs::resolve(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        columns.as_deref(),
    );
    let _ = UI_PREFS.set(prefs);
}

/// Preferences set by [`init`], or plain output when it never ran.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(format: OutputFormat, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet,
            verbose: false,
            db: None,
        }
    }

    #[test]
    fn color_only_for_interactive_tables() {
        let table = flags(OutputFormat::Table, false);
        assert!(UiPrefs::resolve(&table, true, false, None).table_color);
        assert!(!UiPrefs::resolve(&table, false, false, None).table_color);
        assert!(!UiPrefs::resolve(&table, true, true, None).table_color);
        assert!(!UiPrefs::resolve(&flags(OutputFormat::Json, false), true, false, None).table_color);
        assert!(!UiPrefs::resolve(&flags(OutputFormat::Table, true), true, false, None).table_color);
    }

    #[test]
    fn narrow_or_garbage_columns_are_ignored() {
        let table = flags(OutputFormat::Table, false);
        assert_eq!(UiPrefs::resolve(&table, false, false, Some("120")).term_width, Some(120));
        assert_eq!(UiPrefs::resolve(&table, false, false, Some("20")).term_width, None);
        assert_eq!(UiPrefs::resolve(&table, false, false, Some("wide")).term_width, None);
    }
}
