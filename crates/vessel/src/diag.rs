//! Advisory stderr diagnostics.
//!
//! Misuse and exhaustion are reported as one-line stderr messages tagged
//! `[!]` (warning) or `[x]` (error), naming the operation and the caller's
//! file/line. Reporting never changes an operation's outcome: callers rely
//! on the returned `Result` (or the panic of checked access), not on this
//! channel.

use std::fmt;
use std::panic::Location;

/// Message severity. Warnings flag tolerated-but-suspicious usage (such as
/// re-initializing an active container); errors flag rejected operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Severity {
    Warning,
    Error,
}

impl Severity {
    fn marker(self) -> &'static str {
        match self {
            Self::Warning => "[!] warning",
            Self::Error => "[x] error",
        }
    }
}

/// Report a rejected operation at the caller's site.
#[track_caller]
pub(crate) fn error(op: &str, detail: impl fmt::Display) {
    emit(Severity::Error, op, Location::caller(), &detail);
}

/// Report tolerated-but-suspicious usage at the caller's site.
#[track_caller]
pub(crate) fn warning(op: &str, detail: impl fmt::Display) {
    emit(Severity::Warning, op, Location::caller(), &detail);
}

fn emit(severity: Severity, op: &str, site: &Location<'_>, detail: &dyn fmt::Display) {
    eprintln!("{}", render(severity, op, site, detail));
}

/// Render one diagnostic line. Kept pure so tests can pin the format.
fn render(severity: Severity, op: &str, site: &Location<'_>, detail: &dyn fmt::Display) -> String {
    format!(
        "vessel: {}: '{}' at {}:{}: {}",
        severity.marker(),
        op,
        site.file(),
        site.line(),
        detail
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_error_carries_marker_operation_and_site() {
        let site = Location::caller();
        let line = render(Severity::Error, "push_back", site, &"container is empty");
        assert!(line.starts_with("vessel: [x] error: 'push_back' at "));
        assert!(line.ends_with(": container is empty"));
        assert!(line.contains("diag.rs"));
    }

    #[test]
    fn warning_marker_is_distinct_from_error() {
        let site = Location::caller();
        let line = render(Severity::Warning, "init", site, &"container already initialized");
        assert!(line.contains("[!] warning"));
        assert!(!line.contains("[x]"));
    }
}
