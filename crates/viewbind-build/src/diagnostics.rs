use std::fmt::{self, Display};

///
/// Level
///

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Level {
    Warning,
    Error,
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

///
/// Diagnostic
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)
    }
}

///
/// Diagnostics
///
/// Messages reported during one generation pass, in the order raised.
/// Every message is also sent to the `tracing` subscriber, if any.
///

#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!(target: "viewbind::build", "{message}");

        self.entries.push(Diagnostic {
            level: Level::Error,
            message,
        });
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(target: "viewbind::build", "{message}");

        self.entries.push(Diagnostic {
            level: Level::Warning,
            message,
        });
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|d| d.level == Level::Error)
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_counted_apart_from_warnings() {
        let mut diags = Diagnostics::new();
        diags.warning("unit skipped");
        assert!(!diags.has_errors());

        diags.error("field 'title' is not a view");
        assert!(diags.has_errors());
        assert_eq!(diags.len(), 2);
        assert_eq!(diags.error_count(), 1);

        let lines: Vec<String> = diags.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "warning: unit skipped".to_string(),
                "error: field 'title' is not a view".to_string()
            ]
        );
    }
}
