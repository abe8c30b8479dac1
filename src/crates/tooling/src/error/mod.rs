//! Error chain helpers
//!
//! Binaries report failures by walking `source()` so that the user sees every
//! layer (e.g. "failed to read plan" → "No such file or directory").

use std::error::Error as StdError;

/// Format an error chain as a multi-line string
///
/// ```rust
/// use tooling::error::format_error_chain;
///
/// let err = std::io::Error::new(std::io::ErrorKind::NotFound, "plan.json missing");
/// assert_eq!(format_error_chain(&err), "Error: plan.json missing");
/// ```
pub fn format_error_chain(error: &dyn StdError) -> String {
    let mut out = format!("Error: {}", error);
    let mut depth = 1;
    let mut current = error.source();

    while let Some(source) = current {
        out.push_str(&format!("\n{:indent$}Caused by: {}", "", source, indent = depth * 2));
        current = source.source();
        depth += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToolingError;
    use std::fmt;

    #[derive(Debug)]
    struct Wrapped {
        message: &'static str,
        source: Box<dyn StdError + 'static>,
    }

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message)
        }
    }

    impl StdError for Wrapped {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(self.source.as_ref())
        }
    }

    #[test]
    fn test_format_error_chain() {
        let err = Wrapped {
            message: "failed to start server",
            source: Box::new(Wrapped {
                message: "failed to read config",
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "access denied",
                )),
            }),
        };
        let formatted = format_error_chain(&err);

        assert_eq!(
            formatted,
            "Error: failed to start server\n  Caused by: failed to read config\n    Caused by: access denied"
        );
    }

    #[test]
    fn test_single_error_chain() {
        let err = ToolingError::Logging("already set".to_string());
        assert_eq!(format_error_chain(&err), "Error: Logging setup failed: already set");
    }
}
