// ---------------------------------------------------------------------------
// ReportError: failures while exporting the scenario comparison
// ---------------------------------------------------------------------------

use std::fmt;

#[derive(Debug)]
pub enum ReportError {
    /// The scenario list is empty.
    NoScenarios,
    /// Writing the file failed.
    Io(std::io::Error),
    /// The browser refused to start the download.
    Download(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::NoScenarios => write!(f, "No scenarios saved to export."),
            ReportError::Io(e) => write!(f, "Could not write report: {e}"),
            ReportError::Download(msg) => write!(f, "Download failed: {msg}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(e: std::io::Error) -> Self {
        ReportError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_no_scenarios() {
        assert_eq!(
            ReportError::NoScenarios.to_string(),
            "No scenarios saved to export."
        );
    }

    #[test]
    fn test_display_io() {
        let err = ReportError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        ));
        let msg = format!("{err}");
        assert!(msg.contains("Could not write report"), "got: {msg}");
        assert!(msg.contains("read-only"), "got: {msg}");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display_download() {
        let err = ReportError::Download("blocked".to_string());
        assert_eq!(err.to_string(), "Download failed: blocked");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_from_io() {
        let err: ReportError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
