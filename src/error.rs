use crate::catalog::Subsystem;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read log file: {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scope: {0} (expected one of kvdb, dmthin, nfs, lic, install, all)")]
    InvalidScope(String),

    #[error("Invalid signature pattern for subsystem {subsystem}")]
    Catalog {
        subsystem: Subsystem,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to start worker pool")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display_io() {
        let err = ScanError::Io {
            path: "/var/log/p.log".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Failed to read log file: /var/log/p.log");
        assert_eq!(err.source().unwrap().to_string(), "not found");
    }

    #[test]
    fn test_error_display_invalid_scope() {
        let err = ScanError::InvalidScope("bogus".to_string());
        assert!(err.to_string().starts_with("Invalid scope: bogus"));
    }

    #[test]
    fn test_error_display_catalog() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let err = ScanError::Catalog {
            subsystem: Subsystem::Dmthin,
            source,
        };
        assert_eq!(
            err.to_string(),
            "Invalid signature pattern for subsystem dmthin"
        );
        assert!(err.source().is_some());
    }
}
