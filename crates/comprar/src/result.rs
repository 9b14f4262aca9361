//! Result and error types for Comprar.

use thiserror::Error;

/// Result type for Comprar operations
pub type ComprarResult<T> = Result<T, ComprarError>;

/// Errors that can occur in Comprar
#[derive(Debug, Error)]
pub enum ComprarError {
    /// Browser executable not found
    #[error("Browser not found. Install Chromium or set CHROMIUM_PATH")]
    BrowserNotFound,

    /// Browser launch error
    #[error("Failed to launch browser: {message}")]
    BrowserLaunch {
        /// Error message
        message: String,
    },

    /// Page-level error (evaluation, protocol, bad control value)
    #[error("Page error: {message}")]
    Page {
        /// Error message
        message: String,
    },

    /// Navigation error
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// An action targeted an element that does not exist.
    ///
    /// Raised only for actions (click, fill, select); read and visibility
    /// queries degrade to defaults instead.
    #[error("No element matches selector {selector}")]
    ElementNotFound {
        /// Selector that failed to resolve
        selector: String,
    },

    /// A named catalog lookup was used where absence is invalid
    #[error("Item with name \"{name}\" not found")]
    ItemNotFound {
        /// The name that was looked up
        name: String,
    },

    /// Index out of range for a live collection
    #[error("{collection} index {index} is out of bounds. Total items: {count}")]
    OutOfBounds {
        /// The offending index
        index: usize,
        /// Current collection length
        count: usize,
        /// Which collection was indexed
        collection: &'static str,
    },

    /// A bounded wait expired
    #[error("Timed out after {ms}ms waiting for {waited_for}")]
    Timeout {
        /// What was waited for
        waited_for: String,
        /// Timeout in milliseconds
        ms: u64,
    },

    /// Price text could not be parsed as a number
    #[error("Price text {text:?} is not a currency amount")]
    PriceFormat {
        /// The raw price text
        text: String,
    },

    /// A cached session was requested for a role that must log in fresh
    #[error("Role {role} is excluded from cached sessions and must log in fresh")]
    ExcludedRole {
        /// The role name
        role: String,
    },

    /// Session store error
    #[error("Session error: {message}")]
    Session {
        /// Error message
        message: String,
    },

    /// Screenshot error
    #[error("Screenshot failed: {message}")]
    Screenshot {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = ComprarError::OutOfBounds {
            index: 7,
            count: 6,
            collection: "Inventory",
        };
        assert_eq!(
            err.to_string(),
            "Inventory index 7 is out of bounds. Total items: 6"
        );
    }

    #[test]
    fn test_timeout_message() {
        let err = ComprarError::Timeout {
            waited_for: ".bm-menu-wrap to be visible".to_string(),
            ms: 5000,
        };
        assert!(err.to_string().contains("5000ms"));
        assert!(err.to_string().contains(".bm-menu-wrap"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ComprarError = io.into();
        assert!(matches!(err, ComprarError::Io(_)));
    }
}
