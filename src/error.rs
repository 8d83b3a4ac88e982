//! Error types for the animation demo controller.

use thiserror::Error;

/// Failures reported by an element tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    /// Class token was empty or contained whitespace
    #[error("Invalid class token '{token}'")]
    InvalidToken {
        /// The rejected token
        token: String,
    },

    /// The browser threw while performing a DOM call
    #[error("DOM operation failed: {message}")]
    Dom {
        /// Stringified exception
        message: String,
    },
}

impl PageError {
    /// Create a DOM error from any displayable message.
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom {
            message: message.into(),
        }
    }

    /// Reject tokens the class list would refuse.
    pub fn check_token(token: &str) -> Result<(), Self> {
        if token.is_empty() || token.chars().any(char::is_whitespace) {
            Err(Self::InvalidToken {
                token: token.to_string(),
            })
        } else {
            Ok(())
        }
    }
}

/// Errors returned by controller operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DemoError {
    /// A looked-up element is not on the page
    #[error("Element not found: {selector}")]
    MissingElement {
        /// Selector or id that matched nothing
        selector: String,
    },

    /// The element tree rejected an operation
    #[error(transparent)]
    Page(#[from] PageError),
}

impl DemoError {
    /// Create a missing element error.
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_rules() {
        assert!(PageError::check_token("bounce").is_ok());
        assert!(PageError::check_token("").is_err());
        assert!(PageError::check_token("two words").is_err());
    }

    #[test]
    fn test_missing_element_message() {
        let err = DemoError::missing("#card-9 .animation-box");
        assert_eq!(err.to_string(), "Element not found: #card-9 .animation-box");
    }
}
