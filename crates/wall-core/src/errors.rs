//! Structured error types shared across the wall planner crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`WallError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (dimensions, seeds, identifiers).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for wall planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum WallError {
    /// Malformed dimensional parameters. Fix the input; never retried internally.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(ErrorInfo),
    /// The wild-bond search exhausted its retry budget for the given seed.
    #[error("bond generation failed: {0}")]
    BondGenerationFailed(ErrorInfo),
    /// The stride grid cannot cover the wall or a brick falls outside it.
    #[error("stride overflow: {0}")]
    StrideOverflow(ErrorInfo),
    /// The support graph contains a cycle; upstream data is corrupt.
    #[error("unsatisfiable order: {0}")]
    UnsatisfiableOrder(ErrorInfo),
    /// Request or report (de)serialization errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl WallError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            WallError::InvalidDimensions(info)
            | WallError::BondGenerationFailed(info)
            | WallError::StrideOverflow(info)
            | WallError::UnsatisfiableOrder(info)
            | WallError::Serde(info) => info,
        }
    }

    /// Returns the seed recorded by a failed wild-bond search.
    pub fn failed_seed(&self) -> Option<u64> {
        match self {
            WallError::BondGenerationFailed(info) => info.context.get("seed")?.parse().ok(),
            _ => None,
        }
    }

    /// Whether the caller may retry the request with a different seed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, WallError::BondGenerationFailed(_))
    }
}
