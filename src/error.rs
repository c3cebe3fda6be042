//! Error types for covnom
//!
//! All errors are value-level and recoverable: a malformed record is reported
//! to the caller and never aborts a batch. Warnings that accompany an
//! otherwise valid record travel with it in [`Parsed`] instead of being
//! logged from inside the core.

use std::fmt;
use thiserror::Error;

/// Error codes for categorizing errors
///
/// These codes can be used for programmatic error handling
/// and for documentation lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // Parse errors (E1xxx)
    /// Reference field fails its grammar
    InvalidReference = 1001,
    /// Position field fails its grammar
    InvalidPosition = 1002,
    /// Alternative field fails its grammar
    InvalidAlternative = 1003,
    /// Encoded change string does not split into ref/pos/alt
    InvalidChange = 1004,
    /// Encoded amino-acid change has no protein separator
    MissingProtein = 1005,

    // Protein errors (E2xxx)
    /// Protein name matches none of the translation rules
    UnresolvedProteinName = 2001,
}

impl ErrorCode {
    /// Get the error code as a string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("E{:04}", *self as u16)
    }

    /// Get a brief description of this error code
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidReference => "invalid reference field",
            ErrorCode::InvalidPosition => "invalid position field",
            ErrorCode::InvalidAlternative => "invalid alternative field",
            ErrorCode::InvalidChange => "invalid encoded change",
            ErrorCode::MissingProtein => "missing protein separator",
            ErrorCode::UnresolvedProteinName => "unresolved protein name",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for covnom operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CovnomError {
    /// Reference field of a change fails its grammar
    #[error("reference {reference:?} of change {input} is not recognized; recognized inputs match {pattern}")]
    InvalidReference {
        input: String,
        reference: String,
        pattern: &'static str,
    },

    /// Position field of a change fails its grammar
    #[error("position {position:?} of change {input} is not recognized; recognized inputs match {pattern}")]
    InvalidPosition {
        input: String,
        position: String,
        pattern: &'static str,
    },

    /// Alternative field of a change fails its grammar
    #[error("alternative {alternative:?} of change {input} is not recognized; recognized inputs match {pattern}")]
    InvalidAlternative {
        input: String,
        alternative: String,
        pattern: &'static str,
    },

    /// Encoded change string does not split into ref/pos/alt
    #[error("change {input:?} is not recognized as a valid change; recognized changes match {pattern}")]
    InvalidChange {
        input: String,
        pattern: &'static str,
    },

    /// Encoded amino-acid change has no `:` separating the protein name
    #[error("change {input:?} has no ':' separating the protein name from the change")]
    MissingProtein { input: String },

    /// Protein name matches none of the known translation rules
    #[error("protein name {name:?} does not resolve to a known short protein code")]
    UnresolvedProteinName { name: String },
}

impl CovnomError {
    /// Get the error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            CovnomError::InvalidReference { .. } => ErrorCode::InvalidReference,
            CovnomError::InvalidPosition { .. } => ErrorCode::InvalidPosition,
            CovnomError::InvalidAlternative { .. } => ErrorCode::InvalidAlternative,
            CovnomError::InvalidChange { .. } => ErrorCode::InvalidChange,
            CovnomError::MissingProtein { .. } => ErrorCode::MissingProtein,
            CovnomError::UnresolvedProteinName { .. } => ErrorCode::UnresolvedProteinName,
        }
    }
}

/// Non-fatal conditions reported alongside an otherwise valid record.
///
/// The caller decides whether to keep or drop the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// An ORF1ab/ORF1a/ORF1b position outside every known NSP segment.
    /// The record keeps the polyprotein name and the original position.
    UnresolvedProteinSegment { protein: String, position: u32 },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::UnresolvedProteinSegment { protein, position } => write!(
                f,
                "change with protein {} and position {} doesn't resolve to any NSP",
                protein, position
            ),
        }
    }
}

/// A parsed value together with the warnings produced while parsing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    /// The parsed value.
    pub value: T,
    /// Warnings produced while parsing; empty for a clean parse.
    pub warnings: Vec<ParseWarning>,
}

impl<T> Parsed<T> {
    /// Wrap a value parsed without warnings.
    pub fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Wrap a value with the warnings produced while parsing it.
    pub fn with_warnings(value: T, warnings: Vec<ParseWarning>) -> Self {
        Self { value, warnings }
    }

    /// Check whether any warnings were produced.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Discard the warnings and keep the value.
    pub fn into_value(self) -> T {
        self.value
    }
}
