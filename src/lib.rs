// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! covnom: SARS-CoV-2 mutation and variant-name nomenclature
//!
//! Curates mutation notations and variant aliases into canonical records:
//! encoded changes are parsed and normalized, protein names are reduced to
//! short codes, ORF1 polyprotein positions are remapped onto the cleaved
//! non-structural proteins, and variant aliases are attributed to the
//! naming organization that issued them.
//!
//! # Example
//!
//! ```
//! use covnom::{classify, parse_encoded_with_protein, ChangeKind, Organization};
//!
//! // Parse an encoded amino-acid change
//! let parsed = parse_encoded_with_protein("S:N501Y").unwrap();
//! let change = parsed.into_value();
//! assert_eq!(change.protein, "S");
//! assert_eq!(change.kind, ChangeKind::Sub);
//! assert_eq!(change.encoded(), "S:N501Y");
//!
//! // Attribute a variant alias to its naming organization
//! assert_eq!(classify("B.1.1.7"), Some(Organization::Pango));
//! ```

pub mod batch;
pub mod change;
pub mod classify;
pub mod error;
pub mod protein;
pub mod residue;

// Re-export commonly used types
pub use change::parser::{parse_encoded, parse_encoded_with_protein, parse_parts};
pub use change::{AaChange, Change, ChangeKind};
pub use classify::{classify, classify_or, Organization};
pub use error::{CovnomError, ErrorCode, Parsed, ParseWarning};
pub use protein::orf1::{remap, remap_interval, Polyprotein};

/// Result type alias for covnom operations
pub type Result<T> = std::result::Result<T, CovnomError>;
