//! Construction-time validation errors.

use thiserror::Error;

/// Errors raised while constructing a query directive.
///
/// Every directive validates its payload at construction time and returns
/// one of these variants on bad input. Rendering and compilation never fail:
/// a directive that exists is a directive that renders.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidDirective {
    /// The string is not one of the fixed filter operators (`_eq`, `_nin`, ...).
    #[error("Unknown filter operator: '{0}'")]
    UnknownOperator(String),

    /// The string is not one of the fixed aggregation functions (`count`, `avgDistinct`, ...).
    #[error("Unknown aggregation function: '{0}'")]
    UnknownFunction(String),

    /// The string is not one of the supported export formats (`csv`, `json`, `xml`, `yaml`).
    #[error("Unknown export format: '{0}'")]
    UnknownExportFormat(String),

    /// The string is not one of the fixed field functions (`year`, `month`, ...).
    #[error("Unknown field function: '{0}'")]
    UnknownFieldFunction(String),

    /// A directive that targets fields was built with an empty field list.
    #[error("{directive} requires at least one field")]
    NoFields {
        /// Slot name of the offending directive (e.g. `aggregate`).
        directive: &'static str,
    },

    /// A directive was given an empty string where a field name is required.
    #[error("Empty field name in {directive}")]
    EmptyField {
        /// Slot name of the offending directive (e.g. `filter`).
        directive: &'static str,
    },
}
