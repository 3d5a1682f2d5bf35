//! Error types with diagnostic codes using miette
//!
//! Transformations never fail; only construction from user-supplied values
//! and path breaking report errors.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Break Errors
// ============================================================================

/// Reasons a path could not be split
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
pub enum BreakError {
    #[error("break point does not lie on the path")]
    #[diagnostic(code(pathkern::split::not_on_path))]
    NotOnPath,

    #[error("break point coincides with an end point of the path")]
    #[diagnostic(
        code(pathkern::split::at_endpoint),
        help("breaking exactly at an end point would produce an empty piece")
    )]
    AtEndpoint,

    #[error("curve parameter {t} is outside the open range (0, 1)")]
    #[diagnostic(code(pathkern::split::parameter_out_of_range))]
    ParameterOutOfRange { t: f64 },

    #[error("only bezier curves can be broken by parameter")]
    #[diagnostic(code(pathkern::split::not_a_curve))]
    NotACurve,

    #[error("only circles and arcs can be broken by angle")]
    #[diagnostic(code(pathkern::split::not_circular))]
    NotCircular,
}

// ============================================================================
// Construction Errors
// ============================================================================

/// Errors that occur while constructing a path from derived geometry
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
pub enum ConstructError {
    #[error("three collinear points do not define a circle")]
    #[diagnostic(code(pathkern::construct::collinear))]
    Collinear,

    #[error("invalid numeric value: {0}")]
    #[diagnostic(code(pathkern::construct::numeric))]
    Numeric(#[from] NumericError),
}
