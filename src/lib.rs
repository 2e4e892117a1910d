//! Support library for the GeoView chart widget.
//!
//! Provides schema-based validation of chart data and options inputs
//! ([`ChartValidator`]), theme-driven sx style tables ([`chart_style`]), and
//! small color/numeric helpers used by the widget's slider and palette
//! handling ([`utils`]).
//!
//! Validation never panics and never returns an error: any input, however
//! malformed, is turned into a [`ValidatorResult`] the caller can surface
//! inline.

pub mod chart_style;
pub mod utils;
pub mod validator;

pub use chart_style::{ChartTheme, get_sx_classes};
pub use validator::{ChartValidator, ValidatorResult};
