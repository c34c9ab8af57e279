//! Crate-wide error and result types.

use derive_more::{Display, Error};

/// Errors surfaced at the hardware transmit boundary.
///
/// The rendering core itself never fails: off-canvas pixel writes, unknown
/// characters, and malformed hex colors all fall back silently. Those
/// fallbacks are part of the display contract, not error conditions.
#[derive(Debug, Display, Error)]
#[non_exhaustive]
pub enum Error {
    /// The LED strip writer rejected a frame transmit.
    #[display("LED strip transmit failed")]
    StripWrite,
}

/// Result type used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
