//! File formats for HAL command streams.
//!
//! Provides the textual assembly listing used to write command sequences by
//! hand and the binary word file that holds encoded wire words. Both sit on
//! top of the codec in `qhal_common` and add nothing to its semantics.

/// Word-file reading and writing.
///
/// Word files hold raw 64-bit wire words back to back in little-endian byte
/// order. Helpers decode a whole stream and point at the first word that
/// does not decode.
pub mod loader;

/// Parser and printer for the assembly listing.
///
/// Turns lines such as `CNOT q2, q5` into commands and back, reporting the
/// offending line number when a listing is malformed.
pub mod parser;
