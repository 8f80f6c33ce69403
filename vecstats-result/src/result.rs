use crate::error::Error;

/// Result type alias used throughout vecstats.
///
/// This is a type alias for `std::result::Result<T, Error>`. Every fallible
/// fold, finalize and driver operation returns this type.
pub type Result<T> = std::result::Result<T, Error>;
