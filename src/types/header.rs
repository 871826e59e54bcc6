//! Framing constants

/// Suggested version byte for the opt-in versioned framing
pub const FORMAT_VERSION: u8 = 1;

/// Size of the version prefix when framing is enabled
pub const VERSION_PREFIX_SIZE: usize = 1;
