//! Shared layout constants for page components

/// Padding between the screen edge and the greeting in pixels
pub const PAGE_PADDING_PX: u32 = 16;

/// Greeting row height in pixels
pub const GREETING_HEIGHT_PX: u32 = 40;

/// Maximum length of the user name shown in the greeting
pub const MAX_NAME_LEN: usize = 32;
