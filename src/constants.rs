//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and fixed default file names.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Shelfman Label";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "shelfman";

/// Default output file for the rendered label image.
pub const DEFAULT_OUTPUT_FILE: &str = "shelfman_guid_qr.png";

/// External printer tool invoked for `--info` and `--print`.
pub const PRINTER_COMMAND: &str = "ptouch-print";
