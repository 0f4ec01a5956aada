pub mod diff;
pub mod format;
