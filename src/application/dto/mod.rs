pub mod diff;
pub mod options;
