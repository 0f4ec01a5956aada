pub mod fs;
pub mod prettier;
