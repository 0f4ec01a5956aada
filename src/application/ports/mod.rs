pub mod format_engine;
pub mod source_files;
