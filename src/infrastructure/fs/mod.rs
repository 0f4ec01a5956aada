pub mod local_source_files;

pub use local_source_files::LocalSourceFiles;
