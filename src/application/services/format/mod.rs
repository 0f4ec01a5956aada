pub mod format_adapter;

pub use format_adapter::FormatAdapter;
