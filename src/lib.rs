//! Reports the changes Prettier would make to a set of files without writing
//! them: a unified diff per file plus a summary.

pub mod application;
pub mod bootstrap;
pub mod infrastructure;
pub mod presentation;

pub use application::dto::diff::{DiffLineKind, DiffResult, DiffStats};
pub use application::dto::options::FormatOptions;
pub use application::services::diff::{
    generate_colored_diff, generate_diff, generate_diff_default, generate_plain_diff,
    generate_plain_stats, generate_stats,
};
