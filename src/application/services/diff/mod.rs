pub mod render;
pub mod text_diff;

pub use render::{
    generate_colored_diff, generate_plain_diff, generate_plain_stats, generate_stats,
};
pub use text_diff::{generate_diff, generate_diff_default};
