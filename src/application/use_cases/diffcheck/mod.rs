pub mod check_file_diff;
pub mod check_multiple_files_diff;
pub mod handle_diff_check;
pub mod load_source_files;
pub mod output_diff_results;

#[cfg(test)]
mod test_support;
