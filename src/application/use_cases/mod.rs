pub mod diffcheck;
