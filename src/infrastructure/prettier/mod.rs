pub mod node_engine;

pub use node_engine::PrettierNodeEngine;
