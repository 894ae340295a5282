pub mod cli;
pub mod runner;

// re-export the container crate for downstream users of the CLI package
pub use dynamic_array;
