pub mod cli;
pub mod config;
pub mod pipeline;
pub mod writer;
