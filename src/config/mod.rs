pub mod args;
pub mod models;

pub use args::Cli;
pub use models::Config;
