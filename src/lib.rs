pub mod cli;
pub mod command;
pub mod config;
pub mod distortion;
pub mod error;
pub mod score;
pub mod screen;
pub mod store;

pub use command::Command;
pub use config::Config;
pub use error::CommandError;
pub use store::{Document, DocumentStore};
