#![doc = include_str!("../README.md")]

mod app;
mod config;
mod error;
mod handler;
mod payload;
mod status;
mod transport;

#[cfg(all(feature = "cli", not(target_arch = "wasm32")))]
pub mod cli;

pub use app::*;
pub use config::*;
pub use error::*;
pub use handler::*;
pub use payload::*;
pub use status::*;
pub use transport::*;
