pub mod models;
pub mod data;
pub mod services;
pub mod cli;
pub mod utils;

pub use anyhow::{Error, Result};
