//! Configuration loading and management for the surcharge engine.
//!
//! This module provides functionality to load a rate plan and its public
//! holiday calendar from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use surcharge_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Saturday premium: {:?}", config.plan().saturday);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::SurchargeConfig;
