// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;
pub mod csv;
pub mod error;
pub mod importer;
pub mod resolver;
pub mod store;
