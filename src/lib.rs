//! Serie A relay — reshapes football-data.org responses for clients and
//! forecasts match outcomes from standings and recent form.
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod types;
pub mod upstream;
pub mod relay;
pub mod forecast;
pub mod server;
