//! Turbina chat API: library crate for the HTTP transport.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `tb-e2e-tests`) can access `AppState`, `build_router` and the
//! PostgreSQL conversation store.

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod state;
