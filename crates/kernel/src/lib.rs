//! Roster user directory kernel.
//!
//! This library builds normalized query specifications from
//! loosely-structured request maps and runs the thin user services on top
//! of them. Storage access goes through the repository contracts in
//! [`repository`]; the HTTP edge and the storage adapter are separate
//! services that compose this crate.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod query;
pub mod repository;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
