//! Configuration, credentials and the shared data model

pub mod config;
pub mod credentials;
pub mod models;
pub mod state;
