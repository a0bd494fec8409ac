pub mod config;
pub mod database;
pub mod errors;
pub mod schemas;
pub mod server;
pub mod services;
