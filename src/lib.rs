pub mod account;
pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod console;
pub mod date;
pub mod error;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod storage;
pub mod store;
pub mod theme;
pub mod types;

#[cfg(test)]
pub mod testing;

pub use console::Console;
pub use error::ClientError;
