pub mod config;
pub mod connect;
