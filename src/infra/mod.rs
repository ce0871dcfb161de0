pub mod app;
pub mod config;
pub mod credentials;
pub mod db;
pub mod setup;
