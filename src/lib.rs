pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod db;
pub mod graphql;
pub mod services;
