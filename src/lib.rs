// HTTP Server modules
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

// Ambient setup
pub mod config;
pub mod logging;

// LLM settings core
pub mod settings;
