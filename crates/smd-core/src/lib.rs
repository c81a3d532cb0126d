pub mod config;
pub mod logging;

// Core modules
pub mod history;
pub mod lookup;
pub mod media;
pub mod platform;
pub mod session;
