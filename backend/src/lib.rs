pub mod config;
pub mod error;
pub mod events;
pub mod limiter;
pub mod scene;
pub mod system;
