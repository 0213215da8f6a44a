pub mod compute;
pub mod config;
pub mod constants;
pub mod display;
pub mod entities;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod scheduler;
pub mod surface;
