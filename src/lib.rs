//! Library entry for postboard exposing the runtime and core logic for
//! integration tests.

pub mod app;
pub mod args;
pub mod config;
pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod theme;
pub mod ui;
