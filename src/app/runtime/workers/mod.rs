//! Background workers: network calls and the UI tick.

pub mod auxiliary;
pub mod comments;
pub mod posts;
