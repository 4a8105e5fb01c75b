//! Application orchestration: page state, input events, and input handling.

pub mod event;
pub mod handler;
pub mod state;
