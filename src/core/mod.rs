//! Core view-state logic – scroll sampling, derived scroll state, the menu
//! latch, entrance reveals and page content.
//!
//! Nothing in this module depends on any TUI or rendering crate, so every
//! derivation is unit-testable without a live terminal.

pub mod booking;
pub mod content;
pub mod glide;
pub mod menu;
pub mod parallax;
pub mod progress;
pub mod reveal;
pub mod scroll;
pub mod threshold;
