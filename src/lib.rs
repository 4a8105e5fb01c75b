//! Scroll-reactive view state for hotel landing pages.
//!
//! [`core`] holds the renderer-agnostic controller: one scroll sampler and
//! the navbar threshold, reading progress, hero parallax and menu latch
//! derived from it.  [`ui`] and [`app`] put it on a terminal.

pub mod app;
pub mod config;
pub mod core;
pub mod ui;
