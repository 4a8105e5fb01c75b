//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! This layer takes the *core* view-state and turns it into cells on the
//! terminal.  Nothing here subscribes to the scroll sampler.

pub mod booking_popup;
pub mod document;
pub mod hero;
pub mod layout;
pub mod menu_overlay;
pub mod navbar;
pub mod page_view;
pub mod progress_bar;
pub mod text;
pub mod theme;
