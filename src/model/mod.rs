//! Form/session state for the visualizer, decoupled from rendering.
//!
//! The page component owns a [`GraphForm`] inside a signal and forwards DOM
//! events to it; nothing in here touches the DOM, so the whole model is
//! testable natively.

mod error;
mod form;

pub use error::EdgeError;
pub use form::{Edge, GraphForm};
