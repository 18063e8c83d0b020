#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod document;
pub mod editor;
mod error;
pub mod graph;
pub mod service;

#[doc(hidden)]
pub mod prelude;

pub use error::{EditorError, EditorResult};

/// Tracing target for editor operations.
pub const TRACING_TARGET: &str = "flowdeck_editor";
