//! Tracking of popup trees attached to windows and layer surfaces.
//!
//! A [`tree::Popup`] root is created for every window or layer surface that
//! can show popups. The root listens for new popups and builds the tree as
//! the client creates nested popups. Every node follows its protocol object
//! through map, unmap, commit, reposition and destroy, keeps its position in
//! global coordinates, reports damage to the renderer and answers
//! hit-testing queries.

#![allow(clippy::len_zero, clippy::new_ret_no_self)]

#[macro_use]
mod macros;

pub mod config;
pub mod ifs;
pub mod logger;
pub mod output;
pub mod rect;
pub mod scale;
pub mod state;
pub mod tree;
pub mod utils;
