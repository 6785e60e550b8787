//! Document model types for parsed markdown trees.
//!
//! This module defines the tree handed over by an upstream markdown parser
//! and consumed read-only by the renderers. The variant set is closed:
//! every renderer matches on it exhaustively.

mod node;
mod table;

pub use node::{Node, NodeKind};
pub use table::{CellAlign, CellContext};
