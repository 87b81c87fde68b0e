//! Schema module - Recording documents and derived catalog types.

mod recording;

pub use recording::*;
