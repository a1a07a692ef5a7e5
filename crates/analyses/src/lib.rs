mod ast_map;
mod node_index;

pub use ast_map::{AstMapReport, UnresolvedReason, UnresolvedRef, validate_ast_map};
pub use node_index::NodeIdIndex;
