//! Arena representation of an annotated syntax tree.
//!
//! The compiler frontend hands the backend its annotated AST as a JSON document (the
//! `annotated_ast_dict` output). The backend only needs node identity and nesting, so the document
//! is lowered into a flat arena: every JSON object becomes an [`AstNode`], arrays are flattened into
//! the children of the enclosing object and scalars are dropped.

use crate::index::*;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstNode {
    pub node_id: Option<NodeId>,
    /// The `ast_type` tag, when the node declares one.
    pub kind: Option<String>,
    pub children: Vec<AstNodeIdx>,
}

impl AstNode {
    pub fn new(node_id: Option<NodeId>, kind: Option<&str>) -> Self {
        Self { node_id, kind: kind.map(str::to_owned), children: Vec::new() }
    }
}

/// Nodes are stored contiguously; the root, if any, is always at index 0.
#[derive(Debug, Clone, Default)]
pub struct Ast {
    pub nodes: IndexVec<AstNodeIdx, AstNode>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<AstNodeIdx> {
        (!self.nodes.is_empty()).then(|| AstNodeIdx::new(0))
    }

    /// Adds a node, linking it as the last child of `parent`.
    pub fn push(&mut self, parent: Option<AstNodeIdx>, node: AstNode) -> AstNodeIdx {
        let idx = self.nodes.push(node);
        if let Some(parent) = parent {
            self.nodes[parent].children.push(idx);
        }
        idx
    }

    /// Lowers a JSON AST into an arena. Nodes are allocated in pre-order, visiting object fields
    /// in the order the document lists them.
    pub fn from_json(value: &Value) -> Self {
        let mut ast = Ast::new();
        // A bare array at the top level still needs a single root to hang its elements off.
        let root_children = match value {
            Value::Object(_) => None,
            Value::Array(items) => {
                let root = ast.push(None, AstNode::new(None, None));
                Some((root, items))
            }
            _ => return ast,
        };

        let mut stack: Vec<(&Value, Option<AstNodeIdx>)> = match root_children {
            None => vec![(value, None)],
            Some((root, items)) => items.iter().rev().map(|item| (item, Some(root))).collect(),
        };

        while let Some((value, parent)) = stack.pop() {
            match value {
                Value::Object(fields) => {
                    let node_id = fields.get("node_id").and_then(Value::as_u64).and_then(NodeId::try_new);
                    let kind = fields.get("ast_type").and_then(Value::as_str);
                    let idx = ast.push(parent, AstNode::new(node_id, kind));
                    stack.extend(fields.values().rev().map(|child| (child, Some(idx))));
                }
                Value::Array(items) => {
                    stack.extend(items.iter().rev().map(|item| (item, parent)));
                }
                _ => {}
            }
        }

        tracing::debug!(nodes = ast.nodes.len(), "lowered JSON AST");
        ast
    }
}
