use ctk_data::{Ast, AstNode, AstNodeIdx, NodeId};
use std::collections::HashMap;

/// Lookup from [`NodeId`] to the node that declares it.
#[derive(Debug, Clone)]
pub struct NodeIdIndex<'ast> {
    ast: &'ast Ast,
    by_id: HashMap<NodeId, AstNodeIdx>,
}

impl<'ast> NodeIdIndex<'ast> {
    /// Walks the whole tree from its root. When several nodes declare the same id, the one visited
    /// last in pre-order is kept.
    pub fn build(ast: &'ast Ast) -> Self {
        let mut by_id = HashMap::new();
        let mut duplicates = 0usize;
        let mut stack: Vec<AstNodeIdx> = ast.root().into_iter().collect();

        while let Some(idx) = stack.pop() {
            let node = &ast.nodes[idx];
            if let Some(id) = node.node_id {
                if by_id.insert(id, idx).is_some() {
                    duplicates += 1;
                }
            }
            stack.extend(node.children.iter().rev().copied());
        }

        tracing::debug!(ids = by_id.len(), duplicates, "built node id index");
        Self { ast, by_id }
    }

    pub fn get(&self, id: NodeId) -> Option<&'ast AstNode> {
        self.by_id.get(&id).map(|&idx| &self.ast.nodes[idx])
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
