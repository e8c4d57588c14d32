// src/graph.rs
//! Adjacency-set graphs over package import paths.

use rustc_hash::{FxHashMap, FxHashSet};

/// An import dependency graph, either forward or reverse.
///
/// Each node (a package import path) maps to the set of its successors.
/// In a forward graph these are the imported packages; in a reverse graph
/// they are the importing packages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    edges: FxHashMap<String, FxHashSet<String>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_edge(&mut self, from: &str, to: &str) {
        if let Some(succs) = self.edges.get_mut(from) {
            succs.insert(to.to_string());
            return;
        }
        let mut succs = FxHashSet::default();
        succs.insert(to.to_string());
        self.edges.insert(from.to_string(), succs);
    }

    /// Direct successors of `node`, if it has any outgoing edge.
    pub fn successors(&self, node: &str) -> Option<&FxHashSet<String>> {
        self.edges.get(node)
    }

    /// Successors of `node` in lexical order.
    pub fn sorted_successors(&self, node: &str) -> Vec<&str> {
        let mut succs: Vec<&str> = self
            .successors(node)
            .map(|s| s.iter().map(String::as_str).collect())
            .unwrap_or_default();
        succs.sort_unstable();
        succs
    }

    /// Nodes with at least one outgoing edge.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    pub fn contains(&self, node: &str) -> bool {
        self.edges.contains_key(node)
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges.get(from).map_or(false, |s| s.contains(to))
    }

    /// Number of nodes with outgoing edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(FxHashSet::len).sum()
    }

    /// All nodes reachable from any of `roots` by following edges forwards,
    /// the roots included: the reflexive transitive closure.
    pub fn search<I, S>(&self, roots: I) -> FxHashSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut stack: Vec<String> = Vec::new();
        for root in roots {
            let root = root.as_ref();
            if seen.insert(root.to_string()) {
                stack.push(root.to_string());
            }
        }
        while let Some(node) = stack.pop() {
            if let Some(succs) = self.edges.get(&node) {
                for succ in succs {
                    if seen.insert(succ.clone()) {
                        stack.push(succ.clone());
                    }
                }
            }
        }
        seen
    }
}
