//! Dependency graph built from declared dependencies.
//!
//! Nodes are interned in first-discovery order: each file of the input map,
//! followed by the identifiers it declares. Edges run from a dependency to
//! its dependent. Repeated declarations produce repeated edges; nothing is
//! deduplicated.

use crate::model::DeclaredDependencies;
use reqcat_types::FileId;
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct DependencyGraph {
    nodes: Vec<FileId>,
    index: HashMap<FileId, usize>,
    /// `dependents[d]` lists every `f` that declared `d`, once per declaration.
    dependents: Vec<Vec<usize>>,
    /// `dependencies[f]` lists every `d` declared by `f`, in declaration order.
    dependencies: Vec<Vec<usize>>,
    in_degree: Vec<usize>,
    edges: usize,
}

impl DependencyGraph {
    pub fn build(deps: &DeclaredDependencies) -> Self {
        let mut graph = DependencyGraph::default();

        for (file, declared) in deps {
            let f = graph.intern(file);
            for dep in declared {
                let d = graph.intern(dep);
                graph.dependents[d].push(f);
                graph.dependencies[f].push(d);
                graph.in_degree[f] += 1;
                graph.edges += 1;
            }
        }

        graph
    }

    fn intern(&mut self, id: &FileId) -> usize {
        if let Some(&ix) = self.index.get(id) {
            return ix;
        }
        let ix = self.nodes.len();
        self.nodes.push(id.clone());
        self.index.insert(id.clone(), ix);
        self.dependents.push(Vec::new());
        self.dependencies.push(Vec::new());
        self.in_degree.push(0);
        ix
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of declarations, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in discovery order.
    pub fn nodes(&self) -> &[FileId] {
        &self.nodes
    }

    pub fn contains(&self, id: &FileId) -> bool {
        self.index.contains_key(id)
    }

    /// Undischarged dependency count before any resolution step.
    pub fn in_degree(&self, id: &FileId) -> Option<usize> {
        self.index.get(id).map(|&ix| self.in_degree[ix])
    }

    pub fn dependencies_of(&self, id: &FileId) -> Vec<&FileId> {
        self.neighbours(id, &self.dependencies)
    }

    pub fn dependents_of(&self, id: &FileId) -> Vec<&FileId> {
        self.neighbours(id, &self.dependents)
    }

    /// Nodes without dependencies, in discovery order.
    pub fn roots(&self) -> Vec<&FileId> {
        self.nodes
            .iter()
            .zip(&self.in_degree)
            .filter(|(_, deg)| **deg == 0)
            .map(|(id, _)| id)
            .collect()
    }

    fn neighbours<'a>(&'a self, id: &FileId, adjacency: &'a [Vec<usize>]) -> Vec<&'a FileId> {
        match self.index.get(id) {
            Some(&ix) => adjacency[ix].iter().map(|&n| &self.nodes[n]).collect(),
            None => Vec::new(),
        }
    }

    pub(crate) fn node(&self, ix: usize) -> &FileId {
        &self.nodes[ix]
    }

    pub(crate) fn initial_in_degrees(&self) -> Vec<usize> {
        self.in_degree.clone()
    }

    pub(crate) fn dependent_indices(&self, ix: usize) -> &[usize] {
        &self.dependents[ix]
    }

    pub(crate) fn dependency_indices(&self, ix: usize) -> &[usize] {
        &self.dependencies[ix]
    }
}
