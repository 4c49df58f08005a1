use crate::graph::DependencyGraph;
use crate::model::DeclaredDependencies;
use reqcat_types::FileId;
use std::collections::{HashMap, VecDeque};

/// The declared dependencies contain at least one cycle; no order exists.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("dependency cycle detected: {}", render_cycle(.cycle))]
pub struct CycleError {
    /// One concrete cycle, each member depending on the next; the last depends on the first.
    pub cycle: Vec<FileId>,
    /// Every node that could not be ordered: cycle members and their downstream dependents.
    pub unresolved: Vec<FileId>,
}

fn render_cycle(cycle: &[FileId]) -> String {
    let mut parts: Vec<&str> = cycle.iter().map(FileId::as_str).collect();
    if let Some(first) = cycle.first() {
        parts.push(first.as_str());
    }
    parts.join(" -> ")
}

/// Order every node so that each dependency precedes the files declaring it.
pub fn resolve(deps: &DeclaredDependencies) -> Result<Vec<FileId>, CycleError> {
    DependencyGraph::build(deps).topological_order()
}

impl DependencyGraph {
    /// Kahn's algorithm over the graph.
    ///
    /// Zero in-degree nodes are queued in discovery order, so the same input
    /// always yields the same order.
    pub fn topological_order(&self) -> Result<Vec<FileId>, CycleError> {
        let mut remaining = self.initial_in_degrees();
        let mut queue: VecDeque<usize> = remaining
            .iter()
            .enumerate()
            .filter(|(_, deg)| **deg == 0)
            .map(|(ix, _)| ix)
            .collect();

        let mut order = Vec::with_capacity(self.node_count());
        while let Some(ix) = queue.pop_front() {
            order.push(self.node(ix).clone());
            for &dependent in self.dependent_indices(ix) {
                remaining[dependent] -= 1;
                if remaining[dependent] == 0 {
                    queue.push_back(dependent);
                }
            }
        }

        if order.len() == self.node_count() {
            return Ok(order);
        }

        Err(self.cycle_error(&remaining))
    }

    fn cycle_error(&self, remaining: &[usize]) -> CycleError {
        let stuck: Vec<usize> = (0..self.node_count()).filter(|&ix| remaining[ix] > 0).collect();

        // Every stuck node has at least one stuck dependency, so walking
        // dependencies from any stuck node must revisit a node.
        let mut cycle = Vec::new();
        if let Some(&start) = stuck.first() {
            let mut path: Vec<usize> = Vec::new();
            let mut seen: HashMap<usize, usize> = HashMap::new();
            let mut current = start;
            loop {
                if let Some(&pos) = seen.get(&current) {
                    cycle = path[pos..].iter().map(|&ix| self.node(ix).clone()).collect();
                    break;
                }
                seen.insert(current, path.len());
                path.push(current);

                let Some(&next) = self
                    .dependency_indices(current)
                    .iter()
                    .find(|&&d| remaining[d] > 0)
                else {
                    break;
                };
                current = next;
            }
        }

        CycleError {
            cycle,
            unresolved: stuck.into_iter().map(|ix| self.node(ix).clone()).collect(),
        }
    }
}
