//! Connected component labeling: one traversal pass per
//! undiscovered vertex, assigning component ids in
//! discovery order. The pass uses a breadth first frontier
//! rather than recursion so component size never threatens
//! the call stack; every vertex is visited by exactly one
//! component's traversal, O(V + E) overall.

use std::collections::VecDeque;

use crate::graph::{GraphError, UGraph, VertexIndex};

/// Component id per vertex plus the total component count.
/// Two vertices are connected iff their ids are equal.
#[derive(Debug, PartialEq, Eq)]
pub struct ConnectedComponents {
    ids: Vec<usize>,
    count: usize,
}

impl ConnectedComponents {
    /// Label every vertex of `graph` with its component.
    pub fn new<G: UGraph + ?Sized>(graph: &G) -> Result<Self, GraphError> {
        let vertex_count = graph.vertex_count();
        let mut marks = vec![false; vertex_count];
        let mut ids = vec![0; vertex_count];
        let mut count = 0;

        for source in 0..vertex_count {
            if marks[source] {
                continue;
            }

            marks[source] = true;
            ids[source] = count;
            let mut frontier = VecDeque::new();
            frontier.push_back(source);

            while let Some(current) = frontier.pop_front() {
                for adjacent in graph.vertices_adjacent_to(current)? {
                    if !marks[adjacent] {
                        marks[adjacent] = true;
                        ids[adjacent] = count;
                        frontier.push_back(adjacent);
                    }
                }
            }

            count += 1;
        }

        Ok(ConnectedComponents { ids, count })
    }

    /// Is `source` connected to `target`?
    pub fn connected(&self, source: VertexIndex, target: VertexIndex) -> Result<bool, GraphError> {
        Ok(self.id(source)? == self.id(target)?)
    }

    /// Number of separate components in the graph.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Component id of `vertex`, assigned in first
    /// discovery order starting at 0.
    pub fn id(&self, vertex: VertexIndex) -> Result<usize, GraphError> {
        self.ids.get(vertex).copied().ok_or(GraphError(vertex))
    }
}
