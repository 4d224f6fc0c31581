//! Undirected graph backed by one neighbor list per vertex.

use std::io::BufRead;

use super::{AdjacencyList, GraphError, UGraph, VertexIndex};
use crate::{error::Error, parser::parse_edge_list};

/// Fixed size undirected graph using adjacency lists.
///
/// Every edge is stored in the lists of both endpoints, so
/// a self-loop occupies two entries in the list of its
/// vertex. [`UGraph::vertices_adjacent_to`] folds each
/// stored pair back into one occurrence on read, while
/// [`UGraph::degree`] reports the raw stored length and
/// therefore counts a self-loop twice. Duplicate edges are
/// kept as separate entries.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct AdjListGraph {
    adjacencies: Vec<AdjacencyList>,
}

impl AdjListGraph {
    pub fn new(vertex_count: usize) -> Self {
        AdjListGraph {
            adjacencies: vec![AdjacencyList::new(); vertex_count],
        }
    }

    /// Read a graph in edge list format: vertex count,
    /// edge count, then exactly that many `v w` lines.
    pub fn from_edge_list<B: BufRead>(input: B) -> Result<Self, Error> {
        parse_edge_list(input, Self::new)
    }
}

impl UGraph for AdjListGraph {
    fn vertex_count(&self) -> usize {
        self.adjacencies.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacencies.iter().map(Vec::len).sum::<usize>() / 2
    }

    fn vertices_adjacent_to(&self, vertex: VertexIndex) -> Result<AdjacencyList, GraphError> {
        let stored = self.adjacencies.get(vertex).ok_or(GraphError(vertex))?;

        // Fold the two stored halves of each self-loop into
        // a single occurrence.
        let mut adjacent = AdjacencyList::with_capacity(stored.len());
        let mut seen_self_loop = false;
        for &end in stored {
            if end == vertex {
                if seen_self_loop {
                    adjacent.push(end);
                }
                seen_self_loop = !seen_self_loop;
            } else {
                adjacent.push(end);
            }
        }

        Ok(adjacent)
    }

    fn degree(&self, vertex: VertexIndex) -> Result<usize, GraphError> {
        self.adjacencies
            .get(vertex)
            .map(Vec::len)
            .ok_or(GraphError(vertex))
    }

    fn add_edge(&mut self, start: VertexIndex, end: VertexIndex) -> Result<(), GraphError> {
        if start >= self.adjacencies.len() {
            return Err(GraphError(start));
        }
        if end >= self.adjacencies.len() {
            return Err(GraphError(end));
        }

        self.adjacencies[start].push(end);
        self.adjacencies[end].push(start);
        Ok(())
    }
}
