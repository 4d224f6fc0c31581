//! Undirected graph backed by a symmetric boolean matrix.

use std::io::BufRead;

use super::{AdjacencyList, GraphError, UGraph, VertexIndex};
use crate::{error::Error, parser::parse_edge_list};

/// Fixed size undirected graph using a `V x V` boolean
/// adjacency matrix, kept symmetric by construction.
///
/// The matrix cannot represent duplicate edges; adding the
/// same edge twice is a no-op for storage. A self-loop sets
/// the diagonal bit, is counted once in the edge total and
/// twice in the degree of its vertex. Adjacency enumeration
/// order is ascending by index.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct AdjMatrixGraph {
    matrix: Vec<Vec<bool>>,
}

impl AdjMatrixGraph {
    pub fn new(vertex_count: usize) -> Self {
        AdjMatrixGraph {
            matrix: vec![vec![false; vertex_count]; vertex_count],
        }
    }

    /// Read a graph in edge list format: vertex count,
    /// edge count, then exactly that many `v w` lines.
    pub fn from_edge_list<B: BufRead>(input: B) -> Result<Self, Error> {
        parse_edge_list(input, Self::new)
    }
}

impl UGraph for AdjMatrixGraph {
    fn vertex_count(&self) -> usize {
        self.matrix.len()
    }

    fn edge_count(&self) -> usize {
        // Upper triangle including the diagonal, so every
        // edge is counted once.
        self.matrix
            .iter()
            .enumerate()
            .map(|(vertex, row)| row[vertex..].iter().filter(|&&set| set).count())
            .sum()
    }

    fn vertices_adjacent_to(&self, vertex: VertexIndex) -> Result<AdjacencyList, GraphError> {
        let row = self.matrix.get(vertex).ok_or(GraphError(vertex))?;
        Ok(row
            .iter()
            .enumerate()
            .filter_map(|(end, &set)| if set { Some(end) } else { None })
            .collect())
    }

    fn degree(&self, vertex: VertexIndex) -> Result<usize, GraphError> {
        let row = self.matrix.get(vertex).ok_or(GraphError(vertex))?;
        let self_loop = if row[vertex] { 1 } else { 0 };
        Ok(row.iter().filter(|&&set| set).count() + self_loop)
    }

    fn add_edge(&mut self, start: VertexIndex, end: VertexIndex) -> Result<(), GraphError> {
        if start >= self.matrix.len() {
            return Err(GraphError(start));
        }
        if end >= self.matrix.len() {
            return Err(GraphError(end));
        }

        self.matrix[start][end] = true;
        self.matrix[end][start] = true;
        Ok(())
    }
}
