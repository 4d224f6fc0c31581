//! Representation of undirected graphs as either
//! adjacency lists or an adjacency matrix, both behind
//! the same capability trait that the algorithms
//! depend on.
use itertools::Itertools;

mod adjacency_list;
pub use adjacency_list::AdjListGraph;

mod adjacency_matrix;
pub use adjacency_matrix::AdjMatrixGraph;

pub type VertexIndex = usize;
pub type AdjacencyList = Vec<VertexIndex>;

/// A vertex index reached past the fixed vertex set.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("vertex {0} is out of range")]
pub struct GraphError(pub VertexIndex);

/// Capability surface shared by all graph representations.
///
/// The vertex set is fixed at construction; only edges can
/// be added afterwards. Implementations guarantee symmetry
/// (`w` adjacent to `v` implies `v` adjacent to `w`) and
/// that every returned adjacency entry is a valid vertex
/// index. The edge count is always derived from the
/// adjacency structure, never cached.
/// Field width for right-justified vertex indices, the
/// smallest `w` with `10^w >= vertex_count`.
fn index_width(vertex_count: usize) -> usize {
    let mut width = 0;
    let mut bound: usize = 1;
    while bound < vertex_count {
        width += 1;
        bound = bound.saturating_mul(10);
    }
    width
}

pub trait UGraph {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of edges, computed by scanning the storage.
    fn edge_count(&self) -> usize;

    /// Vertices adjacent to `vertex`, in the enumeration
    /// order of the representation. A self-loop occurs
    /// exactly once in the returned list.
    fn vertices_adjacent_to(&self, vertex: VertexIndex) -> Result<AdjacencyList, GraphError>;

    /// Degree of `vertex`; a self-loop counts twice.
    fn degree(&self, vertex: VertexIndex) -> Result<usize, GraphError>;

    /// Creates an edge between the two named vertices.
    /// It is possible to add the same edge twice.
    fn add_edge(&mut self, start: VertexIndex, end: VertexIndex) -> Result<(), GraphError>;

    /// Human readable adjacency dump: one line per vertex
    /// with the right-justified index, `|`, then the
    /// adjacent vertices in enumeration order.
    fn to_display_string(&self) -> String {
        let vertex_count = self.vertex_count();
        let width = index_width(vertex_count);

        let mut out = String::new();
        for vertex in 0..vertex_count {
            let adjacent = self
                .vertices_adjacent_to(vertex)
                .expect("graph reported fewer vertices than it enumerates");
            if adjacent.is_empty() {
                out.push_str(&format!("{:>1$} |\n", vertex, width));
            } else {
                out.push_str(&format!(
                    "{:>2$} | {}\n",
                    vertex,
                    adjacent.iter().join(" "),
                    width
                ));
            }
        }

        out
    }

    /// Machine readable form matching the edge list input
    /// format: vertex count, edge count, then every edge
    /// exactly once with the smaller endpoint first and
    /// self-loops listed once.
    fn to_input_string(&self) -> String {
        let mut out = format!("{}\n{}\n", self.vertex_count(), self.edge_count());
        for vertex in 0..self.vertex_count() {
            let adjacent = self
                .vertices_adjacent_to(vertex)
                .expect("graph reported fewer vertices than it enumerates");
            for end in adjacent {
                if end >= vertex {
                    out.push_str(&format!("{} {}\n", vertex, end));
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn index_width_follows_the_largest_index() {
        assert_eq!(0, index_width(0));
        assert_eq!(0, index_width(1));
        assert_eq!(1, index_width(2));
        assert_eq!(1, index_width(10));
        assert_eq!(2, index_width(11));
        assert_eq!(2, index_width(100));
        assert_eq!(3, index_width(101));
    }

    #[test]
    fn display_width_at_the_ten_vertex_boundary() -> Result<(), GraphError> {
        let mut graph = AdjListGraph::new(10);
        graph.add_edge(0, 9)?;

        let display = graph.to_display_string();
        let mut lines = display.lines();
        assert_eq!(Some("0 | 9"), lines.next());

        let single = AdjListGraph::new(1);
        assert_eq!("0 |\n", single.to_display_string());

        Ok(())
    }
}
