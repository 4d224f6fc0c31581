//! Cycle detection for undirected graphs.
//!
//! An iterative depth first search records, per vertex, the
//! ancestor it was discovered from. A marked neighbor that
//! is neither the current vertex's recorded ancestor nor a
//! fresh discovery closes a back-edge; walking the ancestor
//! chain from the search tip to the neighbor's ancestor
//! reconstructs one concrete cycle. A self-loop is reported
//! as the trivial one-vertex cycle.

use crate::graph::{GraphError, UGraph, VertexIndex};

/// Find a cycle in `graph` if one exists.
///
/// The returned vertices form a closed walk: consecutive
/// entries are adjacent and the last is adjacent to the
/// first through the detected back-edge. A single vertex
/// stands for a self-loop. `None` means the graph is
/// acyclic. The search short-circuits on the first
/// back-edge, across roots as well as within one root.
pub fn find_cycle<G: UGraph + ?Sized>(graph: &G) -> Result<Option<Vec<VertexIndex>>, GraphError> {
    let vertex_count = graph.vertex_count();
    let mut marks = vec![false; vertex_count];
    let mut ancestors = vec![0; vertex_count];

    // Endpoints of the detected back-edge: the search tip
    // first, then the marked neighbor it reached.
    let mut back_edge = None;

    'roots: for root in 0..vertex_count {
        if marks[root] {
            continue;
        }

        marks[root] = true;
        ancestors[root] = root;
        let mut frontier = vec![root];

        while let Some(current) = frontier.pop() {
            for adjacent in graph.vertices_adjacent_to(current)? {
                if adjacent == current {
                    return Ok(Some(vec![current]));
                }

                if !marks[adjacent] {
                    marks[adjacent] = true;
                    ancestors[adjacent] = current;
                    frontier.push(adjacent);
                } else if ancestors[current] != adjacent {
                    back_edge = Some((current, adjacent));
                    break 'roots;
                }
            }
        }
    }

    Ok(back_edge.map(|(search_tip, neighbor)| {
        // Follow the search tip back to the neighbor's own
        // ancestor, then close the walk over the back-edge.
        let common_ancestor = ancestors[neighbor];

        let mut cycle = Vec::new();
        let mut step = search_tip;
        while step != common_ancestor {
            cycle.push(step);
            step = ancestors[step];
        }
        cycle.push(common_ancestor);
        cycle.push(neighbor);

        cycle
    }))
}
