//! Randomized graph synthesis under edge policy
//! constraints. The generator owns the graph it fills and
//! rejection-samples vertex pairs; a closed-form capacity
//! check before any sampling guarantees the loop can
//! terminate.

use custom_debug_derive::Debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    error::Error,
    graph::{GraphError, UGraph},
};

/// Adds uniformly random edges to a graph of fixed vertex
/// count. Duplicate and self-loop edges are turned off by
/// default.
#[derive(Debug)]
pub struct GraphGenerator<G> {
    graph: G,
    #[debug(skip)]
    rng: StdRng,
    allow_duplicate_edges: bool,
    allow_self_loops: bool,
}

impl<G: UGraph> GraphGenerator<G> {
    pub fn new(graph: G) -> Self {
        Self::from_rng(graph, StdRng::from_entropy())
    }

    /// Generator with reproducible sampling.
    pub fn with_seed(graph: G, seed: u64) -> Self {
        Self::from_rng(graph, StdRng::seed_from_u64(seed))
    }

    fn from_rng(graph: G, rng: StdRng) -> Self {
        GraphGenerator {
            graph,
            rng,
            allow_duplicate_edges: false,
            allow_self_loops: false,
        }
    }

    pub fn allowing_duplicate_edges(&self) -> bool {
        self.allow_duplicate_edges
    }

    pub fn allowing_self_loops(&self) -> bool {
        self.allow_self_loops
    }

    pub fn allow_duplicate_edges(&mut self, allow: bool) {
        self.allow_duplicate_edges = allow;
    }

    pub fn allow_self_loops(&mut self, allow: bool) {
        self.allow_self_loops = allow;
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn into_graph(self) -> G {
        self.graph
    }

    /// Add `edge_count` random edges to the graph.
    ///
    /// Fails with [`Error::Capacity`] before any sampling
    /// if the policy cannot fit the requested edges on top
    /// of those already present; otherwise every accepted
    /// sample strictly increases the edge count, so the
    /// sampling loop terminates.
    pub fn add_edges(&mut self, edge_count: usize) -> Result<(), Error> {
        let requested = edge_count + self.graph.edge_count();
        let can_add = if self.graph.vertex_count() == 0 {
            edge_count == 0
        } else {
            self.allow_duplicate_edges || requested <= self.max_edges()
        };
        if !can_add {
            return Err(Error::Capacity {
                max: self.max_edges(),
                requested,
            });
        }

        for _ in 0..edge_count {
            self.add_edge()?;
        }

        Ok(())
    }

    /// Maximum number of edges the graph can hold under the
    /// self-loop policy.
    fn max_edges(&self) -> usize {
        let vertex_count = self.graph.vertex_count();
        let between_distinct = vertex_count * vertex_count.saturating_sub(1) / 2;
        let self_loops = if self.allow_self_loops {
            vertex_count
        } else {
            0
        };

        between_distinct + self_loops
    }

    /// Sample vertex pairs until one satisfies the policy,
    /// then insert it.
    fn add_edge(&mut self) -> Result<(), GraphError> {
        let vertex_count = self.graph.vertex_count();

        loop {
            let start = self.rng.gen_range(0..vertex_count);
            let end = self.rng.gen_range(0..vertex_count);

            if !self.allow_self_loops && start == end {
                continue;
            }

            if !self.allow_duplicate_edges
                && self.graph.vertices_adjacent_to(start)?.contains(&end)
            {
                continue;
            }

            return self.graph.add_edge(start, end);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::{AdjListGraph, AdjMatrixGraph, VertexIndex};

    #[test]
    fn default_policy_turns_everything_off() {
        let generator = GraphGenerator::new(AdjListGraph::new(3));
        assert!(!generator.allowing_duplicate_edges());
        assert!(!generator.allowing_self_loops());
    }

    #[test]
    fn requesting_more_than_capacity_fails_before_sampling() {
        let mut generator = GraphGenerator::with_seed(AdjListGraph::new(5), 7);

        // 5 vertices hold at most 10 distinct edges.
        let result = generator.add_edges(11);
        assert!(matches!(
            result,
            Err(Error::Capacity {
                max: 10,
                requested: 11
            })
        ));
        assert_eq!(
            "Graph would be fully connected with 10 edges, but 11 were requested",
            result.unwrap_err().to_string()
        );
    }

    #[test]
    fn capacity_counts_edges_already_present() -> Result<(), Error> {
        let mut graph = AdjListGraph::new(3);
        graph.add_edge(0, 1)?;
        graph.add_edge(1, 2)?;

        let mut generator = GraphGenerator::with_seed(graph, 7);
        generator.add_edges(1)?;
        assert_eq!(3, generator.graph().edge_count());

        let result = generator.add_edges(1);
        assert!(matches!(
            result,
            Err(Error::Capacity {
                max: 3,
                requested: 4
            })
        ));

        Ok(())
    }

    #[test]
    fn self_loop_policy_extends_capacity() -> Result<(), Error> {
        let mut generator = GraphGenerator::with_seed(AdjListGraph::new(3), 11);
        generator.allow_self_loops(true);

        // 3 distinct edges plus 3 self-loops.
        generator.add_edges(6)?;

        let graph = generator.into_graph();
        assert_eq!(6, graph.edge_count());
        for vertex in 0..3 {
            assert!(graph.vertices_adjacent_to(vertex)?.contains(&vertex));
        }

        Ok(())
    }

    #[test]
    fn filling_to_capacity_builds_the_complete_graph() -> Result<(), Error> {
        let mut generator = GraphGenerator::with_seed(AdjMatrixGraph::new(4), 3);
        generator.add_edges(6)?;

        let graph = generator.into_graph();
        assert_eq!(6, graph.edge_count());
        for vertex in 0..4 {
            let adjacent = graph.vertices_adjacent_to(vertex)?;
            assert_eq!(3, adjacent.len());
            assert!(!adjacent.contains(&vertex));
        }

        Ok(())
    }

    #[test]
    fn duplicate_policy_lifts_the_capacity_check() -> Result<(), Error> {
        let mut generator = GraphGenerator::with_seed(AdjListGraph::new(2), 23);
        generator.allow_duplicate_edges(true);

        generator.add_edges(5)?;
        assert_eq!(5, generator.graph().edge_count());

        Ok(())
    }

    #[test]
    fn generated_edges_respect_the_default_policy() -> Result<(), Error> {
        let mut generator = GraphGenerator::with_seed(AdjListGraph::new(10), 42);
        generator.add_edges(20)?;

        let graph = generator.into_graph();
        assert_eq!(20, graph.edge_count());
        for vertex in 0..10 {
            let adjacent = graph.vertices_adjacent_to(vertex)?;
            // No self-loops.
            assert!(!adjacent.contains(&vertex));
            // No duplicates.
            let mut deduped = adjacent.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(deduped.len(), adjacent.len());
        }

        Ok(())
    }

    #[test]
    fn seeded_generation_is_reproducible() -> Result<(), Error> {
        let mut first = GraphGenerator::with_seed(AdjListGraph::new(8), 99);
        first.add_edges(12)?;
        let mut second = GraphGenerator::with_seed(AdjListGraph::new(8), 99);
        second.add_edges(12)?;

        assert_eq!(first.into_graph(), second.into_graph());

        Ok(())
    }

    #[test]
    fn empty_graph_accepts_no_edges() {
        let mut generator = GraphGenerator::with_seed(AdjListGraph::new(0), 1);
        assert!(generator.add_edges(0).is_ok());
        assert!(matches!(
            generator.add_edges(1),
            Err(Error::Capacity {
                max: 0,
                requested: 1
            })
        ));
    }

    #[test]
    fn matrix_storage_generates_within_policy_too() -> Result<(), Error> {
        let mut generator = GraphGenerator::with_seed(AdjMatrixGraph::new(6), 5);
        generator.add_edges(9)?;

        let graph = generator.into_graph();
        assert_eq!(9, graph.edge_count());
        for vertex in 0..6 as VertexIndex {
            assert!(!graph.vertices_adjacent_to(vertex)?.contains(&vertex));
        }

        Ok(())
    }
}
