//! Iterative breadth and depth first search over any
//! [`UGraph`], each producing the set of vertices
//! reachable from a source. Both engines keep an explicit
//! frontier instead of recursing, so dense or large graphs
//! cannot overflow the call stack. An optional [`TraceSink`]
//! receives every frontier operation for visualization.

use std::{collections::VecDeque, fmt, io::Write};

use crate::graph::{GraphError, UGraph, VertexIndex};

/// One step of search progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// A vertex was marked and entered the frontier.
    Push(VertexIndex),
    /// A vertex left the frontier; its neighbors are
    /// examined next.
    Pop(VertexIndex),
    /// A neighbor of the popped vertex was examined.
    Check(VertexIndex),
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push(vertex) => write!(f, "push {}", vertex),
            Self::Pop(vertex) => write!(f, "pop {}", vertex),
            Self::Check(vertex) => write!(f, "check {}", vertex),
        }
    }
}

/// Consumer for search progress, injected at call time so
/// the engines stay free of global output. `depth` counts
/// frontier levels from the source; pushes and pops report
/// the depth of their vertex, checks the depth below the
/// popped vertex.
pub trait TraceSink {
    fn emit(&mut self, depth: usize, event: TraceEvent);
}

/// Collects rendered trace lines, two spaces of indentation
/// per depth level.
impl TraceSink for Vec<String> {
    fn emit(&mut self, depth: usize, event: TraceEvent) {
        self.push(format!("{:1$}{2}", "", 2 * depth, event));
    }
}

/// Renders trace lines to a writer, two spaces of
/// indentation per depth level. Tracing is fire and forget;
/// write failures are dropped.
pub struct WriteSink<W: Write>(pub W);

impl<W: Write> TraceSink for WriteSink<W> {
    fn emit(&mut self, depth: usize, event: TraceEvent) {
        let _ = writeln!(self.0, "{:1$}{2}", "", 2 * depth, event);
    }
}

fn emit(trace: &mut Option<&mut dyn TraceSink>, depth: usize, event: TraceEvent) {
    if let Some(sink) = trace {
        sink.emit(depth, event);
    }
}

/// Reachability computed by a single search invocation.
#[derive(Debug, PartialEq, Eq)]
pub struct SearchResult {
    marks: Vec<bool>,
    count: usize,
}

impl SearchResult {
    /// Is `vertex` connected to the source vertex?
    pub fn marked(&self, vertex: VertexIndex) -> Result<bool, GraphError> {
        self.marks.get(vertex).copied().ok_or(GraphError(vertex))
    }

    /// How many vertices are connected to the source?
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Find the vertices connected to `source` with a FIFO
/// frontier. Every vertex is marked when it is enqueued,
/// so it enters the frontier at most once.
pub fn breadth_first_search<G: UGraph + ?Sized>(
    graph: &G,
    source: VertexIndex,
    mut trace: Option<&mut dyn TraceSink>,
) -> Result<SearchResult, GraphError> {
    let vertex_count = graph.vertex_count();
    if source >= vertex_count {
        return Err(GraphError(source));
    }

    let mut marks = vec![false; vertex_count];
    let mut depths = vec![0; vertex_count];
    let mut count = 0;

    let mut frontier = VecDeque::new();
    marks[source] = true;
    count += 1;
    emit(&mut trace, 0, TraceEvent::Push(source));
    frontier.push_back(source);

    while let Some(current) = frontier.pop_front() {
        emit(&mut trace, depths[current], TraceEvent::Pop(current));

        for adjacent in graph.vertices_adjacent_to(current)? {
            emit(&mut trace, depths[current] + 1, TraceEvent::Check(adjacent));

            if !marks[adjacent] {
                marks[adjacent] = true;
                count += 1;
                depths[adjacent] = depths[current] + 1;
                emit(&mut trace, depths[adjacent], TraceEvent::Push(adjacent));
                frontier.push_back(adjacent);
            }
        }
    }

    Ok(SearchResult { marks, count })
}

/// Find the vertices connected to `source` with a LIFO
/// frontier. Marking happens at push time like in the
/// breadth first variant, so the reachable set and count
/// agree between the two engines; only the visitation
/// order differs.
pub fn depth_first_search<G: UGraph + ?Sized>(
    graph: &G,
    source: VertexIndex,
    mut trace: Option<&mut dyn TraceSink>,
) -> Result<SearchResult, GraphError> {
    let vertex_count = graph.vertex_count();
    if source >= vertex_count {
        return Err(GraphError(source));
    }

    let mut marks = vec![false; vertex_count];
    let mut depths = vec![0; vertex_count];
    let mut count = 0;

    let mut frontier = Vec::new();
    marks[source] = true;
    count += 1;
    emit(&mut trace, 0, TraceEvent::Push(source));
    frontier.push(source);

    while let Some(current) = frontier.pop() {
        emit(&mut trace, depths[current], TraceEvent::Pop(current));

        for adjacent in graph.vertices_adjacent_to(current)? {
            emit(&mut trace, depths[current] + 1, TraceEvent::Check(adjacent));

            if !marks[adjacent] {
                marks[adjacent] = true;
                count += 1;
                depths[adjacent] = depths[current] + 1;
                emit(&mut trace, depths[adjacent], TraceEvent::Push(adjacent));
                frontier.push(adjacent);
            }
        }
    }

    Ok(SearchResult { marks, count })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::{AdjListGraph, AdjMatrixGraph};

    fn path_graph() -> Result<AdjListGraph, GraphError> {
        let mut graph = AdjListGraph::new(5);
        graph.add_edge(0, 1)?;
        graph.add_edge(1, 2)?;
        graph.add_edge(2, 3)?;
        graph.add_edge(3, 4)?;
        Ok(graph)
    }

    #[test]
    fn bfs_reaches_the_whole_path() -> Result<(), GraphError> {
        let graph = path_graph()?;
        let result = breadth_first_search(&graph, 0, None)?;

        assert_eq!(5, result.count());
        for vertex in 0..5 {
            assert!(result.marked(vertex)?);
        }

        Ok(())
    }

    #[test]
    fn dfs_reaches_the_whole_path() -> Result<(), GraphError> {
        let graph = path_graph()?;
        let result = depth_first_search(&graph, 0, None)?;

        assert_eq!(5, result.count());
        for vertex in 0..5 {
            assert!(result.marked(vertex)?);
        }

        Ok(())
    }

    #[test]
    fn bfs_and_dfs_agree_on_reachability() -> Result<(), GraphError> {
        let mut graph = AdjMatrixGraph::new(7);
        graph.add_edge(0, 1)?;
        graph.add_edge(0, 2)?;
        graph.add_edge(1, 3)?;
        graph.add_edge(2, 4)?;
        graph.add_edge(5, 6)?;

        for source in 0..7 {
            let bfs = breadth_first_search(&graph, source, None)?;
            let dfs = depth_first_search(&graph, source, None)?;
            assert_eq!(bfs.count(), dfs.count());
            for vertex in 0..7 {
                assert_eq!(bfs.marked(vertex)?, dfs.marked(vertex)?);
            }
        }

        Ok(())
    }

    #[test]
    fn unreachable_vertices_stay_unmarked() -> Result<(), GraphError> {
        let mut graph = AdjListGraph::new(4);
        graph.add_edge(0, 1)?;
        graph.add_edge(2, 3)?;

        let result = breadth_first_search(&graph, 0, None)?;
        assert_eq!(2, result.count());
        assert!(result.marked(1)?);
        assert!(!result.marked(2)?);
        assert!(!result.marked(3)?);

        Ok(())
    }

    #[test]
    fn out_of_range_source_fails_fast() {
        let graph = AdjListGraph::new(3);
        assert_eq!(
            Err(GraphError(3)),
            breadth_first_search(&graph, 3, None).map(|_| ())
        );
        assert_eq!(
            Err(GraphError(4)),
            depth_first_search(&graph, 4, None).map(|_| ())
        );
    }

    #[test]
    fn out_of_range_mark_lookup_fails_fast() -> Result<(), GraphError> {
        let graph = AdjListGraph::new(2);
        let result = breadth_first_search(&graph, 0, None)?;
        assert_eq!(Err(GraphError(2)), result.marked(2));

        Ok(())
    }

    #[test]
    fn bfs_trace_indents_by_frontier_depth() -> Result<(), GraphError> {
        let mut graph = AdjListGraph::new(2);
        graph.add_edge(0, 1)?;

        let mut lines = Vec::new();
        breadth_first_search(&graph, 0, Some(&mut lines))?;

        assert_eq!(
            vec![
                "push 0",
                "pop 0",
                "  check 1",
                "  push 1",
                "  pop 1",
                "    check 0",
            ],
            lines
        );

        Ok(())
    }

    #[test]
    fn dfs_trace_follows_the_stack() -> Result<(), GraphError> {
        let mut graph = AdjListGraph::new(3);
        graph.add_edge(0, 1)?;
        graph.add_edge(1, 2)?;

        let mut lines = Vec::new();
        depth_first_search(&graph, 0, Some(&mut lines))?;

        assert_eq!(
            vec![
                "push 0",
                "pop 0",
                "  check 1",
                "  push 1",
                "  pop 1",
                "    check 0",
                "    check 2",
                "    push 2",
                "    pop 2",
                "      check 1",
            ],
            lines
        );

        Ok(())
    }
}
