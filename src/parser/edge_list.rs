//! Parser for graphs in the plain edge list format:
//! the vertex count on the first line, the edge count on
//! the second, then exactly edge-count lines of `v w`
//! pairs. Vertices are 0-indexed and must stay below the
//! vertex count.

use std::io::BufRead;

use crate::{
    error::Error,
    get_line, get_line_parse,
    graph::{UGraph, VertexIndex},
    parse_single_line,
};

use super::{Input, ParseResult};

fn parse_count(input: Input<'_>) -> ParseResult<'_, usize> {
    use nom::{
        character::complete::{space0, u64},
        combinator::map,
        error::context,
        sequence::delimited,
    };

    let count_parser = delimited(space0, u64, space0);
    context("count line", map(count_parser, |count| count as usize))(input)
}

fn parse_edge(input: Input<'_>) -> ParseResult<'_, (VertexIndex, VertexIndex)> {
    use nom::{
        character::complete::{multispace1, space0, u64},
        combinator::map,
        error::context,
        sequence::{delimited, pair, terminated},
    };

    let pair_parser = pair(terminated(u64, multispace1), u64);
    context(
        "edge line",
        map(delimited(space0, pair_parser, space0), |(start, end)| {
            (start as VertexIndex, end as VertexIndex)
        }),
    )(input)
}

/// Read a graph from `input`, building the empty graph of
/// the announced size with `build` and inserting every
/// listed edge. Fails on truncated input, non-numeric
/// tokens and out of range vertex indices; no partial
/// graph is ever returned.
pub fn parse_edge_list<B, G, F>(input: B, build: F) -> Result<G, Error>
where
    B: BufRead,
    G: UGraph,
    F: FnOnce(usize) -> G,
{
    use nom::combinator::eof;

    let mut lines = input.lines();

    get_line_parse!(lines, vertex_count, parse_count);
    get_line_parse!(lines, edge_count, parse_count);

    let mut graph = build(vertex_count);
    for _ in 0..edge_count {
        get_line!(line, lines);
        parse_single_line!(edge, parse_edge(&line));
        let (start, end) = edge;
        graph.add_edge(start, end)?;
    }

    Ok(graph)
}
