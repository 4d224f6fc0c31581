#![warn(rust_2018_idioms)]

//! Driver glue for the undirected graph toolkit: read an
//! edge list (stdin or file) or synthesize a random graph,
//! then report reachability from vertex 0, the connected
//! components and a cycle if one exists.

use std::{
    env,
    fs::File,
    io::{self, BufRead, BufReader, Stderr},
};

use itertools::Itertools;

use ugraph::{
    components::ConnectedComponents,
    cycle::find_cycle,
    generator::GraphGenerator,
    graph::{AdjListGraph, AdjMatrixGraph, UGraph},
    search::{breadth_first_search, depth_first_search, TraceSink, WriteSink},
    Error,
};

const USAGE: &str = "\
Usage: ugraph [OPTIONS] [FILE]
       ugraph [OPTIONS] generate <VERTICES> <EDGES>

Reads a graph in edge list format (vertex count, edge
count, then one `v w` pair per line) from FILE or stdin,
or generates a random one, and analyzes it.

Options:
    --matrix      use adjacency matrix storage
    --trace       report every search step on stderr
    --self-loops  allow self-loops when generating
    --duplicates  allow duplicate edges when generating
    --seed <N>    seed the generator for reproducible runs
    -h, --help    show this message";

#[derive(Debug, Default)]
struct Settings {
    /// Build the graph in matrix representation.
    matrix: bool,
    /// Report every search step on stderr.
    trace: bool,
    /// Synthesize `(vertices, edges)` instead of reading.
    generate: Option<(usize, usize)>,
    /// Generator policy flags.
    allow_self_loops: bool,
    allow_duplicate_edges: bool,
    seed: Option<u64>,
    /// Read from this file instead of stdin.
    input_file: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Option<Settings> {
    let mut settings = Settings::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--matrix" => settings.matrix = true,
            "--trace" => settings.trace = true,
            "--self-loops" => settings.allow_self_loops = true,
            "--duplicates" => settings.allow_duplicate_edges = true,
            "--seed" => settings.seed = Some(args.next()?.parse().ok()?),
            "generate" => {
                let vertices = args.next()?.parse().ok()?;
                let edges = args.next()?.parse().ok()?;
                settings.generate = Some((vertices, edges));
            }
            "-h" | "--help" => return None,
            _ => {
                if arg.starts_with('-') || settings.input_file.is_some() {
                    return None;
                }
                settings.input_file = Some(arg);
            }
        }
    }

    Some(settings)
}

fn read_graph(settings: &Settings) -> Result<Box<dyn UGraph>, Error> {
    let reader: Box<dyn BufRead> = match &settings.input_file {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    Ok(if settings.matrix {
        Box::new(AdjMatrixGraph::from_edge_list(reader)?)
    } else {
        Box::new(AdjListGraph::from_edge_list(reader)?)
    })
}

fn generate<G: UGraph>(empty: G, settings: &Settings, edges: usize) -> Result<G, Error> {
    let mut generator = match settings.seed {
        Some(seed) => GraphGenerator::with_seed(empty, seed),
        None => GraphGenerator::new(empty),
    };
    generator.allow_self_loops(settings.allow_self_loops);
    generator.allow_duplicate_edges(settings.allow_duplicate_edges);
    generator.add_edges(edges)?;

    Ok(generator.into_graph())
}

fn build_graph(settings: &Settings) -> Result<Box<dyn UGraph>, Error> {
    match settings.generate {
        Some((vertices, edges)) => Ok(if settings.matrix {
            Box::new(generate(AdjMatrixGraph::new(vertices), settings, edges)?)
        } else {
            Box::new(generate(AdjListGraph::new(vertices), settings, edges)?)
        }),
        None => read_graph(settings),
    }
}

fn trace_sink<'a>(
    sink: &'a mut WriteSink<Stderr>,
    enabled: bool,
) -> Option<&'a mut dyn TraceSink> {
    if enabled {
        Some(sink)
    } else {
        None
    }
}

fn main() -> Result<(), Error> {
    let settings = match parse_args(env::args().skip(1)) {
        Some(settings) => settings,
        None => {
            eprintln!("{}", USAGE);
            return Ok(());
        }
    };

    let graph = build_graph(&settings)?;

    println!("The graph is this:");
    print!("{}", graph.to_display_string());

    if graph.vertex_count() == 0 {
        return Ok(());
    }

    let mut sink = WriteSink(io::stderr());

    let bfs = breadth_first_search(graph.as_ref(), 0, trace_sink(&mut sink, settings.trace))?;
    println!(
        "breadth first search from 0 reaches {} of {} vertices",
        bfs.count(),
        graph.vertex_count()
    );

    let dfs = depth_first_search(graph.as_ref(), 0, trace_sink(&mut sink, settings.trace))?;
    println!(
        "depth first search from 0 reaches {} of {} vertices",
        dfs.count(),
        graph.vertex_count()
    );

    let components = ConnectedComponents::new(graph.as_ref())?;
    println!("{} connected component(s)", components.count());

    match find_cycle(graph.as_ref())? {
        Some(cycle) => println!("cycle: {}", cycle.iter().join(" ")),
        None => println!("no cycle"),
    }

    Ok(())
}
