#![warn(rust_2018_idioms)]

//! Small toolkit for undirected graphs: pluggable storage
//! behind one capability trait, iterative breadth and depth
//! first search with optional step tracing, connected
//! component labeling, cycle detection and a randomized
//! graph generator with edge policy constraints.

pub mod components;
pub mod cycle;
pub mod error;
pub mod generator;
pub mod graph;
pub mod parser;
pub mod search;

pub use error::Error;
