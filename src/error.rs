//! Crate wide error type and conversions.
use nom::error::VerboseErrorKind;
use std::io;

use crate::{graph::GraphError, parser::ParseError};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Graph storage error")]
    Graph(GraphError),
    #[error("Error while parsing edge list input")]
    Parse(Vec<VerboseErrorKind>),
    #[error("Error while reading input stream")]
    Io(io::Error),
    #[error("Graph would be fully connected with {max} edges, but {requested} were requested")]
    Capacity { max: usize, requested: usize },
}

impl From<GraphError> for Error {
    fn from(ge: GraphError) -> Self {
        Self::Graph(ge)
    }
}

impl From<io::Error> for Error {
    fn from(ie: io::Error) -> Self {
        Self::Io(ie)
    }
}

impl<'a> From<nom::Err<ParseError<'a>>> for Error {
    fn from(pe: nom::Err<ParseError<'a>>) -> Self {
        match pe {
            nom::Err::Error(verbose) | nom::Err::Failure(verbose) => {
                Self::Parse(verbose.errors.into_iter().map(|(_, kind)| kind).collect())
            }
            nom::Err::Incomplete(_) => unreachable!(),
        }
    }
}
