#![deny(clippy::all)]

use clap::{App, Arg};

use lazy_static::lazy_static;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};

pub mod demos;

use demos::DemoOptions;

type Error = anyhow::Error;
type Actor =
    Box<dyn (Fn(Option<BoxedRead>, &DemoOptions) -> Result<(), Error>) + Send + Sync + 'static>;

lazy_static! {
    static ref DEMOS: HashMap<&'static str, Actor> = {
        let mut s: HashMap<&'static str, Actor> = HashMap::new();
        s.insert("maze", Box::new(demos::maze::main));
        s.insert("matrix", Box::new(demos::matrix::main));
        s
    };
}

pub fn driver() -> Result<(), Error> {
    let matches = App::new("Pathfinding")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Find shortest paths with A* and Dijkstra's algorithm")
        .arg(
            Arg::with_name("demo")
                .value_name("DEMO")
                .help("Which demo to run: maze or matrix")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("input")
                .value_name("INPUT")
                .help("Read the graph from a file, or - for stdin")
                .required(false)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("astar")
                .long("astar")
                .help("Guide the search with a heuristic"),
        )
        .arg(
            Arg::with_name("from")
                .long("from")
                .value_name("ORIGIN")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("to")
                .long("to")
                .value_name("DESTINATION")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more, repeat for more detail"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let demo = matches.value_of("demo").unwrap_or_default();
    let options = DemoOptions {
        heuristic: matches.is_present("astar"),
        origin: matches.value_of("from").map(str::to_string),
        destination: matches.value_of("to").map(str::to_string),
    };
    debug!(demo, ?options, "starting");

    let actor = DEMOS
        .get(demo)
        .ok_or_else(|| DemoError::DemoNotFound(demo.to_string()))?;
    let reader = get_input_reader(matches.value_of("input"))?;
    actor(reader, &options)
}

fn init_logging(verbosity: u64) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();
}

pub type BoxedRead = Box<dyn Read + 'static>;

/// Open the input for a demo. Demos fall back to their built-in
/// input when no file is given.
pub fn get_input_reader(filename: Option<&str>) -> Result<Option<BoxedRead>, Error> {
    let reader: Option<BoxedRead> = match filename {
        Some("-") => Some(Box::new(io::stdin())),
        Some(path) => {
            let f: File =
                File::open(path).map_err(|e| DemoError::InputNotFound(path.to_string(), e))?;
            Some(Box::new(f))
        }
        None => None,
    };
    Ok(reader)
}

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("No demo named {0}")]
    DemoNotFound(String),

    #[error("Input not found: {0}")]
    InputNotFound(String, #[source] io::Error),

    #[error("Unable to read input")]
    Unreadable(#[from] io::Error),

    #[error("Unknown node {0}")]
    UnknownNode(String),
}
