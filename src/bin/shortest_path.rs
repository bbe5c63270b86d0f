use std::env;
use std::fmt::Debug;
use std::process;

use cost_paths::graph::{samples, Graph};
use cost_paths::{CostScan, Dijkstra, LabeledGraph, PathReport, ShortestPathAlgorithm};
use log::info;
use num_traits::Float;
use ordered_float::OrderedFloat;

const USAGE: &str = "usage: shortest_path [--engine scan|heap] [--json] [GRAPH.json SOURCE TARGET]

Without a graph file every built-in sample graph is solved.
Set RUST_LOG=debug to watch the frontier.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Engine {
    Scan,
    Heap,
}

#[derive(Debug)]
struct RunConfig {
    engine: Engine,
    json: bool,
    /// Graph file with its source and target
    query: Option<(String, String, String)>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            engine: Engine::Scan,
            json: false,
            query: None,
        }
    }
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<RunConfig, String> {
    let mut config = RunConfig::default();
    let mut positional = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--engine" => {
                config.engine = match args.next().as_deref() {
                    Some("scan") => Engine::Scan,
                    Some("heap") => Engine::Heap,
                    other => return Err(format!("unknown engine: {:?}", other)),
                };
            }
            "--json" => config.json = true,
            "-h" | "--help" => return Err(String::new()),
            _ if arg.starts_with('-') => return Err(format!("unknown option: {}", arg)),
            _ => positional.push(arg),
        }
    }

    match <[String; 3]>::try_from(positional) {
        Ok([graph, source, target]) => config.query = Some((graph, source, target)),
        Err(rest) if rest.is_empty() => {}
        Err(rest) => return Err(format!("expected GRAPH SOURCE TARGET, got {} arguments", rest.len())),
    }

    Ok(config)
}

fn report<W, A>(
    algorithm: &A,
    graph: &LabeledGraph<String, W>,
    source: &str,
    target: &str,
) -> cost_paths::Result<PathReport>
where
    W: Float + Debug,
    A: ShortestPathAlgorithm<String, W, LabeledGraph<String, W>>,
{
    let result = algorithm.compute_shortest_paths(graph, &source.to_string(), &target.to_string())?;
    PathReport::new(algorithm.name(), &result)
}

fn solve(
    engine: Engine,
    graph: &LabeledGraph<String, f64>,
    source: &str,
    target: &str,
) -> cost_paths::Result<PathReport> {
    match engine {
        Engine::Scan => report(&CostScan::new(), graph, source, target),
        Engine::Heap => report(&Dijkstra::new(), &graph.map_weights(OrderedFloat), source, target),
    }
}

fn print_report(config: &RunConfig, report: &PathReport) -> Result<(), Box<dyn std::error::Error>> {
    if config.json {
        println!("{}", serde_json::to_string(report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let config = match parse_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(message) => {
            if !message.is_empty() {
                eprintln!("{}", message);
            }
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    match &config.query {
        Some((path, source, target)) => {
            let graph = LabeledGraph::from_json_file(path)?;
            info!("Loaded {} nodes from {}", graph.node_count(), path);
            print_report(&config, &solve(config.engine, &graph, source, target)?)?;
        }
        None => {
            for sample in samples::all() {
                info!("Solving sample graph {:?}", sample.name);
                let report = solve(config.engine, &sample.graph, &sample.source, &sample.target)?;
                if !config.json {
                    println!("== {} ==", sample.name);
                }
                print_report(&config, &report)?;
            }
        }
    }

    Ok(())
}
