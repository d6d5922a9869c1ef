use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::regex;

#[derive(Serialize, Deserialize, Clone)]
pub struct BenchmarkCase {
    name: String,
    comment: String,
    filename: String,
    regex: String,
    partial: Option<bool>,
    length: Option<u64>,
}

#[derive(Serialize, Deserialize)]
pub struct BenchmarkResult {
    benchmark: BenchmarkCase,
    input_chars: usize,
    nb_states: usize,
    parse_seconds: f64,
    compile_seconds: f64,
    simulation_match: bool,
    backtrack_match: bool,
    simulation: RunStats,
    backtracking: RunStats,
}

#[derive(Serialize, Deserialize)]
pub struct RunStats {
    avg: f64,
    stddev: f64,
    min: f64,
    max: f64,
}

impl BenchmarkCase {
    pub fn read_from_file(filename: &Path) -> Result<Vec<BenchmarkCase>, Box<dyn std::error::Error>> {
        let mut input = String::new();

        File::open(&filename)?.read_to_string(&mut input)?;
        let path = filename.parent();

        let mut benchmarks: Vec<BenchmarkCase> = serde_json::from_str(&input)?;

        if let Some(path) = path {
            for benchmark in &mut benchmarks {
                benchmark.filename = path
                    .join(benchmark.filename.clone())
                    .to_str()
                    .unwrap()
                    .to_string();
            }
        }

        Ok(benchmarks)
    }

    pub fn new(
        name: String,
        comment: String,
        filename: String,
        regex: String,
        partial: bool,
    ) -> BenchmarkCase {
        BenchmarkCase {
            name,
            comment,
            filename,
            regex,
            partial: Some(partial),
            length: None,
        }
    }

    pub fn run(&self, repetitions: usize) -> Result<BenchmarkResult, Box<dyn std::error::Error>> {
        let mut input = String::new();
        let partial = self.partial.unwrap_or(false);

        // Read input file content.
        File::open(&self.filename)?
            .take(match self.length {
                Some(l) => l,
                None => std::u64::MAX,
            })
            .read_to_string(&mut input)?;

        // Parse the pattern.
        let timer = Instant::now();
        let ast = regex::parse(&self.regex)?;
        let parse_seconds = seconds(timer);

        // Compile the automaton.
        let timer = Instant::now();
        let nfa = regex::thompson::compile(&ast);
        let compile_seconds = seconds(timer);

        let (simulation_match, simulation) = time_runs(repetitions, || {
            if partial {
                nfa.is_match_partial(&input)
            } else {
                nfa.is_match(&input)
            }
        });

        let (backtrack_match, backtracking) = time_runs(repetitions, || {
            if partial {
                regex::backtrack::is_match_partial(&ast, &input)
            } else {
                regex::backtrack::is_match(&ast, &input)
            }
        });

        Ok(BenchmarkResult {
            benchmark: self.clone(),
            input_chars: input.chars().count(),
            nb_states: nfa.nb_states(),
            parse_seconds,
            compile_seconds,
            simulation_match,
            backtrack_match,
            simulation,
            backtracking,
        })
    }
}

fn seconds(timer: Instant) -> f64 {
    timer.elapsed().as_nanos() as f64 / 1_000_000_000.0
}

fn time_runs<F: Fn() -> bool>(repetitions: usize, run: F) -> (bool, RunStats) {
    let repetitions = std::cmp::max(repetitions, 1);
    let mut samples = Vec::with_capacity(repetitions);
    let mut result = false;

    for _ in 0..repetitions {
        let timer = Instant::now();
        result = run();
        samples.push(seconds(timer));
    }

    let stats = RunStats {
        avg: stats::mean(samples.iter().cloned()),
        stddev: stats::stddev(samples.iter().cloned()),
        min: samples.iter().cloned().fold(std::f64::INFINITY, |a, b| a.min(b)),
        max: samples.iter().cloned().fold(0.0, |a: f64, b| a.max(b)),
    };

    (result, stats)
}
