mod automaton;
mod benchmark;
mod regex;

extern crate bit_set;
extern crate bit_vec;
extern crate clap;
extern crate regex as lib_regex;

use std::fs::File;
use std::io::prelude::*;
use std::io::stdin;
use std::path::Path;
use std::process;

use clap::{App, Arg};

use benchmark::BenchmarkCase;
use crate::regex::naive::NaiveMatcher;

fn main() {
    //  ____
    // |  _ \ __ _ _ __ ___  ___ _ __
    // | |_) / _` | '__/ __|/ _ \ '__|
    // |  __/ (_| | |  \__ \  __/ |
    // |_|   \__,_|_|  |___/\___|_|
    //
    let matches = App::new("Regex matcher")
        .version("0.1")
        .about(
            "Match a restricted regular expression against a text, either by \
             simulating a Thompson NFA or by backtracking over the pattern's AST.",
        )
        .arg(
            Arg::with_name("regex")
                .help("The pattern to match.")
                .required(true)
                .conflicts_with("benchmark-file"),
        )
        .arg(
            Arg::with_name("file")
                .help("The file to be read, if none is specified, STDIN is used."),
        )
        .arg(
            Arg::with_name("partial")
                .short("p")
                .long("partial")
                .help("Accept a match of any contiguous substring instead of the whole text."),
        )
        .arg(
            Arg::with_name("use_backtrack")
                .short("b")
                .long("backtrack")
                .help("Match by backtracking over the AST instead of simulating the automaton."),
        )
        .arg(
            Arg::with_name("use_naive")
                .long("naive")
                .help("Match with the regex crate instead, as a cross-check of both matchers."),
        )
        .arg(
            Arg::with_name("encode")
                .short("e")
                .long("encode")
                .help("Print the canonical encoding of the compiled automaton."),
        )
        .arg(
            Arg::with_name("dot")
                .short("d")
                .long("dot")
                .takes_value(true)
                .help("Write the compiled automaton to a file as a Graphviz digraph."),
        )
        .arg(
            Arg::with_name("debug_infos")
                .short("i")
                .long("debug-infos")
                .help("Display debuging infos"),
        )
        .arg(
            Arg::with_name("benchmark")
                .long("benchmark")
                .help("Output statistics. Requiers one of benchmark-file or file to be present."),
        )
        .arg(
            Arg::with_name("benchmark-file")
                .long("benchmark-file")
                .help("Read a set of benchmarks from a file in JSON syntax. Implies --benchmark")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("repetitions")
                .long("repetitions")
                .takes_value(true)
                .default_value("10")
                .help("Number of timed runs per matcher when benchmarking."),
        )
        .get_matches();

    // Extract parameters
    let partial = matches.is_present("partial");
    let use_backtrack = matches.is_present("use_backtrack");
    let use_naive = matches.is_present("use_naive");
    let print_encoding = matches.is_present("encode");
    let debug_infos = matches.is_present("debug_infos");
    let benchmark = matches.is_present("benchmark");

    let repetitions = match matches.value_of("repetitions") {
        None => 10,
        Some(s) => match s.parse::<usize>() {
            Ok(n) => n,
            Err(_) => panic!("Not a number: {}", s),
        },
    };

    //  ____                  _                          _
    // | __ )  ___ _ __   ___| |__  _ __ ___   __ _ _ __| | __
    // |  _ \ / _ \ '_ \ / __| '_ \| '_ ` _ \ / _` | '__| |/ /
    // | |_) |  __/ | | | (__| | | | | | | | | (_| | |  |   <
    // |____/ \___|_| |_|\___|_| |_|_| |_| |_|\__,_|_|  |_|\_\
    //
    let benchmark_file = matches.value_of("benchmark-file");

    if benchmark_file != None {
        print!("[");
        let path = Path::new(benchmark_file.unwrap());
        let benchmarks = BenchmarkCase::read_from_file(&path).unwrap();
        let mut first = true;
        for benchmark in benchmarks {
            println!("{}", if first { "" } else { "," });
            let result = benchmark.run(repetitions).unwrap();
            print!("{}", serde_json::to_string_pretty(&result).unwrap());
            first = false;
        }
        println!("\n]");
        return;
    }

    let regex_str = matches.value_of("regex").unwrap();

    if benchmark {
        let benchmark_case = BenchmarkCase::new(
            "CLI Benchmark".to_string(),
            "Benchmark invoked by CLI.".to_string(),
            matches.value_of("file").unwrap().to_string(),
            regex_str.to_string(),
            partial,
        );
        let result = benchmark_case.run(repetitions).unwrap();

        print!("{}", serde_json::to_string_pretty(&result).unwrap());
        return;
    }

    //  ___                   _
    // |_ _|_ __  _ __  _   _| |_ ___
    //  | || '_ \| '_ \| | | | __/ __|
    //  | || | | | |_) | |_| | |_\__ \
    // |___|_| |_| .__/ \__,_|\__|___/
    //           |_|

    // Read the text
    let mut text = String::new();
    match matches.value_of("file") {
        Some(filename) => {
            let mut file = File::open(filename).unwrap();
            file.read_to_string(&mut text).unwrap()
        }
        None => stdin().read_to_string(&mut text).unwrap(),
    };

    // Remove trailing newlines
    while text.as_bytes().last() == Some(&b'\n') {
        text.pop();
    }

    //  __  __       _       _
    // |  \/  | __ _| |_ ___| |__
    // | |\/| |/ _` | __/ __| '_ \
    // | |  | | (_| | || (__| | | |
    // |_|  |_|\__,_|\__\___|_| |_|
    //
    let ast = match regex::parse(regex_str) {
        Ok(ast) => ast,
        Err(err) => {
            eprintln!("malformed pattern: {}", err);
            process::exit(2);
        }
    };
    let nfa = regex::thompson::compile(&ast);

    if let Some(filename) = matches.value_of("dot") {
        nfa.render(filename).expect("Could not create the dotfile.");
    }

    if print_encoding {
        println!("{}", nfa.encode());
    }

    let matched = if use_naive {
        let oracle = NaiveMatcher::new(&ast);
        if partial {
            oracle.is_match_partial(&text)
        } else {
            oracle.is_match(&text)
        }
    } else if use_backtrack {
        if partial {
            regex::backtrack::is_match_partial(&ast, &text)
        } else {
            regex::backtrack::is_match(&ast, &text)
        }
    } else if partial {
        nfa.is_match_partial(&text)
    } else {
        nfa.is_match(&text)
    };

    println!("{}", if matched { "match" } else { "no match" });

    //  ____       _                   ___        __
    // |  _ \  ___| |__  _   _  __ _  |_ _|_ __  / _| ___  ___
    // | | | |/ _ \ '_ \| | | |/ _` |  | || '_ \| |_ / _ \/ __|
    // | |_| |  __/ |_) | |_| | (_| |  | || | | |  _| (_) \__ \
    // |____/ \___|_.__/ \__,_|\__, | |___|_| |_|_|  \___/|___/
    //                         |___/
    if debug_infos {
        eprintln!("===== Debug Infos =====");
        eprintln!(" - Pattern: {}", ast);
        eprintln!(" - AST: {:#?}", ast);
        eprintln!(" - States count: {}", nfa.nb_states());
    }

    process::exit(if matched { 0 } else { 1 });
}
