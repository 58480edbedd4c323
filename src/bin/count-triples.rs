extern crate env_logger;
#[macro_use]
extern crate clap;
#[macro_use]
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate triple_count;

use clap::{App, Arg};
use failure::Error;
use itertools::Itertools;
use std::fs::File;
use std::io::Read;
use std::str::FromStr;
use triple_count::{count_brute, Method, Problem};

fn read_input(path: Option<&str>) -> Result<String, Error> {
    let mut input = String::new();
    match path {
        Some(path) => {
            File::open(path)
                .map_err(|e| format_err!("can't open {}: {}", path, e))?
                .read_to_string(&mut input)?;
        }
        None => {
            let stdin = std::io::stdin();
            stdin.lock().read_to_string(&mut input)?;
        }
    }
    Ok(input)
}

/// Render `error` and its causes as a single line for the terminal.
fn diagnostic(error: &Error) -> String {
    error.iter_chain().map(|cause| cause.to_string()).join(": ")
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().filter_or("TRIPLES_LOG", "warn"));

    if let Err(e) = run() {
        eprintln!("count-triples: {}", diagnostic(&e));
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let matches = App::new("count-triples")
        .about("Counts index triples where exactly two of the three values are equal")
        .arg(
            Arg::with_name("method")
                .short("m")
                .long("method")
                .help("Counting method to use")
                .takes_value(true)
                .value_name("METHOD")
                .possible_values(&["formula", "pairwise", "brute"])
                .default_value("formula"),
        )
        .arg(
            Arg::with_name("check")
                .long("check")
                .help("Also count by brute force and fail if the results differ"),
        )
        .arg(
            Arg::with_name("INPUT")
                .help("File to read instead of standard input")
                .index(1),
        )
        .get_matches();

    let method = value_t!(matches, "method", Method).unwrap_or_else(|e| e.exit());

    let input = read_input(matches.value_of("INPUT"))?;
    let problem = Problem::from_str(&input)?;
    info!("read {} values, counting with {}", problem.len(), method);

    let answer = method.count(problem.values())?;

    if matches.is_present("check") {
        let expected = count_brute(problem.values())?;
        if answer != expected {
            return Err(format_err!(
                "{} counted {}, but brute force counted {}",
                method,
                answer,
                expected
            ));
        }
        debug!("brute force agrees: {}", expected);
    }

    println!("{}", answer);

    Ok(())
}
