//! Command-line interface for lorg
//!
//! Parses a lorg file, aggregates its unit values and prints the result.
//!
//! Usage:
//!   lorg `<file>`             - flat indented text
//!   lorg -p `<file>`          - connector-drawn tree view
//!   lorg -j [-p] `<file>`     - JSON (optionally indented)
//!   lorg -y `<file>`          - YAML
//!   lorg -t `<file>`          - show the TOTAL node itself

use clap::{Arg, ArgAction, Command};

use lorg::lorg::processor::{self, OutputFormat, ProcessingError, RenderOptions};

const EXIT_CODE_ERROR_ARGUMENTS: i32 = 1;
const EXIT_CODE_ERROR_PARSE: i32 = 2;

fn main() {
    let matches = Command::new("lorg")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse a lorg outline and aggregate its unit values")
        .arg(
            Arg::new("file")
                .help("Path to the lorg file to process")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("total")
                .short('t')
                .long("total")
                .action(ArgAction::SetTrue)
                .help("Display the synthetic TOTAL node instead of its children"),
        )
        .arg(
            Arg::new("prettify")
                .short('p')
                .long("prettify")
                .action(ArgAction::SetTrue)
                .help("Pretty output: tree view for text, indented for JSON"),
        )
        .arg(
            Arg::new("json")
                .short('j')
                .long("json")
                .action(ArgAction::SetTrue)
                .conflicts_with("yaml")
                .help("Output JSON"),
        )
        .arg(
            Arg::new("yaml")
                .short('y')
                .long("yaml")
                .action(ArgAction::SetTrue)
                .help("Output YAML"),
        )
        .get_matches();

    let file = matches.get_one::<String>("file").unwrap();
    let options = RenderOptions {
        format: select_format(
            matches.get_flag("json"),
            matches.get_flag("yaml"),
            matches.get_flag("prettify"),
        ),
        show_total: matches.get_flag("total"),
    };

    match processor::process_file(file, &options) {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        Err(error @ ProcessingError::Parse(_)) => {
            eprintln!("{}", error);
            std::process::exit(EXIT_CODE_ERROR_PARSE);
        }
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(EXIT_CODE_ERROR_ARGUMENTS);
        }
    }
}

fn select_format(json: bool, yaml: bool, prettify: bool) -> OutputFormat {
    match (json, yaml, prettify) {
        (true, _, true) => OutputFormat::JsonPretty,
        (true, _, false) => OutputFormat::Json,
        (false, true, _) => OutputFormat::Yaml,
        (false, false, true) => OutputFormat::Treeviz,
        (false, false, false) => OutputFormat::Simple,
    }
}
