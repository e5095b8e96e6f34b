//! Command-line definition and argument extraction.

use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command, value_parser};
use mirrorgen_engine::ScanMode;

pub fn build_cli() -> Command {
    Command::new("mirrorgen")
        .about("Generate forwarding wrappers and behavioral interfaces for a Go package")
        .arg(
            Arg::new("pkg")
                .long("pkg")
                .value_name("PATH")
                .required(true)
                .help("Import path of the package to scan"),
        )
        .arg(
            Arg::new("scan")
                .long("scan")
                .value_name("MODE")
                .default_value("1")
                .value_parser(["0", "1"])
                .help("Scan mode: 0 = all declarations, 1 = exported only"),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .value_name("STRATEGY")
                .default_value("interface")
                .help("Render strategy (wrapper, interface)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Output file (stdout if omitted)"),
        )
}

pub struct Params {
    pub pkg: String,
    pub scan: ScanMode,
    pub mode: String,
    pub output: Option<PathBuf>,
}

impl Params {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let scan = match matches.get_one::<String>("scan").map(String::as_str) {
            Some("0") => ScanMode::All,
            _ => ScanMode::Public,
        };
        Params {
            pkg: matches
                .get_one::<String>("pkg")
                .cloned()
                .unwrap_or_default(),
            scan,
            mode: matches
                .get_one::<String>("mode")
                .cloned()
                .unwrap_or_default(),
            output: matches.get_one::<PathBuf>("output").cloned(),
        }
    }
}
