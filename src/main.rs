use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::process;

use chrono::{SecondsFormat, Utc};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use env_logger::Env;
use log::error;

use wordbanks::config::{Paths, DEFAULT_DATA_DIR};
use wordbanks::handlers::{self, verify::VerifyOptions};

// Function to initialize logging
fn init_logging(log_file: Option<&PathBuf>) -> std::io::Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        writeln!(buf, "[{}] {} {}", timestamp, record.level(), record.args())
    });

    if let Some(file) = log_file {
        let log_output = OpenOptions::new().create(true).append(true).open(file)?;
        builder.target(env_logger::Target::Pipe(Box::new(log_output)));
    }

    builder.init();
    Ok(())
}

fn cli() -> Command {
    Command::new("wordbanks")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Builds and maintains length-bucketed wordbanks for the word game")
        .subcommand_required(true)
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_DATA_DIR)
                .help("Directory holding english_words/, wordbanks/ and wordbanks_original/"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .global(true)
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .help("Specify a log file path (if omitted, logs to stderr)"),
        )
        .subcommand(
            Command::new("generate")
                .about("Filter the word corpus and write one wordbank per word length"),
        )
        .subcommand(
            Command::new("merge")
                .about("Re-filter snapshot wordbanks and merge them into existing wordbanks"),
        )
        .subcommand(
            Command::new("verify")
                .about("Check wordbanks for wrong-length, repeated or already-used words")
                .arg(
                    Arg::new("fix")
                        .long("fix")
                        .action(ArgAction::SetTrue)
                        .help("Drop offending entries and rewrite the wordbank"),
                )
                .arg(
                    Arg::new("shuffle-seed")
                        .long("shuffle-seed")
                        .num_args(1)
                        .value_parser(value_parser!(u64))
                        .requires("fix")
                        .help("Shuffle unused words of rewritten wordbanks with this seed"),
                ),
        )
}

fn dispatch(matches: &ArgMatches, paths: &Paths) -> wordbanks::error::Result<()> {
    match matches.subcommand() {
        Some(("generate", _)) => handlers::generate::run(paths),
        Some(("merge", _)) => handlers::merge::run(paths),
        Some(("verify", sub)) => handlers::verify::run(
            paths,
            VerifyOptions {
                fix: sub.get_flag("fix"),
                shuffle_seed: sub.get_one::<u64>("shuffle-seed").copied(),
            },
        ),
        _ => unreachable!("subcommand is required"),
    }
}

fn main() {
    let matches = cli().get_matches();

    let log_file = matches.get_one::<PathBuf>("log-file");
    if let Err(e) = init_logging(log_file) {
        eprintln!("error: cannot open log file: {}", e);
        process::exit(1);
    }

    let data_dir = matches
        .get_one::<PathBuf>("data-dir")
        .expect("data-dir argument must always have a default value");
    let paths = Paths::from_data_dir(data_dir);

    if let Err(e) = dispatch(&matches, &paths) {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
