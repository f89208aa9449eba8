//! Command-line interface for fieldpath
//! Expands compact field selections into flat dotted paths and reads their parameter blocks.
//!
//! Usage:
//!   fieldpath expand [`<input>`...] [--format `<format>`] [--with-params]   - Expand field selections
//!   fieldpath params `<field>`... [--format `<format>`]                     - Show parameter blocks
//!
//! Without inputs, `expand` reads one selection per non-empty line of stdin.
//! Settings come from the embedded defaults, then `--config <file>`, then flags.
mod output;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use fieldpath_config::{FieldpathConfig, Loader};
use fieldpath_parser::fields::FieldsParser;
use output::{ParamsRecord, PathRecord};
use std::fmt::Display;
use std::io::BufRead;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("expand", expand_matches)) => handle_expand_command(expand_matches),
        Some(("params", params_matches)) => handle_params_command(params_matches),
        _ => unreachable!(),
    }
}

fn cli() -> Command {
    let format = Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format (overrides output.format)")
        .value_parser(["lines", "json", "yaml"]);

    Command::new("fieldpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Expands field selections like a.(b,c).d into flat dotted paths")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Log more (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence"),
        )
        .subcommand(
            Command::new("expand")
                .about("Expand field selections")
                .arg(
                    Arg::new("input")
                        .help("Field selections to expand (default: read stdin)")
                        .num_args(0..)
                        .index(1),
                )
                .arg(Arg::new("open").long("open").help("Group open marker"))
                .arg(Arg::new("close").long("close").help("Group close marker"))
                .arg(
                    Arg::new("delimiter")
                        .long("delimiter")
                        .short('d')
                        .help("Alternative delimiter"),
                )
                .arg(
                    Arg::new("max-len")
                        .long("max-len")
                        .value_parser(value_parser!(usize))
                        .help("Give up once the expanded text passes this many bytes (0: unbounded)"),
                )
                .arg(
                    Arg::new("with-params")
                        .long("with-params")
                        .action(ArgAction::SetTrue)
                        .help("Include the parameter block of each path"),
                )
                .arg(format.clone()),
        )
        .subcommand(
            Command::new("params")
                .about("Show the parameter block of each field")
                .arg(
                    Arg::new("field")
                        .help("Expanded fields, e.g. 'site.id{one=param}'")
                        .required(true)
                        .num_args(1..)
                        .index(1),
                )
                .arg(format),
        )
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn fail(message: impl Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

/// Layers `--config` and the command's flags over the defaults
fn load_config(matches: &ArgMatches) -> FieldpathConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        info!(path = %path, "loading configuration file");
        loader = loader.with_file(path);
    }

    let overrides = [
        ("markers.open", "open"),
        ("markers.close", "close"),
        ("markers.delimiter", "delimiter"),
        ("output.format", "format"),
    ];
    for (key, arg) in overrides {
        let value = matches
            .try_get_one::<String>(arg)
            .ok()
            .flatten()
            .map(String::as_str);
        if let Some(value) = value {
            loader = loader
                .set_override(key, value)
                .unwrap_or_else(|e| fail(format!("invalid --{}: {}", arg, e)));
        }
    }
    if let Some(len) = matches.try_get_one::<usize>("max-len").ok().flatten() {
        loader = max_len_value(*len)
            .and_then(|value| {
                loader
                    .set_override("expansion.max_expanded_len", value)
                    .map_err(|e| e.to_string())
            })
            .unwrap_or_else(|e| fail(format!("invalid --max-len: {}", e)));
    }

    loader
        .build()
        .unwrap_or_else(|e| fail(format!("configuration: {}", e)))
}

/// Config integers are `i64`
fn max_len_value(len: usize) -> Result<i64, String> {
    i64::try_from(len).map_err(|_| format!("{} exceeds {}", len, i64::MAX))
}

fn read_inputs(matches: &ArgMatches) -> Vec<String> {
    if let Some(inputs) = matches.get_many::<String>("input") {
        return inputs.cloned().collect();
    }

    debug!("reading selections from stdin");
    std::io::stdin()
        .lock()
        .lines()
        .map(|line| line.unwrap_or_else(|e| fail(format!("reading stdin: {}", e))))
        .map(|line| line.trim_end_matches('\r').to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

fn expand_all(parser: &FieldsParser, inputs: &[String]) -> Vec<String> {
    let mut paths = Vec::new();
    for input in inputs {
        let expanded = parser
            .parse(Some(input))
            .unwrap_or_else(|e| fail(format!("{}: {}", input, e)));
        debug!(input = %input, paths = expanded.len(), "expanded selection");
        paths.extend(expanded);
    }
    paths
}

/// Handle the expand command
fn handle_expand_command(matches: &ArgMatches) {
    let config = load_config(matches);
    let parser = config
        .parser()
        .unwrap_or_else(|e| fail(format!("invalid markers: {}", e)));
    let inputs = read_inputs(matches);
    let paths = expand_all(&parser, &inputs);
    info!(inputs = inputs.len(), paths = paths.len(), "expansion done");

    let rendered = if matches.get_flag("with-params") {
        let decode = config.output.decode_params;
        let records: Vec<PathRecord> = paths
            .iter()
            .map(|path| PathRecord::new(path, decode))
            .collect();
        output::render(&records, config.output.format)
    } else {
        output::render(&paths, config.output.format)
    };
    print!("{}", rendered.unwrap_or_else(|e| fail(e)));
}

/// Handle the params command
fn handle_params_command(matches: &ArgMatches) {
    let config = load_config(matches);
    let records: Vec<ParamsRecord> = matches
        .get_many::<String>("field")
        .into_iter()
        .flatten()
        .map(|field| ParamsRecord::new(field, config.output.decode_params))
        .collect();

    let rendered = output::render(&records, config.output.format);
    print!("{}", rendered.unwrap_or_else(|e| fail(e)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_len_value_in_range() {
        assert_eq!(max_len_value(0), Ok(0));
        assert_eq!(max_len_value(4096), Ok(4096));
    }

    #[test]
    fn test_max_len_value_out_of_range() {
        let len = usize::MAX;
        if let Ok(value) = i64::try_from(len) {
            assert_eq!(max_len_value(len), Ok(value));
        } else {
            let err = max_len_value(len).unwrap_err();
            assert!(err.contains("exceeds"), "{}", err);
        }
    }
}
