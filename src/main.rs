//! sparql - decode SPARQL JSON results and work with query banks.
//!
//! Usage:
//!   sparql decode results.json --view bindings
//!   curl -s ... | sparql decode - --format json
//!   sparql bank list queries.rq
//!   sparql bank prepare queries.rq find-people --param Class=http://xmlns.com/foaf/0.1/Person

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sparql_client::{DateFormat, QueryBank, ResolverConfig, ResultSet, Solution};
use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "sparql")]
#[command(version)]
#[command(about = "Decode SPARQL JSON results into RDF terms and prepare queries from a query bank")]
struct Cli {
    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode an application/sparql-results+json document
    Decode(DecodeArgs),

    /// Inspect a query bank file
    #[command(subcommand)]
    Bank(BankCommand),
}

#[derive(clap::Args, Debug)]
struct DecodeArgs {
    /// Results file, or - for stdin
    #[arg(default_value = "-")]
    input: String,

    /// Which projection of the results to print
    #[arg(long, value_enum, default_value_t = View::Solutions)]
    view: View,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// strftime pattern for xsd:dateTime values (default: RFC 3339)
    #[arg(long)]
    date_format: Option<String>,

    /// Coerce plain literals that carry a datatype
    #[arg(long)]
    literal_datatypes: bool,

    /// JSON file holding resolver settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum BankCommand {
    /// List the query names in a bank
    List {
        /// Query bank file
        file: PathBuf,
    },

    /// Print a query with its placeholders filled in
    Prepare {
        /// Query bank file
        file: PathBuf,

        /// Query name
        key: String,

        /// Placeholder value as NAME=VALUE (repeatable)
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum View {
    Solutions,
    Bindings,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_param(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected NAME=VALUE, got {:?}", raw))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    tracing_subscriber::fmt().with_max_level(level).with_writer(io::stderr).init();

    match cli.command {
        Command::Decode(args) => decode(&args),
        Command::Bank(BankCommand::List { file }) => {
            let bank = QueryBank::from_path(&file).with_context(|| format!("reading {}", file.display()))?;
            for key in bank.keys() {
                println!("{}", key);
            }
            Ok(())
        }
        Command::Bank(BankCommand::Prepare { file, key, params }) => {
            let bank = QueryBank::from_path(&file).with_context(|| format!("reading {}", file.display()))?;
            let query = if params.is_empty() {
                bank.prepare(&key)?
            } else {
                let params: HashMap<String, String> = params.into_iter().collect();
                bank.prepare_with(&key, &params)?
            };
            println!("{}", query.trim_end());
            Ok(())
        }
    }
}

fn resolver_config(args: &DecodeArgs) -> Result<ResolverConfig> {
    let mut config: ResolverConfig = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing resolver config {}", path.display()))?
        }
        None => ResolverConfig::default(),
    };
    if let Some(pattern) = &args.date_format {
        config.date_format = DateFormat::pattern(pattern.as_str());
    }
    if args.literal_datatypes {
        config.literal_datatypes = true;
    }
    Ok(config)
}

fn decode(args: &DecodeArgs) -> Result<()> {
    let config = resolver_config(args)?;

    let results = if args.input == "-" {
        ResultSet::from_reader(io::stdin().lock()).context("decoding stdin")?
    } else {
        let file = File::open(&args.input).with_context(|| format!("opening {}", args.input))?;
        ResultSet::from_reader(BufReader::new(file)).with_context(|| format!("decoding {}", args.input))?
    };

    if let Some(answer) = results.boolean() {
        println!("{}", answer);
        return Ok(());
    }

    match (args.view, args.format) {
        (View::Solutions, OutputFormat::Text) => {
            for solution in results.solutions_with(&config) {
                println!("{}", solution_line(results.vars(), &solution));
            }
        }
        (View::Solutions, OutputFormat::Json) => {
            let rows: Vec<BTreeMap<String, String>> = results
                .solutions_with(&config)
                .into_iter()
                .map(|solution| solution.into_iter().map(|(var, term)| (var, term.to_string())).collect())
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        (View::Bindings, format) => {
            let bindings = results.bindings_with(&config);
            let mut vars: Vec<&String> = Vec::new();
            for var in results.vars() {
                if bindings.contains_key(var) && !vars.contains(&var) {
                    vars.push(var);
                }
            }

            if format == OutputFormat::Json {
                let columns: BTreeMap<&str, Vec<String>> = vars
                    .iter()
                    .map(|var| (var.as_str(), bindings[*var].iter().map(ToString::to_string).collect()))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&columns)?);
            } else {
                for var in vars {
                    let terms: Vec<String> = bindings[var].iter().map(ToString::to_string).collect();
                    println!("?{}\t{}", var, terms.join(" "));
                }
            }
        }
    }

    Ok(())
}

/// Declared variables first, in header order, then any undeclared ones
fn solution_line(vars: &[String], solution: &Solution) -> String {
    let mut cells: Vec<String> = vars
        .iter()
        .filter_map(|var| solution.get(var).map(|term| format!("?{}={}", var, term)))
        .collect();

    let mut extra: Vec<(&str, String)> = solution
        .iter()
        .filter(|(var, _)| !vars.iter().any(|declared| declared == var))
        .map(|(var, term)| (var, format!("?{}={}", var, term)))
        .collect();
    extra.sort();
    cells.extend(extra.into_iter().map(|(_, cell)| cell));

    cells.join("\t")
}
