use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use cloudadvisor::config::Config;
use cloudadvisor::output::OutputFormat;
use cloudadvisor::rules::{Domain, RuleEngine};
use cloudadvisor::AnalyzeOptions;

#[derive(Parser)]
#[command(
    name = "cloudadvisor",
    about = "Recommendation engine for cloud resource inventory audits",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an inventory snapshot and print recommendations
    Analyze {
        /// Path to the snapshot JSON file
        snapshot: PathBuf,

        /// Config file path
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Output format (console, markdown, json)
        #[arg(long, short = 'f', default_value = "console")]
        format: String,

        /// Restrict analysis to these domains (networking, compute, security)
        #[arg(long, value_delimiter = ',')]
        domains: Option<Vec<String>>,

        /// Write output to file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// List all available heuristic rules
    ListRules {
        /// Output format (table, json)
        #[arg(long, short = 'f', default_value = "table")]
        format: String,
    },

    /// Generate a starter .cloudadvisor.toml config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            snapshot,
            config,
            format,
            domains,
            output,
        } => cmd_analyze(snapshot, config, format, domains, output),
        Commands::ListRules { format } => cmd_list_rules(format),
        Commands::Init { force } => cmd_init(force),
    };

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn cmd_analyze(
    snapshot: PathBuf,
    config: Option<PathBuf>,
    format_str: String,
    domains_str: Option<Vec<String>>,
    output_path: Option<PathBuf>,
) -> Result<i32, cloudadvisor::error::AdvisorError> {
    let format = OutputFormat::from_str_lenient(&format_str).unwrap_or_else(|| {
        eprintln!("Warning: unknown format '{}', using console", format_str);
        OutputFormat::Console
    });

    let domains_override = domains_str.map(|list| {
        list.iter()
            .filter_map(|s| {
                let domain = Domain::from_str_lenient(s);
                if domain.is_none() {
                    eprintln!("Warning: unknown domain '{}', skipping", s);
                }
                domain
            })
            .collect()
    });

    let options = AnalyzeOptions {
        config_path: config,
        format,
        domains_override,
    };

    let report = cloudadvisor::analyze_snapshot(&snapshot, &options)?;
    let rendered = cloudadvisor::render_report(&report, format)?;

    match output_path {
        Some(out) => std::fs::write(&out, &rendered)?,
        None => print!("{}", rendered),
    }

    Ok(0)
}

fn cmd_list_rules(format_str: String) -> Result<i32, cloudadvisor::error::AdvisorError> {
    let engine = RuleEngine::new();
    let rules = engine.list_rules();

    match format_str.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&rules)?;
            println!("{}", json);
        }
        _ => {
            println!(
                "{:<14} {:<28} {:<12} {:<15} IMPACT/EFFORT",
                "ID", "NAME", "DOMAIN", "CATEGORY"
            );
            println!("{}", "-".repeat(84));
            for rule in &rules {
                println!(
                    "{:<14} {:<28} {:<12} {:<15} {}/{}",
                    rule.id,
                    rule.name,
                    rule.domain.to_string(),
                    rule.category.to_string(),
                    rule.default_impact,
                    rule.default_effort,
                );
            }
        }
    }

    Ok(0)
}

fn cmd_init(force: bool) -> Result<i32, cloudadvisor::error::AdvisorError> {
    let path = PathBuf::from(".cloudadvisor.toml");

    if path.exists() && !force {
        eprintln!(".cloudadvisor.toml already exists. Use --force to overwrite.");
        return Ok(1);
    }

    std::fs::write(&path, Config::starter_toml())?;
    println!("Created .cloudadvisor.toml");

    Ok(0)
}
