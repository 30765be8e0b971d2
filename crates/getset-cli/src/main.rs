use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use getset_config::{ConfigDiagnostics, GetsetConfig};
use getset_core::{ClassSnapshot, FieldAccessorGenerator, GenerateOptions, GeneratedMethod};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "getset", version, about = "Generate getters and setters for Java class fields")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate accessors for a class snapshot (JSON)
    Generate(GenerateArgs),
    /// Print the JSON schema of `getset.toml`
    Schema,
}

#[derive(Args)]
struct GenerateArgs {
    /// Class snapshot file, or `-` for stdin
    snapshot: PathBuf,
    /// Config file (defaults to discovery from the current directory)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Emit JSON instead of method source text
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            2
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Generate(args) => {
            let (config, diagnostics) = load_config(args.config.as_deref())?;
            getset_config::init_tracing(&config.logging);
            diagnostics.report();

            let snapshot = read_snapshot(&args.snapshot)?;
            let generator = FieldAccessorGenerator::new(GenerateOptions {
                labels: config.doc_labels(),
            });
            let methods = generator.generate_for(&snapshot);
            tracing::info!(
                target: "getset.cli",
                class = snapshot.name.as_deref().unwrap_or("<anonymous>"),
                generated = methods.len(),
                "generated accessors"
            );

            print_methods(&methods, args.json)?;
            Ok(0)
        }
        Command::Schema => {
            let schema = getset_config::json_schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(0)
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<(GetsetConfig, ConfigDiagnostics)> {
    if let Some(path) = explicit {
        return GetsetConfig::load_from_path_with_diagnostics(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let (config, _path, diagnostics) = getset_config::load_for_workspace_with_diagnostics(&cwd)?;
    Ok((config, diagnostics))
}

fn read_snapshot(path: &Path) -> Result<ClassSnapshot> {
    let text = if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read class snapshot from stdin")?;
        text
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read class snapshot {}", path.display()))?
    };

    serde_json::from_str(&text).context("invalid class snapshot")
}

fn print_methods(methods: &[GeneratedMethod], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(methods)?);
        return Ok(());
    }

    for (idx, method) in methods.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        println!("{}", method.source_text.trim_end_matches('\n'));
    }
    Ok(())
}
