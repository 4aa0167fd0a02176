use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crystallize_onboard::config::DEFAULT_ENV_FILE;
use crystallize_onboard::prompt::TerminalPrompter;
use crystallize_onboard::tenant::ResolvedTenant;
use crystallize_onboard::{
    resolve_tenant, select_shape, OnboardConfig, OnboardError, ResolveOptions, SelectedShape,
    ShapeQuery,
};

#[derive(Parser, Debug)]
#[command(
    name = "crystallize-onboard",
    about = "Resolve the Crystallize tenant, credentials and language for import scripts",
    version
)]
struct Cli {
    /// Env file to read credentials from and write them back to
    #[arg(long, value_name = "PATH", default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Do not select a language
    #[arg(long)]
    skip_language: bool,

    /// Also select a shape
    #[arg(long)]
    shape: bool,

    /// Only offer shapes of this type (implies --shape)
    #[arg(long, value_name = "TYPE")]
    shape_type: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Output {
    #[serde(flatten)]
    tenant: ResolvedTenant,
    #[serde(skip_serializing_if = "Option::is_none")]
    shape: Option<SelectedShape>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "✗".red().bold(), e.to_string().red());
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("crystallize_onboard=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), OnboardError> {
    let config = OnboardConfig::from_env_and_file(&cli.env_file)?;
    let prompter = TerminalPrompter::new();

    let options = ResolveOptions {
        skip_language: cli.skip_language,
    };
    let context = resolve_tenant(&config, &prompter, options).await?;

    let shape = if cli.shape || cli.shape_type.is_some() {
        let query = match cli.shape_type.as_deref() {
            Some(shape_type) => ShapeQuery::new().of_type(shape_type),
            None => ShapeQuery::new(),
        };
        Some(select_shape(&context, &prompter, query).await?)
    } else {
        None
    };

    let output = Output {
        tenant: context.resolved(),
        shape,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_summary(&output);
    }

    Ok(())
}

fn print_summary(output: &Output) {
    println!(
        "{} {} ({})",
        "Tenant:".bold(),
        output.tenant.tenant_identifier,
        output.tenant.tenant_id
    );
    if let Some(language) = &output.tenant.language {
        println!("{} {}", "Language:".bold(), language);
    }
    if let Some(shape) = &output.shape {
        println!("{} {} ({})", "Shape:".bold(), shape.shape.name, shape.shape_id);
        println!("{} {}", "Root item:".bold(), shape.root_item_id);
    }
}
