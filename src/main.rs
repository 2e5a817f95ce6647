use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use wp_create::cli::commands::CreateCommand;
use wp_create::cli::output::{self, style, ROCKET};
use wp_create::cli::{Cli, Command};
use wp_create::core::config::WP_INSTALL_URI;
use wp_create::execution::plan;
use wp_create::{notify, prompt, provisioning_steps, ProvisionEngine, SystemRunner, WpCli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    match &cli.command {
        Command::Create(cmd) => {
            // anything outside the pipeline lands here: print and exit 1
            if let Err(error) = create(cmd).await {
                eprintln!("{error:#}");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

async fn create(cmd: &CreateCommand) -> Result<()> {
    if cmd.dry_run {
        let config = prompt::collect(cmd)?;
        let planned = plan(&provisioning_steps(), &config);
        if cmd.json {
            println!("{}", serde_json::to_string_pretty(&planned)?);
        } else {
            output::print_plan(&planned);
        }
        return Ok(());
    }

    // check the external tool before asking the user anything
    let wp = WpCli::with_binary(SystemRunner, cmd.wp_path.clone());
    wp.ensure_available().await.with_context(|| {
        format!(
            "WP-CLI was not found (tried `{}`). Install it: {}",
            cmd.wp_path, WP_INSTALL_URI
        )
    })?;

    let config = prompt::collect(cmd)?;

    println!(
        "{} Creating project {}",
        ROCKET,
        style(&config.project_name).bold()
    );
    println!();

    let renderer = output::StepRenderer::new();
    let mut engine = ProvisionEngine::new(wp);
    engine.add_event_handler(move |event| renderer.handle(event));

    match engine.run(&provisioning_steps(), &config).await {
        Ok(()) => {
            output::print_success_report(&config);
            notify::completion(&config.project_name);
            Ok(())
        }
        Err(error) => {
            output::print_failure(&error.to_string());
            std::process::exit(1);
        }
    }
}
