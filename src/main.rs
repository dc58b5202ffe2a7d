use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use onboarding_kit::build_brief;
use onboarding_kit::manifest::{self, SitePlan};
use onboarding_kit::publish::{publish, FtpsSite};

#[derive(Parser, Debug)]
#[command(name = "onboarding-kit")]
#[command(about = "Deploy the Brother Brooklyn onboarding pages and generate the client brief")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Publish the onboarding pages to the hosting account over FTPS
    Deploy(DeployArgs),
    /// Generate the client onboarding brief PDF
    Brief(BriefArgs),
}

#[derive(Args, Debug)]
struct DeployArgs {
    /// FTPS host
    #[arg(long, default_value = manifest::FTP_HOST, env = "DEPLOY_FTP_HOST")]
    host: String,

    /// FTPS control port
    #[arg(long, default_value = "21", env = "DEPLOY_FTP_PORT")]
    port: u16,

    /// Account user
    #[arg(long, default_value = manifest::FTP_USER, env = "DEPLOY_FTP_USER")]
    user: String,

    /// Account password
    #[arg(long, env = "DEPLOY_FTP_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Args, Debug)]
struct BriefArgs {
    /// Where to write the PDF
    #[arg(long, default_value = "Brother_Brooklyn_Onboarding.pdf")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Deploy(args) => deploy(args),
        Command::Brief(args) => brief(args),
    }
}

fn deploy(args: DeployArgs) -> anyhow::Result<()> {
    let plan = SitePlan::brother_brooklyn();
    let mut site = FtpsSite::connect(&args.host, args.port, &args.user, &args.password)?;

    let report = publish(&mut site, &plan)?;

    for error in &report.errors {
        warn!("Best-effort step failed: {error}");
    }
    for skipped in &report.skipped {
        println!("Skipped missing file: {skipped}");
    }

    println!("\nAll uploads complete!");
    println!("Live at: {}", manifest::LIVE_URL);
    Ok(())
}

fn brief(args: BriefArgs) -> anyhow::Result<()> {
    let summary = build_brief(&args.output)?;
    println!(
        "PDF saved to: {} ({} pages)",
        args.output.display(),
        summary.pages
    );
    Ok(())
}
