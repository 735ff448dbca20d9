use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use issuemirror::models::OriginIssue;
use issuemirror::{
    config, CodebergClient, GitHubClient, MirrorConfig, OriginConfig, PipelineOutput,
};

#[derive(Parser, Debug)]
#[command(name = "issuemirror")]
#[command(version = "0.1.0")]
#[command(about = "Mirror GitHub issues to Codeberg and back-link them")]
struct Args {
    /// Skip all network calls and print the would-be request payloads
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the mirror issue on Codeberg from the origin issue
    CreateMirrorIssue,
    /// Apply the "GitHub" label to an existing mirror issue
    LabelMirrorIssue,
    /// Comment on the origin issue with a link to its mirror
    NotifyOrigin,
    /// Run all three steps in sequence
    Run,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("issuemirror=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let dry_run = args.dry_run || config::dry_run_from_env();
    let mut output = PipelineOutput::from_env();

    match args.command {
        Command::CreateMirrorIssue => {
            let mirror = MirrorConfig::from_env()?;
            let issue = OriginIssue::from_env()?;
            let codeberg = CodebergClient::new(&mirror.token)?;
            issuemirror::create_mirror_issue(&codeberg, &mirror, &issue, dry_run, &mut output)
                .await?;
        }
        Command::LabelMirrorIssue => {
            let mirror = MirrorConfig::from_env()?;
            let number = config::mirror_issue_number_from_env()?;
            let codeberg = CodebergClient::new(&mirror.token)?;
            issuemirror::label_mirror_issue(&codeberg, &mirror, number, dry_run).await?;
        }
        Command::NotifyOrigin => {
            let origin = OriginConfig::from_env()?;
            let mirror_url = config::mirror_issue_url_from_env()?;
            let github = GitHubClient::new(&origin.token)?;
            issuemirror::notify_origin(&github, &origin, &mirror_url, dry_run, &mut output)
                .await?;
        }
        Command::Run => {
            let mirror = MirrorConfig::from_env()?;
            let origin = OriginConfig::from_env()?;
            let issue = OriginIssue::from_env()?;
            let codeberg = CodebergClient::new(&mirror.token)?;
            let github = GitHubClient::new(&origin.token)?;
            let mirrored = issuemirror::run_pipeline(
                &codeberg, &github, &mirror, &origin, &issue, dry_run, &mut output,
            )
            .await?;
            tracing::info!("Issue mirrored to {}", mirrored.url);
        }
    }

    Ok(())
}
