pub mod create_mirror;
pub mod label_mirror;
pub mod notify_origin;

pub use create_mirror::create_mirror_issue;
pub use label_mirror::label_mirror_issue;
pub use notify_origin::notify_origin;

use crate::codeberg::CodebergClient;
use crate::config::{MirrorConfig, OriginConfig};
use crate::error::Result;
use crate::github::GitHubClient;
use crate::models::{MirrorIssueRef, OriginIssue};
use crate::output::PipelineOutput;

/// Run all three mirroring steps in sequence, threading the created
/// mirror issue into the labeling and notification steps. Halts at the
/// first failed step.
pub async fn run_pipeline(
    codeberg: &CodebergClient,
    github: &GitHubClient,
    mirror: &MirrorConfig,
    origin: &OriginConfig,
    issue: &OriginIssue,
    dry_run: bool,
    output: &mut PipelineOutput,
) -> Result<MirrorIssueRef> {
    let mirrored = create_mirror_issue(codeberg, mirror, issue, dry_run, output).await?;
    label_mirror_issue(codeberg, mirror, mirrored.number, dry_run).await?;
    notify_origin(github, origin, &mirrored.url, dry_run, output).await?;
    Ok(mirrored)
}
