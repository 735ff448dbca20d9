use crate::config::OriginConfig;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::models::NewComment;
use crate::output::{PipelineOutput, OUT_MIRROR_ISSUE_URL};

use super::create_mirror::DRY_RUN_ISSUE_URL;

/// Back-link comment posted on the origin issue. The mirror URL is
/// embedded literally, unescaped.
pub fn comment_body(mirror_url: &str) -> String {
    format!(
        "> [!Note]\n\
         >\n\
         > **This issue has been mirrored to Codeberg:**\n\
         > 👉 [View on Codeberg]({url})\n\
         \n\
         *This is an automated answer.*\n",
        url = mirror_url,
    )
}

pub async fn notify_origin(
    github: &GitHubClient,
    origin: &OriginConfig,
    mirror_url: &str,
    dry_run: bool,
    output: &mut PipelineOutput,
) -> Result<()> {
    let payload = NewComment {
        body: comment_body(mirror_url),
    };

    if dry_run {
        tracing::info!("Dry run: skipping comment on origin issue");
        println!("POST DATA: {}", serde_json::to_string(&payload)?);
        // Stub value so test harnesses reading the output file see the key.
        output.set(OUT_MIRROR_ISSUE_URL, DRY_RUN_ISSUE_URL)?;
        return Ok(());
    }

    let comment = github
        .post_comment(&origin.repo, origin.issue_number, &payload)
        .await?;
    tracing::info!("Back-link comment posted: {}", comment.html_url);

    Ok(())
}
