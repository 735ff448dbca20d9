use crate::codeberg::CodebergClient;
use crate::config::MirrorConfig;
use crate::error::Result;
use crate::models::{MirrorIssueRef, NewIssue, OriginIssue};
use crate::output::{PipelineOutput, OUT_MIRROR_ISSUE_NUMBER, OUT_MIRROR_ISSUE_URL};

/// Stub mirror issue number emitted in dry runs.
pub const DRY_RUN_ISSUE_NUMBER: u64 = 1;
/// Stub mirror issue URL emitted in dry runs.
pub const DRY_RUN_ISSUE_URL: &str = "https://example.tld/owner/repo/issues/1";

/// Mirror issue body: a banner crediting the origin author and linking
/// back, followed by the original body verbatim.
pub fn mirror_body(issue: &OriginIssue) -> String {
    format!(
        "> [!IMPORTANT]\n\
         >\n\
         > **This issue has been mirrored from GitHub:**\n\
         > Posted by: @{author}\n\
         > 👉 [View on GitHub]({url})\n\
         \n\
         {body}\n",
        author = issue.author,
        url = issue.url,
        body = issue.body,
    )
}

pub async fn create_mirror_issue(
    codeberg: &CodebergClient,
    mirror: &MirrorConfig,
    issue: &OriginIssue,
    dry_run: bool,
    output: &mut PipelineOutput,
) -> Result<MirrorIssueRef> {
    let payload = NewIssue {
        title: issue.title.clone(),
        body: mirror_body(issue),
    };

    if dry_run {
        tracing::info!("Dry run: skipping issue creation on Codeberg");
        println!("POST DATA: {}", serde_json::to_string(&payload)?);
        let stub = MirrorIssueRef {
            number: DRY_RUN_ISSUE_NUMBER,
            url: DRY_RUN_ISSUE_URL.to_string(),
        };
        output.set(OUT_MIRROR_ISSUE_NUMBER, stub.number.to_string())?;
        output.set(OUT_MIRROR_ISSUE_URL, stub.url.clone())?;
        return Ok(stub);
    }

    let created = codeberg.create_issue(&mirror.repo, &payload).await?;
    tracing::info!("Issue created on Codeberg: #{}", created.number);

    output.set(OUT_MIRROR_ISSUE_NUMBER, created.number.to_string())?;
    output.set(OUT_MIRROR_ISSUE_URL, created.html_url.clone())?;

    Ok(MirrorIssueRef {
        number: created.number,
        url: created.html_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin_issue() -> OriginIssue {
        OriginIssue {
            number: 5,
            title: "Bug X".to_string(),
            body: "steps...".to_string(),
            author: "alice".to_string(),
            url: "https://github.com/o/r/issues/5".to_string(),
        }
    }

    #[test]
    fn test_body_credits_origin_author() {
        let body = mirror_body(&origin_issue());
        assert!(body.contains("Posted by: @alice"));
    }

    #[test]
    fn test_body_links_back_to_origin() {
        let body = mirror_body(&origin_issue());
        assert!(body.contains("[View on GitHub](https://github.com/o/r/issues/5)"));
    }

    #[test]
    fn test_body_embeds_original_text_verbatim() {
        let mut issue = origin_issue();
        issue.body = "line one\n\n```rust\nlet x = 1;\n```\n<b>html</b>".to_string();
        let body = mirror_body(&issue);
        assert!(body.contains(&issue.body));
    }
}
