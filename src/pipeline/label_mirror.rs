use crate::codeberg::CodebergClient;
use crate::config::MirrorConfig;
use crate::error::Result;
use crate::models::LabelUpdate;

/// Label marking a mirror issue as sourced from the origin platform.
pub const MIRROR_LABEL: &str = "GitHub";

pub fn label_payload() -> LabelUpdate {
    LabelUpdate::new(vec![MIRROR_LABEL.to_string()])
}

pub async fn label_mirror_issue(
    codeberg: &CodebergClient,
    mirror: &MirrorConfig,
    issue_number: u64,
    dry_run: bool,
) -> Result<()> {
    let payload = label_payload();

    if dry_run {
        tracing::info!("Dry run: skipping label update on Codeberg");
        println!("POST DATA: {}", serde_json::to_string(&payload)?);
        return Ok(());
    }

    codeberg
        .set_labels(&mirror.repo, issue_number, &payload)
        .await?;
    tracing::info!("Mirror issue #{} labeled {}", issue_number, MIRROR_LABEL);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_set_is_exactly_github() {
        let payload = label_payload();
        assert_eq!(payload.labels, vec!["GitHub".to_string()]);
    }

    #[test]
    fn test_payload_carries_utc_timestamp() {
        let payload = label_payload();
        let json = serde_json::to_value(&payload).unwrap();
        let updated_at = json["updated_at"].as_str().unwrap();
        assert!(updated_at.ends_with('Z') || updated_at.contains("+00:00"));
    }
}
