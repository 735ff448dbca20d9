use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The issue as created on the origin platform, supplied by the
/// triggering workflow event.
#[derive(Debug, Clone)]
pub struct OriginIssue {
    pub number: u64,
    pub title: String,
    pub body: String,
    pub author: String,
    pub url: String,
}

/// Identity of the mirror issue, produced by issue creation and consumed
/// by the labeling and notification steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorIssueRef {
    pub number: u64,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    pub number: u64,
    pub html_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelUpdate {
    pub labels: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl LabelUpdate {
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            updated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub html_url: String,
}
