pub mod codeberg;
pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod output;
pub mod pipeline;

pub use codeberg::CodebergClient;
pub use config::{MirrorConfig, OriginConfig};
pub use error::{Error, Result};
pub use github::GitHubClient;
pub use output::PipelineOutput;
pub use pipeline::{create_mirror_issue, label_mirror_issue, notify_origin, run_pipeline};
