pub mod issue;

pub use issue::{
    Comment, CreatedIssue, LabelUpdate, MirrorIssueRef, NewComment, NewIssue, OriginIssue,
};
