mod issue;
mod kind;
mod question;

pub use issue::{Field, Issue, IssueKind};
pub use kind::JsonKind;
pub(crate) use kind::is_integer_literal;
pub use question::Question;
