use serde::{Deserialize, Serialize};

/// Confirmation shown to the operator after some successful mutations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confirmation {
    Updated,
    Deleted,
}

impl Confirmation {
    /// Dialog text, in the console's locale
    pub fn message(&self) -> &'static str {
        match self {
            Confirmation::Updated => "정상적으로 수정되었습니다!",
            Confirmation::Deleted => "정상적으로 삭제되었습니다!",
        }
    }
}

pub trait Notifier: Send + Sync {
    fn confirm(&self, confirmation: Confirmation);
}

/// Default notifier: confirmations go to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn confirm(&self, confirmation: Confirmation) {
        tracing::info!(kind = ?confirmation, "{}", confirmation.message());
    }
}
