use crate::application::library::LibraryError;

/// 失敗しうるメニュー操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Borrow,
    Return,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Borrow => "borrow",
            Operation::Return => "return",
        }
    }

    /// 失敗時に表示する1行メッセージ
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Add => "Add failed.",
            Operation::Borrow => "Not available / not found.",
            Operation::Return => "Not found or already in shelf.",
        }
    }
}

/// 失敗した操作をログに記録し、表示用メッセージを返す
///
/// ビジネスルール違反はinfo、内部エラーはerrorで記録する。
pub fn report(op: Operation, err: &LibraryError) -> &'static str {
    match err {
        LibraryError::CapacityExceeded { .. }
        | LibraryError::NotFound(_)
        | LibraryError::InvalidStateTransition { .. }
        | LibraryError::FieldTooLong { .. }
        | LibraryError::InvalidInput(_) => {
            tracing::info!(operation = op.as_str(), error = %err, "operation rejected");
        }
        LibraryError::IdExhausted => {
            tracing::error!(operation = op.as_str(), error = %err, "operation failed");
        }
    }
    op.failure_message()
}
