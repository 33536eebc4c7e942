/// 貸出のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowBookError {
    /// 既に貸出中
    AlreadyBorrowed,
}

/// 返却のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnBookError {
    /// 既に書架にある
    AlreadyAvailable,
}
