use serde::{Deserialize, Serialize};
use std::fmt;

/// 書籍ID - 蔵書集約のID
///
/// 1から始まる正の整数。実行中に再利用されることはない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookId(u32);

impl BookId {
    /// 最初に払い出されるID
    pub fn first() -> Self {
        Self(1)
    }

    /// 次のID
    ///
    /// u32の上限に達した場合は`None`。
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// IDエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookIdError {
    /// 0以下、またはu32に収まらない
    OutOfRange(i64),
}

impl TryFrom<i64> for BookId {
    type Error = BookIdError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u32::try_from(value) {
            Ok(v) if v >= 1 => Ok(Self(v)),
            _ => Err(BookIdError::OutOfRange(value)),
        }
    }
}

/// 貸出可否
///
/// 不変条件：状態は2つだけ。遷移は貸出と返却のみで行われる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// 書架にある
    Available,
    /// 貸出中
    Borrowed,
}

impl Availability {
    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Borrowed => "borrowed",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
