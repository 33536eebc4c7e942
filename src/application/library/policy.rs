use std::fmt;

use super::errors::{LibraryError, Result};

/// 既定の蔵書上限
pub const DEFAULT_CAPACITY: usize = 200;

/// 文字数制限の対象項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    Author,
}

impl TextField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextField::Title => "title",
            TextField::Author => "author",
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 蔵書管理のビジネスルール
///
/// 文字数制限は任意。`None`の場合は制限なし。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryPolicy {
    pub capacity: usize,
    pub max_title_len: Option<usize>,
    pub max_author_len: Option<usize>,
}

impl LibraryPolicy {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// 文字数制限を検証する（文字単位で数える）
    pub fn check_text(&self, field: TextField, value: &str) -> Result<()> {
        let limit = match field {
            TextField::Title => self.max_title_len,
            TextField::Author => self.max_author_len,
        };

        match limit {
            Some(max) if value.chars().count() > max => {
                Err(LibraryError::FieldTooLong { field, max })
            }
            _ => Ok(()),
        }
    }
}

impl Default for LibraryPolicy {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_title_len: None,
            max_author_len: None,
        }
    }
}
