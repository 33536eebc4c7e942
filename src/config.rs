use clap::Parser;

use crate::application::library::{DEFAULT_CAPACITY, LibraryPolicy};

/// Mini Library - 対話型インメモリ蔵書管理
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "mini-library", version, long_about = None)]
pub struct Cli {
    /// 蔵書数の上限
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// タイトルの最大文字数（超えた登録は拒否）
    #[arg(long, value_name = "CHARS")]
    pub max_title_len: Option<usize>,

    /// 著者名の最大文字数（超えた登録は拒否）
    #[arg(long, value_name = "CHARS")]
    pub max_author_len: Option<usize>,

    /// 標準エラーへの詳細ログ（-v: info, -vv: debug）
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn policy(&self) -> LibraryPolicy {
        LibraryPolicy {
            capacity: self.capacity,
            max_title_len: self.max_title_len,
            max_author_len: self.max_author_len,
        }
    }
}
