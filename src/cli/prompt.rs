use std::io::{self, BufRead, Read, Write};
use std::str::FromStr;

/// 整数以外が入力された場合のメッセージ
pub const INVALID_INTEGER: &str = "Please enter a valid integer.";

/// 1行として読み込む最大バイト数。超えた分は読み捨てる。
pub const MAX_LINE_BYTES: usize = 4096;

/// 末尾の`\n`または`\r\n`を1つ取り除く
pub fn trim_newline(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

/// 整数をパースする
///
/// 先頭の空白と符号は許可する。それ以降は数字のみ。
/// `T`の範囲外の値は拒否する。
pub fn parse_int<T: FromStr>(line: &str) -> Option<T> {
    line.trim_start().parse().ok()
}

/// 入力と出力を組にした対話プロンプト
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// 改行を除いた1行を読み込む。入力終端では`None`。
    ///
    /// 不正なUTF-8はエラーにせず置換文字に変換する。
    /// `MAX_LINE_BYTES`を超えた部分は次の改行まで読み捨てる。
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .input
            .by_ref()
            .take(MAX_LINE_BYTES as u64)
            .read_until(b'\n', &mut buf)?;
        if read == 0 {
            return Ok(None);
        }
        if buf.last() != Some(&b'\n') && read == MAX_LINE_BYTES {
            let skipped = self.input.skip_until(b'\n')?;
            tracing::debug!(skipped, "discarded overlong input line");
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        trim_newline(&mut line);
        Ok(Some(line))
    }

    /// プロンプトを表示して1行読み込む
    pub fn ask_text(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    /// 有効な整数が入力されるまでプロンプトを繰り返す
    ///
    /// 先に入力が終端した場合は`None`。
    pub fn ask_int<T: FromStr>(&mut self, prompt: &str) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.ask_text(prompt)? else {
                return Ok(None);
            };
            if let Some(value) = parse_int(&line) {
                return Ok(Some(value));
            }
            tracing::debug!(input = %line, "rejected non-integer input");
            writeln!(self.output, "{}", INVALID_INTEGER)?;
        }
    }
}
