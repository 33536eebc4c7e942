use crate::domain::{BookId, book::Book};

/// 蔵書リポジトリポート
///
/// 挿入順を保持する蔵書の並びを抽象化する。
/// 検索はすべてこの並びに対する線形走査で行われる。
#[allow(clippy::len_without_is_empty)]
pub trait BookRepository {
    /// 登録済みの冊数
    fn len(&self) -> usize;

    /// 末尾に書籍を追加する
    ///
    /// 容量チェックは呼び出し側（アプリケーション層）の責務。
    fn append(&mut self, book: Book);

    /// すべての書籍を挿入順で返す
    fn books(&self) -> &[Book];

    /// 同じIDの書籍を置き換える
    ///
    /// 対象が存在しない場合は`None`を返し、何も変更しない。
    fn replace(&mut self, book: Book) -> Option<Book>;

    /// IDで書籍を取得する
    fn get(&self, id: BookId) -> Option<&Book> {
        self.books().iter().find(|b| b.id == id)
    }
}
