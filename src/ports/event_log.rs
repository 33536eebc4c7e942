use crate::domain::events::DomainEvent;

/// イベントログポート
///
/// ドメインイベントを追記専用で記録する。
/// イベントの順序は保持され、変更・削除はできない。
pub trait EventLog {
    /// イベントを追記する
    fn append(&mut self, event: DomainEvent);

    /// 記録されたすべてのイベントを追記順で返す
    fn events(&self) -> &[DomainEvent];
}
