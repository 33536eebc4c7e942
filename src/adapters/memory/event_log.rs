use crate::domain::events::DomainEvent;
use crate::ports::event_log::EventLog as EventLogTrait;

/// EventLogのインメモリ実装（追記専用）
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<DomainEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventLogTrait for EventLog {
    fn append(&mut self, event: DomainEvent) {
        self.events.push(event);
    }

    fn events(&self) -> &[DomainEvent] {
        &self.events
    }
}
