//! The append-only event log.

use serde::{Deserialize, Serialize};
use veridao_types::{AccountId, Timestamp};

use crate::event::{DaoEvent, EventRecord, NotificationRecord};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    records: Vec<EventRecord>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event and return the stored record.
    pub fn append(&mut self, event: DaoEvent, at: Timestamp) -> &EventRecord {
        let sequence = self.records.len() as u64;
        tracing::debug!(sequence, event = event.name(), "event appended");
        self.records.push(EventRecord {
            sequence,
            emitted_at: at,
            event,
        });
        &self.records[self.records.len() - 1]
    }

    /// Record a notification for `recipient`.
    pub fn notify(
        &mut self,
        recipient: AccountId,
        message: String,
        at: Timestamp,
    ) -> NotificationRecord {
        let record = NotificationRecord { recipient, message };
        tracing::info!(recipient = %record.recipient, "notification sent");
        self.append(DaoEvent::NotificationSent(record.clone()), at);
        record
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn notifications(&self) -> impl Iterator<Item = &NotificationRecord> {
        self.records.iter().filter_map(|r| r.event.as_notification())
    }

    pub fn notifications_for<'a>(
        &'a self,
        recipient: &'a AccountId,
    ) -> impl Iterator<Item = &'a NotificationRecord> + 'a {
        self.notifications()
            .filter(move |n| &n.recipient == recipient)
    }

    /// Records whose event has the given kind name.
    pub fn by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a EventRecord> + 'a {
        self.records.iter().filter(move |r| r.event.name() == name)
    }

    pub fn last(&self) -> Option<&EventRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acct(s: &str) -> AccountId {
        AccountId::new(s)
    }

    #[test]
    fn notify_returns_and_stores_record() {
        let mut log = EventLog::new();
        let record = log.notify(
            acct("u1"),
            "You have a new notification.".into(),
            Timestamp::new(10),
        );
        assert_eq!(record.recipient, acct("u1"));
        assert_eq!(record.message, "You have a new notification.");

        let last = log.last().unwrap();
        assert_eq!(last.event.name(), "NotificationSent");
        assert_eq!(last.event.as_notification(), Some(&record));
        assert_eq!(last.emitted_at, Timestamp::new(10));
    }

    #[test]
    fn sequences_increase_by_one() {
        let mut log = EventLog::new();
        log.append(DaoEvent::EmergencyShutdownChanged { active: true }, Timestamp::new(1));
        log.notify(acct("u1"), "a".into(), Timestamp::new(2));
        log.append(DaoEvent::EmergencyShutdownChanged { active: false }, Timestamp::new(3));
        let sequences: Vec<u64> = log.events().iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![0, 1, 2]);
    }

    #[test]
    fn notifications_filtered_by_recipient() {
        let mut log = EventLog::new();
        log.notify(acct("u1"), "one".into(), Timestamp::EPOCH);
        log.notify(acct("u2"), "two".into(), Timestamp::EPOCH);
        log.append(DaoEvent::EmergencyShutdownChanged { active: true }, Timestamp::EPOCH);
        log.notify(acct("u1"), "three".into(), Timestamp::EPOCH);

        assert_eq!(log.notifications().count(), 3);
        let u1 = acct("u1");
        let messages: Vec<&str> = log
            .notifications_for(&u1)
            .map(|n| n.message.as_str())
            .collect();
        assert_eq!(messages, vec!["one", "three"]);
        assert_eq!(log.by_name("EmergencyShutdownChanged").count(), 1);
    }
}
