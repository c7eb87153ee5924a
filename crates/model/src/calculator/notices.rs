use bevy::prelude::*;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NoticeLevel {
    Error,
    Warning,
    Info,
}

impl NoticeLevel {
    pub fn label(&self) -> &'static str {
        match self {
            NoticeLevel::Error => "ERROR",
            NoticeLevel::Warning => "WARNING",
            NoticeLevel::Info => "INFO",
        }
    }
}

/// Emitted whenever a request succeeds or is rejected in a way the user
/// should see.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct CalculatorNotice {
    pub text: String,
    pub level: NoticeLevel,
}

impl CalculatorNotice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Info,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Warning,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
    pub level: NoticeLevel,
    pub dismissed: bool,
}

/// Notices collected from `CalculatorNotice` events, oldest first.
#[derive(Resource, Debug)]
pub struct NoticeLog {
    pub entries: Vec<Notice>,
    /// Oldest entries are dropped past this size.
    pub max_entries: usize,
    next_id: u64,
}

impl Default for NoticeLog {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            max_entries: 50,
            next_id: 1,
        }
    }
}

impl NoticeLog {
    pub fn push(&mut self, notice: &CalculatorNotice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notice {
            id,
            text: notice.text.clone(),
            level: notice.level,
            dismissed: false,
        });
        if self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(0..excess);
        }
        id
    }

    /// Most recent notice that has not been dismissed.
    pub fn latest(&self) -> Option<&Notice> {
        self.entries.iter().rev().find(|n| !n.dismissed)
    }

    pub fn dismiss(&mut self, id: u64) {
        if let Some(n) = self.entries.iter_mut().find(|n| n.id == id) {
            n.dismissed = true;
        }
    }
}

pub(crate) fn collect_notices(
    mut events: EventReader<CalculatorNotice>,
    mut log: ResMut<NoticeLog>,
) {
    for notice in events.read() {
        log.push(notice);
    }
}
