//! Adventure log shown under the map.
use std::collections::VecDeque;

/// What produced a log line. The controller picks the kind at the call site;
/// narration text from the authority is never inspected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageKind {
    /// Entering a freshly generated dungeon.
    Arrival,
    /// Authority narration for a step (loot, traps, doors, keys).
    Exploration,
    /// Combat opening and per-round lines.
    Combat,
    Defeat,
    /// A request that failed and changed nothing.
    Failure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    pub kind: MessageKind,
    /// Session move counter when logged; `None` outside a session.
    pub moves: Option<u32>,
    /// How many consecutive times this line was logged on the same move.
    pub repeats: u32,
}

/// Bounded log; identical consecutive lines on the same move are folded.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, kind: MessageKind, text: impl Into<String>, moves: Option<u32>) {
        let text = text.into();
        if let Some(last) = self.entries.back_mut()
            && last.kind == kind
            && last.moves == moves
            && last.text == text
        {
            last.repeats += 1;
            return;
        }

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(MessageEntry {
            text,
            kind,
            moves,
            repeats: 1,
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_entries_are_evicted() {
        let mut log = MessageLog::new(2);
        log.push(MessageKind::Exploration, "You find gold.", Some(1));
        log.push(MessageKind::Exploration, "A trap springs!", Some(2));
        log.push(MessageKind::Combat, "You hit the goblin.", Some(2));

        let texts: Vec<_> = log.iter().map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, vec!["A trap springs!", "You hit the goblin."]);
        assert_eq!(log.recent(1).next().unwrap().kind, MessageKind::Combat);
    }

    #[test]
    fn repeated_lines_on_one_move_fold() {
        let mut log = MessageLog::new(0);
        log.push(MessageKind::Combat, "You miss.", Some(4));
        log.push(MessageKind::Combat, "You miss.", Some(4));

        let entry = log.recent(1).next().unwrap();
        assert_eq!(entry.repeats, 2);
        assert_eq!(log.iter().count(), 1);
    }

    #[test]
    fn same_line_on_a_later_move_is_a_new_entry() {
        let mut log = MessageLog::new(4);
        log.push(MessageKind::Failure, "network error", Some(4));
        log.push(MessageKind::Failure, "network error", Some(5));
        log.push(MessageKind::Combat, "network error", Some(5));

        assert_eq!(log.iter().count(), 3);
        assert!(log.iter().all(|entry| entry.repeats == 1));
    }
}
