use std::collections::VecDeque;

use image::RgbaImage;

use crate::model::{DEFAULT_HISTORY_DEPTH, MAX_HISTORY_DEPTH};

/// One committed state of the edited raster, kept decoded so navigating
/// history never has to re-decode pixels.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    sequence: u64,
    snapshot: RgbaImage,
}

impl HistoryEntry {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn snapshot(&self) -> &RgbaImage {
        &self.snapshot
    }

    pub fn memory_size(&self) -> usize {
        self.snapshot.as_raw().len()
    }
}

/// Bounded linear undo/redo stack of full snapshots.
///
/// Committing drops every entry after the active one, so there is never a
/// redo branch. Once the depth limit is exceeded the oldest entry is evicted.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    entries: VecDeque<HistoryEntry>,
    active: usize,
    capacity: usize,
    next_sequence: u64,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}

impl HistoryManager {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_HISTORY_DEPTH);
        Self {
            entries: VecDeque::new(),
            active: 0,
            capacity,
            next_sequence: 0,
        }
    }

    pub fn commit(&mut self, snapshot: RgbaImage) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.active + 1);
        }
        self.entries.push_back(HistoryEntry {
            sequence: self.next_sequence,
            snapshot,
        });
        self.next_sequence += 1;
        self.active = self.entries.len() - 1;

        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                log::debug!("history full, evicted entry #{}", evicted.sequence);
            }
            self.active = self.active.saturating_sub(1);
        }
    }

    /// Steps back one entry. `None` when already at the oldest entry.
    pub fn undo(&mut self) -> Option<&RgbaImage> {
        if !self.can_undo() {
            return None;
        }
        self.active -= 1;
        self.entries.get(self.active).map(HistoryEntry::snapshot)
    }

    /// Steps forward one entry. `None` when already at the newest entry.
    pub fn redo(&mut self) -> Option<&RgbaImage> {
        if !self.can_redo() {
            return None;
        }
        self.active += 1;
        self.entries.get(self.active).map(HistoryEntry::snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && self.active > 0
    }

    pub fn can_redo(&self) -> bool {
        self.active + 1 < self.entries.len()
    }

    pub fn current(&self) -> Option<&RgbaImage> {
        self.entries.get(self.active).map(HistoryEntry::snapshot)
    }

    pub fn active_index(&self) -> Option<usize> {
        (!self.entries.is_empty()).then_some(self.active)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Depth limit after clamping to `1..=MAX_HISTORY_DEPTH`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn memory_size(&self) -> usize {
        self.entries.iter().map(HistoryEntry::memory_size).sum()
    }
}
