//! Work accounting for matched entries

use std::hint::black_box;

use crate::walk::FileSystemEntry;

/// Count of entries accepted by the active strategy.
///
/// Each invocation owns its counter, so back-to-back or concurrent runs never
/// share state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkCounter {
    count: i64,
}

impl WorkCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stand-in for real per-file processing.
    #[inline]
    pub fn do_work(&mut self, entry: &FileSystemEntry) {
        black_box(entry);
        self.count += 1;
    }

    pub fn value(&self) -> i64 {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::EntryKind;
    use std::path::PathBuf;

    #[test]
    fn test_counts_and_resets() {
        let entry = FileSystemEntry::new(PathBuf::from("a.c"), EntryKind::File, 1, false);
        let mut counter = WorkCounter::new();
        assert_eq!(counter.value(), 0);

        counter.do_work(&entry);
        counter.do_work(&entry);
        assert_eq!(counter.value(), 2);

        counter.reset();
        assert_eq!(counter, WorkCounter::default());
    }
}
