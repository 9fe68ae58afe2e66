//! Per-class attendance marking for the teacher dashboard.
//!
//! Each class starts `Uninitialized`. The first access seeds a toggle
//! map from the roster's `present` flags; later accesses reuse it.
//! Statistics are derived from the toggle map and never mutate it.

use std::collections::{BTreeMap, HashMap};

use crate::{AttendanceEntry, ClassId, StudentId};

/// Toggle state of one class.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ToggleState {
    #[default]
    Uninitialized,
    Initialized(BTreeMap<StudentId, bool>),
}

impl ToggleState {
    /// Seed the map from the roster if this is the first access.
    ///
    /// Returns `true` when the state transitioned.
    pub fn initialize(&mut self, roster: &[AttendanceEntry]) -> bool {
        if self.is_initialized() {
            return false;
        }

        let seeded = roster.iter().map(|s| (s.id, s.present)).collect();
        *self = ToggleState::Initialized(seeded);
        true
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self, ToggleState::Initialized(_))
    }

    /// Current mark for a student, if the map knows about them.
    pub fn is_present(&self, student_id: StudentId) -> Option<bool> {
        match self {
            ToggleState::Uninitialized => None,
            ToggleState::Initialized(map) => map.get(&student_id).copied(),
        }
    }
}

/// Toggle maps for every class the teacher has looked at.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttendanceBook {
    classes: HashMap<ClassId, ToggleState>,
}

impl AttendanceBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// State of a class; classes never accessed are `Uninitialized`.
    pub fn state(&self, class_id: ClassId) -> Option<&ToggleState> {
        self.classes.get(&class_id)
    }

    pub fn is_initialized(&self, class_id: ClassId) -> bool {
        self.state(class_id)
            .is_some_and(ToggleState::is_initialized)
    }

    /// Initialize a class from its roster. A no-op when already done.
    pub fn ensure_initialized(&mut self, class_id: ClassId, roster: &[AttendanceEntry]) -> bool {
        self.classes.entry(class_id).or_default().initialize(roster)
    }

    /// Flip the mark for one student, initializing the class first.
    ///
    /// Returns the new mark, or `None` if the student is not on the
    /// roster the class was seeded from.
    pub fn toggle(
        &mut self,
        class_id: ClassId,
        student_id: StudentId,
        roster: &[AttendanceEntry],
    ) -> Option<bool> {
        self.ensure_initialized(class_id, roster);

        let ToggleState::Initialized(map) = self.classes.get_mut(&class_id)? else {
            return None;
        };

        let mark = map.get_mut(&student_id)?;
        *mark = !*mark;
        Some(*mark)
    }

    /// Current mark for a roster entry.
    ///
    /// Falls back to the roster seed while the class is uninitialized,
    /// which is exactly what initialization would produce.
    pub fn is_present(&self, class_id: ClassId, entry: &AttendanceEntry) -> bool {
        self.state(class_id)
            .and_then(|state| state.is_present(entry.id))
            .unwrap_or(entry.present)
    }

    /// Derive statistics for a class from the current marks.
    pub fn stats(&self, class_id: ClassId, roster: &[AttendanceEntry]) -> AttendanceStats {
        let present = roster
            .iter()
            .filter(|entry| self.is_present(class_id, entry))
            .count();

        AttendanceStats {
            present,
            total: roster.len(),
        }
    }
}

/// Present/absent counts for one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceStats {
    pub present: usize,
    pub total: usize,
}

impl AttendanceStats {
    pub fn absent(&self) -> usize {
        self.total - self.present
    }

    /// Share of students marked present, rounded to one decimal.
    ///
    /// An empty roster yields `0.0`.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        let raw = self.present as f64 / self.total as f64 * 100.0;
        (raw * 10.0).round() / 10.0
    }

    /// Percentage as shown in the stat card, without the `%` sign.
    pub fn percentage_label(&self) -> String {
        if self.total == 0 {
            "0".to_string()
        } else {
            format!("{:.1}", self.percentage())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::load_demo_roster;

    fn roster() -> Vec<AttendanceEntry> {
        vec![
            AttendanceEntry::new(1, "A", "001", true, 90),
            AttendanceEntry::new(2, "B", "002", false, 70),
            AttendanceEntry::new(3, "C", "003", true, 80),
        ]
    }

    #[test]
    fn test_class_starts_uninitialized() {
        let book = AttendanceBook::new();

        assert!(book.state(1).is_none());
        assert!(!book.is_initialized(1));
    }

    #[test]
    fn test_initialize_seeds_from_roster() {
        let mut book = AttendanceBook::new();

        assert!(book.ensure_initialized(1, &roster()));

        let state = book.state(1).unwrap();
        assert_eq!(state.is_present(1), Some(true));
        assert_eq!(state.is_present(2), Some(false));
        assert_eq!(state.is_present(3), Some(true));
    }

    #[test]
    fn test_reinitialize_is_noop() {
        let mut book = AttendanceBook::new();
        book.ensure_initialized(1, &roster());
        book.toggle(1, 2, &roster());

        // A different roster must not overwrite existing marks
        let other = vec![AttendanceEntry::new(2, "B", "002", false, 70)];
        assert!(!book.ensure_initialized(1, &other));
        assert_eq!(book.state(1).unwrap().is_present(2), Some(true));
    }

    #[test]
    fn test_toggle_initializes_first() {
        let mut book = AttendanceBook::new();

        let mark = book.toggle(1, 1, &roster());

        assert_eq!(mark, Some(false));
        assert!(book.is_initialized(1));
        // Untouched students keep their seed
        assert_eq!(book.state(1).unwrap().is_present(2), Some(false));
    }

    #[test]
    fn test_toggle_twice_restores_mark() {
        let roster = load_demo_roster(2);
        let mut book = AttendanceBook::new();
        book.ensure_initialized(2, &roster);
        let before = book.state(2).cloned();

        book.toggle(2, 3, &roster);
        assert_ne!(book.state(2).cloned(), before);

        book.toggle(2, 3, &roster);
        assert_eq!(book.state(2).cloned(), before);
    }

    #[test]
    fn test_toggle_unknown_student() {
        let mut book = AttendanceBook::new();

        assert_eq!(book.toggle(1, 99, &roster()), None);
        assert_eq!(book.state(1).unwrap().is_present(99), None);
    }

    #[test]
    fn test_toggle_is_per_class() {
        let mut book = AttendanceBook::new();
        book.toggle(1, 1, &roster());

        assert!(!book.is_initialized(2));
        assert!(book.is_present(2, &roster()[0]));
    }

    #[test]
    fn test_stats_follow_toggles() {
        let roster = roster();
        let mut book = AttendanceBook::new();

        let stats = book.stats(1, &roster);
        assert_eq!(stats.present, 2);
        assert_eq!(stats.absent(), 1);
        assert_eq!(stats.percentage_label(), "66.7");

        book.toggle(1, 2, &roster);
        let stats = book.stats(1, &roster);
        assert_eq!(stats.present, 3);
        assert_eq!(stats.absent(), 0);
        assert_eq!(stats.percentage_label(), "100.0");
    }

    #[test]
    fn test_stats_do_not_initialize() {
        let book = AttendanceBook::new();
        let _ = book.stats(1, &roster());

        assert!(!book.is_initialized(1));
    }

    #[test]
    fn test_empty_roster_percentage() {
        let book = AttendanceBook::new();
        let stats = book.stats(7, &[]);

        assert_eq!(stats.total, 0);
        assert_eq!(stats.percentage(), 0.0);
        assert!(!stats.percentage().is_nan());
        assert_eq!(stats.percentage_label(), "0");
    }

    #[test]
    fn test_percentage_rounding() {
        let stats = AttendanceStats {
            present: 1,
            total: 3,
        };

        assert!((stats.percentage() - 33.3).abs() < 1e-9);
        assert_eq!(stats.percentage_label(), "33.3");
    }

    #[test]
    fn test_demo_class_one_stats() {
        // Om, Priya and Isha are present out of five
        let roster = load_demo_roster(1);
        let stats = AttendanceBook::new().stats(1, &roster);

        assert_eq!(stats.present, 3);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.percentage_label(), "60.0");
    }
}
