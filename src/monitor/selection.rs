use crate::models::{ordered_keys, LogicalKey};
use std::collections::HashSet;

/// Ephemeral set of logical keys selected for batch operations. UI-only
/// state, independent of the switch data itself; resets on restart.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    selected: HashSet<LogicalKey>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, key: LogicalKey) {
        if !self.selected.remove(&key) {
            self.selected.insert(key);
        }
    }

    /// Select-all/deselect-all toggle: selects every given key unless all
    /// of them are already selected, in which case the selection clears.
    pub fn select_all(&mut self, all_keys: &[LogicalKey]) {
        if self.is_all_selected(all_keys) {
            self.clear();
        } else {
            self.selected = all_keys.iter().cloned().collect();
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_all_selected(&self, all_keys: &[LogicalKey]) -> bool {
        self.selected.len() == all_keys.len()
            && all_keys.iter().all(|k| self.selected.contains(k))
    }

    pub fn contains(&self, key: &LogicalKey) -> bool {
        self.selected.contains(key)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Members in canonical key order (extras after the canonical 11,
    /// ordered by id) so batch dispatch is deterministic.
    pub fn ordered_members(&self) -> Vec<LogicalKey> {
        let mut members: Vec<LogicalKey> = ordered_keys()
            .into_iter()
            .filter(|k| self.selected.contains(k))
            .collect();

        let mut extras: Vec<u16> = self
            .selected
            .iter()
            .filter_map(|k| match k {
                LogicalKey::Other(id) => Some(*id),
                _ => None,
            })
            .collect();
        extras.sort_unstable();
        members.extend(extras.into_iter().map(LogicalKey::Other));
        members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_and_removes() {
        let mut sel = SelectionSet::new();
        sel.toggle(LogicalKey::Key3);
        assert!(sel.contains(&LogicalKey::Key3));
        sel.toggle(LogicalKey::Key3);
        assert!(sel.is_empty());
    }

    #[test]
    fn select_all_toggles() {
        let all = ordered_keys();
        let mut sel = SelectionSet::new();

        sel.select_all(&all);
        assert_eq!(sel.len(), 11);
        assert!(sel.is_all_selected(&all));

        // Calling again from fully-selected clears instead.
        sel.select_all(&all);
        assert!(sel.is_empty());
    }

    #[test]
    fn select_all_from_partial_selects_everything() {
        let all = ordered_keys();
        let mut sel = SelectionSet::new();
        sel.toggle(LogicalKey::Key1);
        sel.toggle(LogicalKey::E4);

        sel.select_all(&all);
        assert!(sel.is_all_selected(&all));
    }

    #[test]
    fn is_all_selected_requires_set_equality() {
        let all = ordered_keys();
        let mut sel = SelectionSet::new();
        for key in all.iter().take(10).cloned() {
            sel.toggle(key);
        }
        sel.toggle(LogicalKey::Other(1)); // same size, different set
        assert_eq!(sel.len(), all.len());
        assert!(!sel.is_all_selected(&all));
    }

    #[test]
    fn ordered_members_follow_canonical_order() {
        let mut sel = SelectionSet::new();
        sel.toggle(LogicalKey::E2);
        sel.toggle(LogicalKey::Key1);
        sel.toggle(LogicalKey::Other(7));
        sel.toggle(LogicalKey::Key5);

        assert_eq!(
            sel.ordered_members(),
            vec![
                LogicalKey::Key1,
                LogicalKey::Key5,
                LogicalKey::E2,
                LogicalKey::Other(7),
            ]
        );
    }
}
