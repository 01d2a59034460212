use std::collections::VecDeque;

use crate::cache::{HistoryItem, HistoryKind};

/// 依時間順序保存的瀏覽紀錄。 / Ordered navigation log, oldest first and newest last.
///
/// Unbounded unless a capacity is set; when over capacity the oldest entries go first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationHistory {
    capacity: Option<usize>,
    entries: VecDeque<HistoryItem>,
}

impl NavigationHistory {
    /// 建立空白紀錄。 / Creates an empty log with the given capacity (`None` = unbounded).
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            capacity: capacity.map(|cap| cap.max(1)),
            entries: VecDeque::new(),
        }
    }

    /// 依已保存資料還原紀錄。 / Rebuilds the log from persisted items, trimming the oldest.
    pub fn from_items(items: Vec<HistoryItem>, capacity: Option<usize>) -> Self {
        let mut history = Self::new(capacity);
        history.entries = items.into();
        history.enforce_capacity();
        history
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// 調整容量並移除最舊的紀錄。 / Adjusts capacity and evicts the oldest overflow.
    pub fn set_capacity(&mut self, capacity: Option<usize>) {
        self.capacity = capacity.map(|cap| cap.max(1));
        self.enforce_capacity();
    }

    /// 紀錄一次瀏覽並移到最新位置。 / Records a visit; a repeated path moves to the newest slot.
    pub fn record(&mut self, path: impl Into<String>, kind: HistoryKind) {
        let path = path.into();
        self.entries.retain(|item| item.path != path);
        self.entries.push_back(HistoryItem::new(path, kind));
        self.enforce_capacity();
    }

    /// 移除指定路徑。 / Removes the entry for `path`, returning `true` if it existed.
    pub fn remove(&mut self, path: &str) -> bool {
        let initial_len = self.entries.len();
        self.entries.retain(|item| item.path != path);
        initial_len != self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryItem> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_items(self) -> Vec<HistoryItem> {
        self.entries.into()
    }

    fn enforce_capacity(&mut self) {
        if let Some(capacity) = self.capacity {
            while self.entries.len() > capacity {
                self.entries.pop_front();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(history: &NavigationHistory) -> Vec<&str> {
        history.iter().map(|item| item.path.as_str()).collect()
    }

    #[test]
    fn record_promotes_and_limits_capacity() {
        let mut history = NavigationHistory::new(Some(3));
        history.record("a.md", HistoryKind::File);
        history.record("b.md", HistoryKind::File);
        history.record("docs", HistoryKind::Folder);
        // Revisiting moves the entry to the newest slot.
        // 重新造訪時移至最新位置。
        history.record("a.md", HistoryKind::File);
        assert_eq!(paths(&history), vec!["b.md", "docs", "a.md"]);

        history.record("c.md", HistoryKind::File);
        assert_eq!(paths(&history), vec!["docs", "a.md", "c.md"]);
        assert_eq!(history.iter().last(), Some(&HistoryItem::file("c.md")));
    }

    #[test]
    fn unbounded_by_default() {
        let mut history = NavigationHistory::default();
        for index in 0..500 {
            history.record(format!("{index}.md"), HistoryKind::File);
        }
        assert_eq!(history.len(), 500);
        assert_eq!(history.capacity(), None);
    }

    #[test]
    fn revisit_can_change_kind() {
        let mut history = NavigationHistory::default();
        history.record("/proj/x", HistoryKind::Folder);
        history.record("/proj/x", HistoryKind::File);
        assert_eq!(history.into_items(), vec![HistoryItem::file("/proj/x")]);
    }

    #[test]
    fn set_capacity_trims_oldest() {
        let mut history = NavigationHistory::new(None);
        for name in ["a", "b", "c", "d"] {
            history.record(name, HistoryKind::File);
        }
        history.set_capacity(Some(2));
        assert_eq!(paths(&history), vec!["c", "d"]);
        history.set_capacity(Some(0));
        assert_eq!(paths(&history), vec!["d"]);
    }

    #[test]
    fn remove_and_clear() {
        let mut history = NavigationHistory::new(None);
        history.record("x", HistoryKind::File);
        history.record("y", HistoryKind::Folder);
        assert!(history.remove("x"));
        assert!(!history.remove("missing"));
        assert_eq!(history.len(), 1);
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn from_items_restores_order() {
        let items = vec![
            HistoryItem::folder("/p"),
            HistoryItem::file("/p/a.md"),
            HistoryItem::file("/p/b.md"),
        ];
        let history = NavigationHistory::from_items(items, Some(2));
        assert_eq!(paths(&history), vec!["/p/a.md", "/p/b.md"]);
    }
}
