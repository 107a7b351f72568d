use indexmap::IndexMap;

/// Occurrence counter that remembers first-seen order, so chart labels come
/// out in the order answers appear in the export.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    counts: IndexMap<String, u64>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: impl Into<String>) {
        *self.counts.entry(key.into()).or_insert(0) += 1;
    }

    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn labels(&self) -> Vec<String> {
        self.counts.keys().cloned().collect()
    }

    pub fn values(&self) -> Vec<u64> {
        self.counts.values().copied().collect()
    }

    /// The `n` highest counts, highest first. Equal counts keep first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> =
            self.counts.iter().map(|(k, v)| (k.clone(), *v)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }

    /// First entry holding the maximum count.
    pub fn top(&self) -> Option<(&str, u64)> {
        self.iter().fold(None, |best, (k, v)| match best {
            Some((_, best_v)) if best_v >= v => best,
            _ => Some((k, v)),
        })
    }
}

impl<S: Into<String>> FromIterator<S> for Tally {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_seen_order() {
        let tally: Tally = ["b", "a", "b", "c"].into_iter().collect();
        assert_eq!(tally.labels(), vec!["b", "a", "c"]);
        assert_eq!(tally.values(), vec![2, 1, 1]);
    }

    #[test]
    fn most_common_breaks_ties_by_first_seen() {
        let tally: Tally = ["x", "y", "z", "y", "z", "w"].into_iter().collect();
        let top = tally.most_common(3);
        assert_eq!(
            top,
            vec![("y".to_string(), 2), ("z".to_string(), 2), ("x".to_string(), 1)]
        );
    }

    #[test]
    fn top_returns_first_maximum() {
        let tally: Tally = ["a", "b", "b", "a", "c"].into_iter().collect();
        assert_eq!(tally.top(), Some(("a", 2)));
        assert_eq!(Tally::new().top(), None);
    }
}
