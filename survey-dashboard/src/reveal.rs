pub const REVEAL_SELECTOR: &str = ".section, .chart-container, .insight-card, .quote-card";
pub const REVEAL_CLASS: &str = "fade-in-up";
/// Set on the root element once the controller runs; the stylesheet hides
/// unrevealed elements only below it.
pub const REVEAL_READY_CLASS: &str = "reveal-ready";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// One visibility change reported by the observer for the element at `index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crossing {
    pub index: usize,
    pub intersecting: bool,
}

pub trait RevealSurface {
    fn mark_revealed(&self, index: usize);
    fn unobserve(&self, index: usize);
}

/// Tracks which observed elements already faded in. Each element is marked
/// and unobserved at most once, whatever the observer reports afterwards.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    #[cfg(test)]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }

    pub fn apply(
        &mut self,
        crossings: impl IntoIterator<Item = Crossing>,
        surface: &impl RevealSurface,
    ) -> usize {
        let mut newly = 0;
        for crossing in crossings {
            if !crossing.intersecting {
                continue;
            }
            let Some(slot) = self.revealed.get_mut(crossing.index) else {
                continue;
            };
            if *slot {
                continue;
            }
            *slot = true;
            surface.mark_revealed(crossing.index);
            surface.unobserve(crossing.index);
            newly += 1;
        }
        newly
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        marked: RefCell<Vec<usize>>,
        unobserved: RefCell<Vec<usize>>,
    }

    impl RevealSurface for Recorder {
        fn mark_revealed(&self, index: usize) {
            self.marked.borrow_mut().push(index);
        }

        fn unobserve(&self, index: usize) {
            self.unobserved.borrow_mut().push(index);
        }
    }

    fn hit(index: usize) -> Crossing {
        Crossing {
            index,
            intersecting: true,
        }
    }

    #[test]
    fn marks_intersecting_sections_once() {
        let mut tracker = RevealTracker::new(3);
        let surface = Recorder::default();

        assert_eq!(tracker.apply([hit(1)], &surface), 1);
        assert_eq!(tracker.apply([hit(1), hit(1)], &surface), 0);

        assert_eq!(*surface.marked.borrow(), vec![1]);
        assert_eq!(*surface.unobserved.borrow(), vec![1]);
        assert!(tracker.is_revealed(1));
        assert_eq!(tracker.pending(), 2);
    }

    #[test]
    fn leaving_viewport_does_not_reveal() {
        let mut tracker = RevealTracker::new(2);
        let surface = Recorder::default();
        let out = Crossing {
            index: 0,
            intersecting: false,
        };

        assert_eq!(tracker.apply([out], &surface), 0);
        assert!(surface.marked.borrow().is_empty());
        assert!(!tracker.is_revealed(0));
    }

    #[test]
    fn unknown_elements_are_ignored() {
        let mut tracker = RevealTracker::new(1);
        let surface = Recorder::default();
        assert_eq!(tracker.apply([hit(7)], &surface), 0);
        assert!(surface.unobserved.borrow().is_empty());
    }

    #[test]
    fn stylesheet_uses_controller_classes() {
        let css = include_str!("../../static/css/dashboard.css");
        for selector in REVEAL_SELECTOR.split(", ") {
            assert!(css.contains(&format!(".{REVEAL_READY_CLASS} {selector}")), "{selector}");
        }
        assert!(css.contains(&format!(".{REVEAL_CLASS} {{")));
    }
}
