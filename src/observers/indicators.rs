use std::fmt;

use crate::navigator::{NavigationObserver, Position};
use crate::observers::fill_template;

/// One position dot per slide; exactly one is active after a transition.
#[derive(Debug, Clone)]
pub struct DotIndicator {
    active: Vec<bool>,
    labels: Vec<String>,
}

impl DotIndicator {
    pub fn new(total: usize, label_template: &str) -> Self {
        let labels = (1..=total)
            .map(|i| fill_template(label_template, i, total, ""))
            .collect();
        let mut active = vec![false; total];
        if let Some(first) = active.first_mut() {
            *first = true;
        }
        Self { active, labels }
    }

    pub fn is_active(&self, dot: usize) -> bool {
        dot >= 1 && self.active.get(dot - 1).copied().unwrap_or(false)
    }

    pub fn label(&self, dot: usize) -> Option<&str> {
        dot.checked_sub(1)
            .and_then(|i| self.labels.get(i))
            .map(String::as_str)
    }
}

impl NavigationObserver for DotIndicator {
    fn on_transition(&mut self, position: Position) {
        for (i, active) in self.active.iter_mut().enumerate() {
            *active = i + 1 == position.current;
        }
    }
}

/// The "current / total" readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionReadout {
    pub current: usize,
    pub total: usize,
}

impl PositionReadout {
    pub fn new(total: usize) -> Self {
        Self { current: 1, total }
    }
}

impl fmt::Display for PositionReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.current, self.total)
    }
}

impl NavigationObserver for PositionReadout {
    fn on_transition(&mut self, position: Position) {
        self.current = position.current;
        self.total = position.total;
    }
}

/// Enablement of the previous and next controls.
#[derive(Debug, Clone)]
pub struct NavButtons {
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub previous_label: String,
    pub next_label: String,
}

impl NavButtons {
    pub fn new(total: usize, previous_label: &str, next_label: &str) -> Self {
        Self {
            previous_enabled: false,
            next_enabled: total > 1,
            previous_label: previous_label.to_string(),
            next_label: next_label.to_string(),
        }
    }
}

impl NavigationObserver for NavButtons {
    fn on_transition(&mut self, position: Position) {
        self.previous_enabled = !position.is_first();
        self.next_enabled = !position.is_last();
    }
}
