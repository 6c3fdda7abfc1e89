use tracing::info;

use crate::navigator::{NavigationObserver, Position};
use crate::observers::fill_template;

/// Polite live region announcing the slide that just became current.
#[derive(Debug, Clone)]
pub struct Announcer {
    titles: Vec<String>,
    template: String,
    message: Option<String>,
    updated: bool,
}

impl Announcer {
    pub fn new(titles: Vec<String>, template: &str) -> Self {
        Self {
            titles,
            template: template.to_string(),
            message: None,
            updated: false,
        }
    }

    /// The latest message if it has not been consumed yet.
    pub fn take_update(&mut self) -> Option<&str> {
        if !std::mem::take(&mut self.updated) {
            return None;
        }
        self.message.as_deref()
    }
}

impl NavigationObserver for Announcer {
    fn on_transition(&mut self, position: Position) {
        let title = position
            .current
            .checked_sub(1)
            .and_then(|i| self.titles.get(i))
            .map(String::as_str)
            .unwrap_or_default();
        let message = fill_template(&self.template, position.current, position.total, title);
        info!(target: "slidedeck::announce", politeness = "polite", "{}", message);
        self.message = Some(message);
        self.updated = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles() -> Vec<String> {
        vec!["Intro".to_string(), "Plot".to_string(), "Ending".to_string()]
    }

    #[test]
    fn announces_ordinal_and_title() {
        let mut announcer = Announcer::new(titles(), "Slide {index}: {title}");
        announcer.on_transition(Position { current: 2, total: 3 });
        assert_eq!(announcer.take_update(), Some("Slide 2: Plot"));
    }

    #[test]
    fn update_is_consumed_once() {
        let mut announcer = Announcer::new(titles(), "{index}/{total} {title}");
        assert_eq!(announcer.take_update(), None);

        announcer.on_transition(Position { current: 3, total: 3 });
        assert_eq!(announcer.take_update(), Some("3/3 Ending"));
        assert_eq!(announcer.take_update(), None);
    }

    #[test]
    fn reasserting_announces_again() {
        let mut announcer = Announcer::new(titles(), "Slide {index}: {title}");
        announcer.on_transition(Position { current: 1, total: 3 });
        announcer.take_update();
        announcer.on_transition(Position { current: 1, total: 3 });
        assert_eq!(announcer.take_update(), Some("Slide 1: Intro"));
    }
}
