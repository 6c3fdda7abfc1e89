//! Render state driven by the navigator.
//!
//! Each observer keeps only what the presenter needs to draw. [`Stage`]
//! owns all of them and notifies them in a fixed order: visibility, dots,
//! readout, buttons, then the announcer.

mod announcer;
mod indicators;
mod visibility;

pub use announcer::Announcer;
pub use indicators::{DotIndicator, NavButtons, PositionReadout};
pub use visibility::SlideVisibility;

use tracing::trace;

use crate::config::Config;
use crate::constants::*;
use crate::deck::Deck;
use crate::navigator::{NavigationObserver, Position};

/// Replaces `{index}`, `{total}` and `{title}` in a label template.
pub fn fill_template(template: &str, index: usize, total: usize, title: &str) -> String {
    template
        .replace("{index}", &index.to_string())
        .replace("{total}", &total.to_string())
        .replace("{title}", title)
}

#[derive(Debug, Clone)]
pub struct StageOptions {
    /// Seconds between hiding the old slide and showing the new one.
    pub reveal_delay: f32,
    pub announcement: String,
    pub dot_label: String,
    pub previous_label: String,
    pub next_label: String,
}

impl Default for StageOptions {
    fn default() -> Self {
        Self {
            reveal_delay: REVEAL_DELAY_MS as f32 / 1000.0,
            announcement: ANNOUNCEMENT_TEMPLATE.to_string(),
            dot_label: DOT_LABEL_TEMPLATE.to_string(),
            previous_label: PREVIOUS_LABEL.to_string(),
            next_label: NEXT_LABEL.to_string(),
        }
    }
}

impl From<&Config> for StageOptions {
    fn from(config: &Config) -> Self {
        Self {
            reveal_delay: config.reveal_delay(),
            announcement: config.accessibility.announcement.clone(),
            dot_label: config.accessibility.dot_label.clone(),
            previous_label: config.accessibility.previous_label.clone(),
            next_label: config.accessibility.next_label.clone(),
        }
    }
}

pub struct Stage {
    pub visibility: SlideVisibility,
    pub dots: DotIndicator,
    pub readout: PositionReadout,
    pub buttons: NavButtons,
    pub announcer: Announcer,
}

impl Stage {
    pub fn new(titles: Vec<String>, options: &StageOptions) -> Self {
        let total = titles.len();
        Self {
            visibility: SlideVisibility::new(total, options.reveal_delay),
            dots: DotIndicator::new(total, &options.dot_label),
            readout: PositionReadout::new(total),
            buttons: NavButtons::new(total, &options.previous_label, &options.next_label),
            announcer: Announcer::new(titles, &options.announcement),
        }
    }

    pub fn for_deck(deck: &Deck, options: &StageOptions) -> Self {
        Self::new(deck.titles(), options)
    }

    /// The observers in notification order.
    fn parts_mut(&mut self) -> [(&'static str, &mut dyn NavigationObserver); 5] {
        [
            ("visibility", &mut self.visibility),
            ("dots", &mut self.dots),
            ("readout", &mut self.readout),
            ("buttons", &mut self.buttons),
            ("announcer", &mut self.announcer),
        ]
    }
}

impl NavigationObserver for Stage {
    fn on_transition(&mut self, position: Position) {
        for (name, observer) in self.parts_mut() {
            trace!(observer = name, slide = position.current, "Notify");
            observer.on_transition(position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::SlideNavigator;

    fn stage(total: usize) -> Stage {
        let titles = (1..=total).map(|i| format!("Title {i}")).collect();
        let options = StageOptions {
            reveal_delay: 0.0,
            ..StageOptions::default()
        };
        Stage::new(titles, &options)
    }

    fn assert_rendered_at(nav: &SlideNavigator<Stage>, k: usize) {
        let stage = nav.observer();
        let total = nav.total();
        assert_eq!(stage.visibility.visible_slides().collect::<Vec<_>>(), vec![k]);
        assert_eq!((1..=total).filter(|d| stage.dots.is_active(*d)).count(), 1);
        assert!(stage.dots.is_active(k));
        assert_eq!(stage.buttons.previous_enabled, k != 1);
        assert_eq!(stage.buttons.next_enabled, k != total);
        assert_eq!(stage.readout.to_string(), format!("{k} / {total}"));
    }

    #[test]
    fn five_nexts_render_slide_six() {
        let mut nav = SlideNavigator::new(10, stage(10)).unwrap();
        nav.render();
        for _ in 0..5 {
            nav.next();
        }
        assert_eq!(nav.current(), 6);
        assert_rendered_at(&nav, 6);
        assert_eq!(nav.observer_mut().announcer.take_update(), Some("Slide 6: Title 6"));
    }

    #[test]
    fn previous_at_start_keeps_previous_disabled() {
        let mut nav = SlideNavigator::new(10, stage(10)).unwrap();
        nav.render();
        nav.previous();
        assert_eq!(nav.current(), 1);
        assert_rendered_at(&nav, 1);
        assert!(!nav.observer().buttons.previous_enabled);
    }

    #[test]
    fn next_at_end_keeps_next_disabled() {
        let mut nav = SlideNavigator::new(10, stage(10)).unwrap();
        nav.go_to(10);
        nav.next();
        assert_eq!(nav.current(), 10);
        assert_rendered_at(&nav, 10);
        assert!(!nav.observer().buttons.next_enabled);
    }

    #[test]
    fn every_reachable_slide_renders_consistently() {
        let mut nav = SlideNavigator::new(6, stage(6)).unwrap();
        for k in [3, 1, 6, 2, 5, 4] {
            nav.go_to(k);
            assert_rendered_at(&nav, k);
        }
    }

    #[test]
    fn ignored_request_leaves_render_state_alone() {
        let mut nav = SlideNavigator::new(10, stage(10)).unwrap();
        nav.go_to(4);
        nav.observer_mut().announcer.take_update();
        nav.go_to(0);
        nav.go_to(11);
        assert_rendered_at(&nav, 4);
        assert_eq!(nav.observer_mut().announcer.take_update(), None);
    }

    #[test]
    fn bulk_render_round_trip_restores_current_slide() {
        let mut nav = SlideNavigator::new(3, stage(3)).unwrap();
        nav.go_to(2);
        nav.observer_mut().visibility.show_all();
        assert_eq!(nav.observer().visibility.visible_slides().count(), 3);
        nav.render();
        assert_rendered_at(&nav, 2);
    }

    #[test]
    fn fill_template_replaces_every_placeholder() {
        assert_eq!(fill_template("{index} of {total}: {title}", 2, 9, "Plot"), "2 of 9: Plot");
        assert_eq!(fill_template("no placeholders", 1, 1, "x"), "no placeholders");
    }

    #[test]
    fn stage_notifies_in_render_order() {
        let mut stage = stage(3);
        let names: Vec<&str> = stage.parts_mut().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["visibility", "dots", "readout", "buttons", "announcer"]);
    }

    #[test]
    fn extra_listener_runs_after_the_stage() {
        use std::cell::RefCell;
        use std::rc::Rc;

        struct Snapshot(Rc<RefCell<Vec<usize>>>);

        impl NavigationObserver for Snapshot {
            fn on_transition(&mut self, position: Position) {
                self.0.borrow_mut().push(position.current);
            }
        }

        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut nav = SlideNavigator::new(4, (stage(4), Snapshot(seen.clone()))).unwrap();
        nav.go_to(3);
        nav.go_to(9);
        assert_eq!(*seen.borrow(), vec![3]);
        assert!(nav.observer().0.dots.is_active(3));
        assert_eq!(nav.observer_mut().0.announcer.take_update(), Some("Slide 3: Title 3"));
    }
}
