use crate::navigator::{NavigationObserver, Position};

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingReveal {
    slide: usize,
    remaining: f32,
}

/// Which slides are drawn.
///
/// A transition hides every slide at once and reveals the new one after
/// `reveal_delay` seconds, so an exit is perceptible before the entrance
/// starts. Only the latest transition's reveal is kept.
#[derive(Debug, Clone)]
pub struct SlideVisibility {
    visible: Vec<bool>,
    pending: Option<PendingReveal>,
    revealed: Option<usize>,
    reveal_delay: f32,
}

impl SlideVisibility {
    pub fn new(total: usize, reveal_delay: f32) -> Self {
        Self {
            visible: vec![false; total],
            pending: None,
            revealed: None,
            reveal_delay: reveal_delay.max(0.0),
        }
    }

    pub fn is_visible(&self, slide: usize) -> bool {
        slide >= 1 && self.visible.get(slide - 1).copied().unwrap_or(false)
    }

    /// Ordinals of every visible slide, ascending.
    pub fn visible_slides(&self) -> impl Iterator<Item = usize> + '_ {
        self.visible
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(|(i, _)| i + 1)
    }

    /// Advances the reveal delay by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        pending.remaining -= dt;
        if pending.remaining <= 0.0 {
            let slide = pending.slide;
            self.pending = None;
            self.reveal(slide);
        }
    }

    /// The slide revealed since the last call, if any.
    pub fn take_revealed(&mut self) -> Option<usize> {
        self.revealed.take()
    }

    /// Marks every slide visible for a bulk render. The next transition
    /// restores single-slide visibility.
    pub fn show_all(&mut self) {
        self.pending = None;
        self.revealed = None;
        self.visible.iter_mut().for_each(|v| *v = true);
    }

    fn reveal(&mut self, slide: usize) {
        if let Some(v) = self.visible.get_mut(slide - 1) {
            *v = true;
            self.revealed = Some(slide);
        }
    }
}

impl NavigationObserver for SlideVisibility {
    fn on_transition(&mut self, position: Position) {
        self.revealed = None;
        self.visible.iter_mut().for_each(|v| *v = false);

        if self.reveal_delay > 0.0 {
            self.pending = Some(PendingReveal {
                slide: position.current,
                remaining: self.reveal_delay,
            });
        } else {
            self.pending = None;
            self.reveal(position.current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(current: usize, total: usize) -> Position {
        Position { current, total }
    }

    #[test]
    fn reveal_waits_for_the_delay() {
        let mut visibility = SlideVisibility::new(5, 0.05);
        visibility.on_transition(at(2, 5));
        assert_eq!(visibility.visible_slides().count(), 0);
        assert_eq!(visibility.take_revealed(), None);

        visibility.update(0.03);
        assert!(!visibility.is_visible(2));

        visibility.update(0.03);
        assert_eq!(visibility.visible_slides().collect::<Vec<_>>(), vec![2]);
        assert_eq!(visibility.take_revealed(), Some(2));
        assert_eq!(visibility.take_revealed(), None);
    }

    #[test]
    fn zero_delay_reveals_immediately() {
        let mut visibility = SlideVisibility::new(3, 0.0);
        visibility.on_transition(at(3, 3));
        assert_eq!(visibility.visible_slides().collect::<Vec<_>>(), vec![3]);
        assert_eq!(visibility.take_revealed(), Some(3));
    }

    #[test]
    fn newer_transition_replaces_pending_reveal() {
        let mut visibility = SlideVisibility::new(5, 0.05);
        visibility.on_transition(at(2, 5));
        visibility.update(0.02);
        visibility.on_transition(at(3, 5));
        visibility.update(0.1);
        assert_eq!(visibility.visible_slides().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn transition_hides_previous_slide_synchronously() {
        let mut visibility = SlideVisibility::new(4, 0.05);
        visibility.on_transition(at(1, 4));
        visibility.update(0.1);
        assert!(visibility.is_visible(1));

        visibility.on_transition(at(2, 4));
        assert!(!visibility.is_visible(1));
    }

    #[test]
    fn show_all_then_render_restores_single_slide() {
        let mut visibility = SlideVisibility::new(4, 0.0);
        visibility.on_transition(at(2, 4));
        visibility.show_all();
        assert_eq!(visibility.visible_slides().count(), 4);

        visibility.on_transition(at(2, 4));
        assert_eq!(visibility.visible_slides().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn ordinal_zero_is_never_visible() {
        let visibility = SlideVisibility::new(2, 0.0);
        assert!(!visibility.is_visible(0));
        assert!(!visibility.is_visible(3));
    }
}
