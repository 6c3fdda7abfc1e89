//! Slide navigation state machine.
//!
//! [`SlideNavigator`] owns the 1-based current position of a deck and is the
//! only place it changes. Every successful transition is pushed to a
//! [`NavigationObserver`]; requests that would leave `1..=total` are ignored.

use tracing::{debug, trace};

use crate::error::NavigationError;

/// Position handed to observers after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub current: usize,
    pub total: usize,
}

impl Position {
    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The current slide changed and observers were notified.
    Moved { from: usize, to: usize },
    /// The target was already current; observers re-asserted the same state.
    Reasserted { at: usize },
    /// The target was out of range; nothing happened.
    Ignored { requested: usize },
}

/// Navigation requests produced by the input adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Previous,
    Next,
    First,
    Last,
    GoTo(usize),
}

/// Receives every rendered transition, in order.
pub trait NavigationObserver {
    fn on_transition(&mut self, position: Position);
}

impl NavigationObserver for () {
    fn on_transition(&mut self, _position: Position) {}
}

impl<O: NavigationObserver + ?Sized> NavigationObserver for Box<O> {
    fn on_transition(&mut self, position: Position) {
        (**self).on_transition(position);
    }
}

impl NavigationObserver for Vec<Box<dyn NavigationObserver>> {
    fn on_transition(&mut self, position: Position) {
        for observer in self.iter_mut() {
            observer.on_transition(position);
        }
    }
}

// A is always notified before B
impl<A: NavigationObserver, B: NavigationObserver> NavigationObserver for (A, B) {
    fn on_transition(&mut self, position: Position) {
        self.0.on_transition(position);
        self.1.on_transition(position);
    }
}

pub struct SlideNavigator<O> {
    current: usize,
    total: usize,
    observer: O,
}

impl<O: NavigationObserver> SlideNavigator<O> {
    /// Creates a navigator positioned on the first slide.
    ///
    /// The observer is not notified; call [`SlideNavigator::render`] once the
    /// surrounding view is ready.
    pub fn new(total: usize, observer: O) -> Result<Self, NavigationError> {
        if total == 0 {
            return Err(NavigationError::EmptyDeck);
        }
        Ok(Self {
            current: 1,
            total,
            observer,
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn position(&self) -> Position {
        Position {
            current: self.current,
            total: self.total,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Jumps to `slide` if it lies in `1..=total`.
    pub fn go_to(&mut self, slide: usize) -> Transition {
        if slide < 1 || slide > self.total {
            trace!(slide, total = self.total, "Ignoring out-of-range slide request");
            return Transition::Ignored { requested: slide };
        }

        let from = self.current;
        self.current = slide;
        self.observer.on_transition(self.position());

        if from == slide {
            Transition::Reasserted { at: slide }
        } else {
            debug!(from, to = slide, total = self.total, "Slide transition");
            Transition::Moved { from, to: slide }
        }
    }

    pub fn next(&mut self) -> Transition {
        if self.current < self.total {
            self.go_to(self.current + 1)
        } else {
            trace!("Already on the last slide");
            Transition::Ignored {
                requested: self.current + 1,
            }
        }
    }

    pub fn previous(&mut self) -> Transition {
        if self.current > 1 {
            self.go_to(self.current - 1)
        } else {
            trace!("Already on the first slide");
            Transition::Ignored { requested: 0 }
        }
    }

    pub fn first(&mut self) -> Transition {
        self.go_to(1)
    }

    pub fn last(&mut self) -> Transition {
        self.go_to(self.total)
    }

    pub fn apply(&mut self, command: Command) -> Transition {
        match command {
            Command::Previous => self.previous(),
            Command::Next => self.next(),
            Command::First => self.first(),
            Command::Last => self.last(),
            Command::GoTo(slide) => self.go_to(slide),
        }
    }

    /// Pushes the current position to the observer again without moving.
    pub fn render(&mut self) {
        self.observer.on_transition(self.position());
    }
}
