//! Input adapters.
//!
//! [`Controls`] turns raw keyboard and pointer events into navigator calls.
//! It keeps the only input state there is: the start of the current
//! pointer gesture and which dot has keyboard focus.

use raylib::prelude::{KeyboardKey, Vector2};
use tracing::debug;

use crate::layout::Hit;
use crate::navigator::{Command, NavigationObserver, SlideNavigator, Transition};

/// Raw input, already stripped of the windowing library's polling.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    Key { key: KeyboardKey, shift: bool },
    PointerPressed(Vector2),
    /// `target` is the control under the pointer at release time.
    PointerReleased { at: Vector2, target: Option<Hit> },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Navigated(Transition),
    ToggleFullscreen,
    BulkRender,
    FocusChanged(Option<usize>),
    Ignored,
}

/// Global navigation keys.
pub fn key_command(key: KeyboardKey) -> Option<Command> {
    match key {
        KeyboardKey::KEY_LEFT | KeyboardKey::KEY_UP => Some(Command::Previous),
        KeyboardKey::KEY_RIGHT | KeyboardKey::KEY_DOWN | KeyboardKey::KEY_SPACE => Some(Command::Next),
        KeyboardKey::KEY_HOME => Some(Command::First),
        KeyboardKey::KEY_END => Some(Command::Last),
        _ => None,
    }
}

/// Recognises horizontal swipes between a press and a release.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    start: Option<Vector2>,
}

/// What a completed pointer gesture turned out to be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Swipe(Command),
    /// Movement stayed within the threshold.
    Tap,
    /// Too vertical, or long but not dominant horizontally.
    Ignored,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self { threshold, start: None }
    }

    pub fn begin(&mut self, at: Vector2) {
        self.start = Some(at);
    }

    /// Finishes the gesture. State resets whatever the outcome.
    pub fn end(&mut self, at: Vector2) -> Gesture {
        let Some(start) = self.start.take() else {
            return Gesture::Ignored;
        };

        let diff_x = start.x - at.x;
        let diff_y = start.y - at.y;

        if diff_x.abs() > diff_y.abs() && diff_x.abs() > self.threshold {
            // Dragging leftward reveals the next slide
            let command = if diff_x > 0.0 { Command::Next } else { Command::Previous };
            Gesture::Swipe(command)
        } else if diff_x.abs() <= self.threshold && diff_y.abs() <= self.threshold {
            Gesture::Tap
        } else {
            Gesture::Ignored
        }
    }
}

/// Keyboard focus over the position dots.
#[derive(Debug, Clone)]
pub struct DotFocus {
    total: usize,
    focused: Option<usize>,
}

impl DotFocus {
    pub fn new(total: usize) -> Self {
        Self { total, focused: None }
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn focus_next(&mut self) {
        self.focused = match self.focused {
            Some(dot) if dot < self.total => Some(dot + 1),
            Some(_) => None,
            None if self.total > 0 => Some(1),
            None => None,
        };
    }

    pub fn focus_previous(&mut self) {
        self.focused = match self.focused {
            Some(dot) if dot > 1 => Some(dot - 1),
            Some(_) => None,
            None if self.total > 0 => Some(self.total),
            None => None,
        };
    }

    pub fn clear(&mut self) {
        self.focused = None;
    }
}

pub struct Controls {
    pub swipe: SwipeTracker,
    pub focus: DotFocus,
}

impl Controls {
    pub fn new(total: usize, swipe_threshold: f32) -> Self {
        Self {
            swipe: SwipeTracker::new(swipe_threshold),
            focus: DotFocus::new(total),
        }
    }

    pub fn handle<O: NavigationObserver>(
        &mut self,
        event: InputEvent,
        navigator: &mut SlideNavigator<O>,
    ) -> Outcome {
        match event {
            InputEvent::Key { key, shift } => self.handle_key(key, shift, navigator),
            InputEvent::PointerPressed(at) => {
                self.swipe.begin(at);
                Outcome::Ignored
            }
            InputEvent::PointerReleased { at, target } => match self.swipe.end(at) {
                Gesture::Swipe(command) => {
                    debug!(?command, "Swipe");
                    Outcome::Navigated(navigator.apply(command))
                }
                Gesture::Tap => {
                    self.focus.clear();
                    match target {
                        Some(Hit::Previous) => Outcome::Navigated(navigator.previous()),
                        Some(Hit::Next) => Outcome::Navigated(navigator.next()),
                        Some(Hit::Dot(dot)) => Outcome::Navigated(navigator.go_to(dot)),
                        Some(Hit::Fullscreen) => Outcome::ToggleFullscreen,
                        None => Outcome::Ignored,
                    }
                }
                Gesture::Ignored => Outcome::Ignored,
            },
        }
    }

    fn handle_key<O: NavigationObserver>(
        &mut self,
        key: KeyboardKey,
        shift: bool,
        navigator: &mut SlideNavigator<O>,
    ) -> Outcome {
        match key {
            KeyboardKey::KEY_TAB => {
                if shift {
                    self.focus.focus_previous();
                } else {
                    self.focus.focus_next();
                }
                return Outcome::FocusChanged(self.focus.focused());
            }
            KeyboardKey::KEY_ENTER | KeyboardKey::KEY_KP_ENTER | KeyboardKey::KEY_SPACE => {
                // A focused dot consumes the activation key
                if let Some(dot) = self.focus.focused() {
                    return Outcome::Navigated(navigator.go_to(dot));
                }
            }
            KeyboardKey::KEY_F => return Outcome::ToggleFullscreen,
            KeyboardKey::KEY_P => return Outcome::BulkRender,
            _ => {}
        }

        match key_command(key) {
            Some(command) => Outcome::Navigated(navigator.apply(command)),
            None => Outcome::Ignored,
        }
    }
}
