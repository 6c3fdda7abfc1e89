//! Screen geometry for the slide area and the navigation chrome.

use raylib::prelude::{Rectangle, Vector2};

const BAR_HEIGHT: f32 = 64.0;
const BUTTON_WIDTH: f32 = 120.0;
const BUTTON_HEIGHT: f32 = 40.0;
const MARGIN: f32 = 20.0;
const DOT_SPACING: f32 = 24.0;
const DOT_HIT_SIZE: f32 = 20.0;
const READOUT_WIDTH: f32 = 90.0;
const FULLSCREEN_SIZE: f32 = 40.0;

/// Something the pointer can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Previous,
    Next,
    Dot(usize),
    Fullscreen,
}

#[derive(Debug, Clone)]
pub struct ChromeLayout {
    pub slide_area: Rectangle,
    pub previous: Rectangle,
    pub next: Rectangle,
    /// Hit boxes, one per slide; the dot is drawn at the center.
    pub dots: Vec<Rectangle>,
    pub readout: Vector2,
    pub fullscreen: Rectangle,
}

pub fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

pub fn center(rect: &Rectangle) -> Vector2 {
    Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5)
}

impl ChromeLayout {
    pub fn compute(width: f32, height: f32, total: usize) -> Self {
        let bar_top = height - BAR_HEIGHT;
        let button_top = bar_top + (BAR_HEIGHT - BUTTON_HEIGHT) * 0.5;

        let previous = Rectangle::new(MARGIN, button_top, BUTTON_WIDTH, BUTTON_HEIGHT);
        let next = Rectangle::new(width - MARGIN - BUTTON_WIDTH, button_top, BUTTON_WIDTH, BUTTON_HEIGHT);

        // Dots share the space between the buttons with the readout and
        // squeeze together when the deck is long.
        let available = (next.x - (previous.x + previous.width) - READOUT_WIDTH - 2.0 * MARGIN).max(0.0);
        let spacing = if total > 0 {
            DOT_SPACING.min(available / total as f32)
        } else {
            DOT_SPACING
        };
        let hit = DOT_HIT_SIZE.min(spacing);
        let row_width = spacing * total as f32 + READOUT_WIDTH;
        let row_left = (width - row_width) * 0.5;
        let dot_center_y = bar_top + BAR_HEIGHT * 0.5;

        let dots = (0..total)
            .map(|i| {
                let cx = row_left + spacing * (i as f32 + 0.5);
                Rectangle::new(cx - hit * 0.5, dot_center_y - hit * 0.5, hit, hit)
            })
            .collect();

        let readout = Vector2::new(row_left + spacing * total as f32 + MARGIN * 0.5, dot_center_y - 10.0);

        Self {
            slide_area: Rectangle::new(
                MARGIN,
                FULLSCREEN_SIZE + MARGIN,
                (width - 2.0 * MARGIN).max(0.0),
                (bar_top - FULLSCREEN_SIZE - 2.0 * MARGIN).max(0.0),
            ),
            previous,
            next,
            dots,
            readout,
            fullscreen: Rectangle::new(width - MARGIN - FULLSCREEN_SIZE, MARGIN * 0.5, FULLSCREEN_SIZE, FULLSCREEN_SIZE),
        }
    }

    /// Full-page slide area without chrome, for bulk rendering.
    pub fn page(width: f32, height: f32) -> Rectangle {
        Rectangle::new(MARGIN, MARGIN, width - 2.0 * MARGIN, height - 2.0 * MARGIN)
    }

    pub fn hit_test(&self, point: Vector2) -> Option<Hit> {
        if contains(&self.previous, point) {
            return Some(Hit::Previous);
        }
        if contains(&self.next, point) {
            return Some(Hit::Next);
        }
        if contains(&self.fullscreen, point) {
            return Some(Hit::Fullscreen);
        }
        self.dots
            .iter()
            .position(|dot| contains(dot, point))
            .map(|i| Hit::Dot(i + 1))
    }
}
