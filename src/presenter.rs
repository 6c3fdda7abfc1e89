use std::path::Path;

use anyhow::{Context, Result};
use raylib::prelude::*;
use tracing::{debug, info};

use crate::config::{Config, Palette};
use crate::deck::Deck;
use crate::error::ExportError;
use crate::export::{clear_page, page_path, prepare_directory};
use crate::input::{Controls, InputEvent, Outcome};
use crate::layout::{ChromeLayout, Hit, center};
use crate::navigator::SlideNavigator;
use crate::observers::{Stage, StageOptions};
use crate::slide::{SlideView, faded, sync_entrances};
use crate::texture_loader::load_texture_with_exif_rotation;

const LABEL_SIZE: i32 = 20;
const DOT_RADIUS: f32 = 6.0;

/// Window front end: polls raylib input into [`Controls`] and draws the
/// [`Stage`] every frame.
pub struct Presenter {
    navigator: SlideNavigator<Stage>,
    controls: Controls,
    views: Vec<SlideView>,
    palette: Palette,
    layout: ChromeLayout,
    hover: Option<Hit>,
    deck_title: Option<String>,
}

impl Presenter {
    pub fn new(rl: &mut RaylibHandle, thread: &RaylibThread, deck: &Deck, config: &Config) -> Result<Self> {
        let palette = config.theme.palette()?;
        let entrance = config.entrance_duration();

        let mut views = Vec::with_capacity(deck.len());
        for slide in deck.slides() {
            let image = match &slide.image {
                Some(path) => Some(
                    load_texture_with_exif_rotation(rl, thread, path)
                        .with_context(|| format!("Failed to load slide {}", slide.ordinal))?,
                ),
                None => None,
            };
            views.push(SlideView::new(slide, image, entrance));
        }

        let stage = Stage::for_deck(deck, &StageOptions::from(config));
        let mut navigator = SlideNavigator::new(deck.len(), stage)?;
        navigator.render();

        let layout = ChromeLayout::compute(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            deck.len(),
        );

        info!(slides = deck.len(), "Presenter ready");

        Ok(Self {
            navigator,
            controls: Controls::new(deck.len(), config.navigation.swipe_threshold),
            views,
            palette,
            layout,
            hover: None,
            deck_title: deck.title.clone(),
        })
    }

    /// Feeds this frame's keyboard and pointer input to the controls.
    /// Returns the outcomes the caller must act on (fullscreen, bulk render).
    pub fn poll_input(&mut self, rl: &mut RaylibHandle) -> Vec<Outcome> {
        self.layout = ChromeLayout::compute(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            self.navigator.total(),
        );

        let shift = rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT) || rl.is_key_down(KeyboardKey::KEY_RIGHT_SHIFT);
        let mut events = Vec::new();
        while let Some(key) = rl.get_key_pressed() {
            events.push(InputEvent::Key { key, shift });
        }

        let pointer = rl.get_mouse_position();
        self.hover = self.layout.hit_test(pointer);
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            events.push(InputEvent::PointerPressed(pointer));
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            events.push(InputEvent::PointerReleased { at: pointer, target: self.hover });
        }

        let mut outcomes = Vec::new();
        for event in events {
            match self.controls.handle(event, &mut self.navigator) {
                Outcome::Navigated(transition) => debug!(?transition, "Navigated"),
                Outcome::FocusChanged(dot) => debug!(?dot, "Dot focus changed"),
                Outcome::Ignored => {}
                outcome => outcomes.push(outcome),
            }
        }
        outcomes
    }

    pub fn update(&mut self, dt: f32) {
        let stage = self.navigator.observer_mut();
        sync_entrances(
            &mut stage.visibility,
            self.views.iter_mut().map(|view| &mut view.entrance),
            dt,
        );
    }

    /// Announcement text not yet delivered to the live region.
    pub fn take_announcement(&mut self) -> Option<String> {
        self.navigator
            .observer_mut()
            .announcer
            .take_update()
            .map(str::to_owned)
    }

    pub fn draw<D: RaylibDraw>(&self, d: &mut D) {
        let stage = self.navigator.observer();
        let palette = &self.palette;
        d.clear_background(palette.background);

        for slide in stage.visibility.visible_slides() {
            if let Some(view) = self.views.get(slide - 1) {
                view.draw(d, self.layout.slide_area, palette);
            }
        }

        if let Some(title) = &self.deck_title {
            d.draw_text(title, 20, 16, LABEL_SIZE, palette.muted);
        }

        self.draw_button(d, self.layout.previous, "< Prev", stage.buttons.previous_enabled, Hit::Previous);
        self.draw_button(d, self.layout.next, "Next >", stage.buttons.next_enabled, Hit::Next);

        for (i, dot) in self.layout.dots.iter().enumerate() {
            let ordinal = i + 1;
            let c = center(dot);
            let radius = DOT_RADIUS.min(dot.width * 0.5);
            let color = if stage.dots.is_active(ordinal) { palette.accent } else { palette.muted };
            d.draw_circle_v(c, radius, color);
            if self.controls.focus.focused() == Some(ordinal) {
                d.draw_circle_lines(c.x as i32, c.y as i32, radius + 3.0, palette.foreground);
            }
        }

        d.draw_text(
            &stage.readout.to_string(),
            self.layout.readout.x as i32,
            self.layout.readout.y as i32,
            LABEL_SIZE,
            palette.foreground,
        );

        let fullscreen = self.layout.fullscreen;
        let outline = if self.hover == Some(Hit::Fullscreen) { palette.accent } else { palette.muted };
        d.draw_rectangle_lines_ex(fullscreen, 2.0, outline);
        d.draw_rectangle_lines_ex(
            Rectangle::new(fullscreen.x + 10.0, fullscreen.y + 10.0, fullscreen.width - 20.0, fullscreen.height - 20.0),
            2.0,
            outline,
        );

        self.draw_tooltip(d);
    }

    fn draw_button<D: RaylibDraw>(&self, d: &mut D, rect: Rectangle, text: &str, enabled: bool, hit: Hit) {
        let palette = &self.palette;
        let fill = match (enabled, self.hover == Some(hit)) {
            (false, _) => faded(palette.muted, 0.4),
            (true, true) => palette.accent,
            (true, false) => faded(palette.accent, 0.8),
        };
        d.draw_rectangle_rounded(rect, 0.3, 8, fill);
        let text_color = if enabled { palette.background } else { palette.muted };
        d.draw_text(
            text,
            (rect.x + 22.0) as i32,
            (rect.y + (rect.height - LABEL_SIZE as f32) * 0.5) as i32,
            LABEL_SIZE,
            text_color,
        );
    }

    /// Accessible label of the hovered control.
    fn draw_tooltip<D: RaylibDraw>(&self, d: &mut D) {
        let stage = self.navigator.observer();
        let (label, anchor) = match self.hover {
            Some(Hit::Previous) => (stage.buttons.previous_label.as_str(), self.layout.previous),
            Some(Hit::Next) => (stage.buttons.next_label.as_str(), self.layout.next),
            Some(Hit::Dot(dot)) => match (stage.dots.label(dot), self.layout.dots.get(dot - 1)) {
                (Some(label), Some(rect)) => (label, *rect),
                _ => return,
            },
            Some(Hit::Fullscreen) => (crate::constants::FULLSCREEN_LABEL, self.layout.fullscreen),
            None => return,
        };

        let x = anchor.x.min(self.layout.fullscreen.x - 200.0).max(0.0);
        let y = if anchor.y > self.layout.slide_area.y { anchor.y - 30.0 } else { anchor.y + anchor.height + 8.0 };
        d.draw_text(label, x as i32, y as i32, LABEL_SIZE - 4, self.palette.foreground);
    }

    /// Writes every slide as a PNG page into `dir`.
    ///
    /// All slides are made visible for the duration and the current slide is
    /// rendered again afterwards, whether or not the export succeeded.
    pub fn bulk_render(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        dir: &Path,
        width: i32,
        height: i32,
    ) -> Result<usize, ExportError> {
        prepare_directory(dir)?;
        let mut framebuffer = rl
            .load_render_texture(thread, width as u32, height as u32)
            .map_err(|e| ExportError::RenderTarget(e.to_string()))?;

        self.navigator.observer_mut().visibility.show_all();
        let pages: Vec<usize> = self.navigator.observer().visibility.visible_slides().collect();
        let result = self.render_pages(rl, thread, &mut framebuffer, &pages, dir, width, height);
        self.navigator.render();

        if let Ok(count) = &result {
            info!(pages = count, "Exported slides to {:?}", dir);
        }
        result
    }

    #[allow(clippy::too_many_arguments)]
    fn render_pages(
        &self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        framebuffer: &mut RenderTexture2D,
        pages: &[usize],
        dir: &Path,
        width: i32,
        height: i32,
    ) -> Result<usize, ExportError> {
        let total = self.navigator.total();
        let area = ChromeLayout::page(width as f32, height as f32);

        for &ordinal in pages {
            let Some(view) = self.views.get(ordinal - 1) else {
                continue;
            };

            rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
                let mut d = tmd.begin_drawing(thread);
                d.clear_background(self.palette.background);
                view.draw_static(&mut d, area, &self.palette);
            });

            // Render textures are stored bottom-up
            let mut image = framebuffer
                .load_image()
                .map_err(|e| ExportError::RenderTarget(e.to_string()))?;
            image.flip_vertical();

            let path = page_path(dir, ordinal, total);
            clear_page(&path)?;
            let _ = image.export_image(&path.to_string_lossy());
            if !path.is_file() {
                return Err(ExportError::WritePage(path));
            }
            debug!("Wrote {:?}", path);
        }

        Ok(pages.len())
    }
}
