use raylib::prelude::*;
use crate::config::Palette;
use crate::constants::*;
use crate::deck;
use crate::observers::SlideVisibility;
use crate::state::RevealState;

/// Entrance animation: fade in while sliding up by [`ENTRANCE_OFFSET`].
pub struct Entrance {
    pub state: RevealState,
    duration: f32,
    animation_timer: f32,
    opacity: f32,
    offset: f32,
    tween_opacity: ease::Tween,
    tween_offset: ease::Tween,
}

impl Entrance {
    pub fn new(duration: f32) -> Self {
        Self {
            state: RevealState::Hidden,
            duration,
            animation_timer: 0.0,
            opacity: 0.0,
            offset: ENTRANCE_OFFSET,
            tween_opacity: ease::Tween::new(ease::cubic_out, 0.0, 1.0, duration),
            tween_offset: ease::Tween::new(ease::cubic_out, ENTRANCE_OFFSET, 0.0, duration),
        }
    }

    pub fn start(&mut self) {
        if self.duration <= 0.0 {
            self.show();
            return;
        }
        self.state = RevealState::Entering;
        self.animation_timer = 0.0;
        self.opacity = 0.0;
        self.offset = ENTRANCE_OFFSET;
        self.tween_opacity = ease::Tween::new(ease::cubic_out, 0.0, 1.0, self.duration);
        self.tween_offset = ease::Tween::new(ease::cubic_out, ENTRANCE_OFFSET, 0.0, self.duration);
    }

    /// Jumps to the resting state without animating.
    pub fn show(&mut self) {
        self.state = RevealState::Shown;
        self.opacity = 1.0;
        self.offset = 0.0;
    }

    pub fn hide(&mut self) {
        self.state = RevealState::Hidden;
        self.opacity = 0.0;
        self.offset = ENTRANCE_OFFSET;
    }

    pub fn update(&mut self, dt: f32) {
        if self.state != RevealState::Entering {
            return;
        }

        self.opacity = self.tween_opacity.apply(dt).clamp(0.0, 1.0);
        self.offset = self.tween_offset.apply(dt);

        self.animation_timer += dt;
        if self.animation_timer >= self.duration {
            self.show();
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }
}

/// A deck slide ready to draw.
pub struct SlideView {
    pub title: String,
    pub body: Vec<String>,
    image: Option<Texture2D>,
    pub entrance: Entrance,
}

impl SlideView {
    pub fn new(slide: &deck::Slide, image: Option<Texture2D>, entrance_duration: f32) -> Self {
        Self {
            title: slide.title.clone(),
            body: slide.body.clone(),
            image,
            entrance: Entrance::new(entrance_duration),
        }
    }

    /// Draws the slide inside `area` using the entrance's current opacity.
    pub fn draw<D: RaylibDraw>(&self, d: &mut D, area: Rectangle, palette: &Palette) {
        self.draw_with(d, area, palette, self.entrance.opacity(), self.entrance.offset());
    }

    /// Draws the slide fully shown, ignoring the entrance (bulk render).
    pub fn draw_static<D: RaylibDraw>(&self, d: &mut D, area: Rectangle, palette: &Palette) {
        self.draw_with(d, area, palette, 1.0, 0.0);
    }

    fn draw_with<D: RaylibDraw>(&self, d: &mut D, area: Rectangle, palette: &Palette, opacity: f32, offset: f32) {
        if opacity <= 0.0 {
            return;
        }

        let title_size = (area.height * 0.07).max(18.0) as i32;
        let body_size = (area.height * 0.045).max(14.0) as i32;
        let top = area.y + offset;

        d.draw_text(
            &self.title,
            (area.x + area.width * 0.05) as i32,
            (top + area.height * 0.05) as i32,
            title_size,
            faded(palette.foreground, opacity),
        );

        let content_top = top + area.height * 0.05 + title_size as f32 * 1.6;
        let mut cursor = content_top;
        for line in &self.body {
            d.draw_text(
                line,
                (area.x + area.width * 0.07) as i32,
                cursor as i32,
                body_size,
                faded(palette.foreground, opacity),
            );
            cursor += body_size as f32 * 1.5;
        }

        if let Some(image) = &self.image {
            let bounds = Rectangle::new(
                area.x,
                cursor,
                area.width,
                (area.y + area.height + offset - cursor).max(0.0),
            );
            let tex_width = image.width() as f32;
            let tex_height = image.height() as f32;
            let scale = fit_scale(tex_width, tex_height, bounds.width * IMAGE_FIT, bounds.height * IMAGE_FIT);
            let scaled_width = tex_width * scale;
            let scaled_height = tex_height * scale;

            d.draw_texture_pro(
                image,
                Rectangle::new(0.0, 0.0, tex_width, tex_height), // Source rect uses original texture size
                Rectangle::new(
                    bounds.x + (bounds.width - scaled_width) * 0.5,
                    bounds.y + (bounds.height - scaled_height) * 0.5,
                    scaled_width,
                    scaled_height,
                ),
                Vector2::new(0.0, 0.0),
                0.0,
                faded(Color::WHITE, opacity),
            );
        }
    }
}

/// Scale that fits `width`x`height` into the box without enlarging it.
pub fn fit_scale(width: f32, height: f32, max_width: f32, max_height: f32) -> f32 {
    if width <= 0.0 || height <= 0.0 {
        return 0.0;
    }
    (max_width / width).min(max_height / height).min(1.0).max(0.0)
}

pub fn faded(color: Color, opacity: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * opacity.clamp(0.0, 1.0)) as u8)
}

/// Advances the reveal delay, starts the entrance of the slide revealed
/// this frame and resets every hidden one. `entrances` is in deck order.
pub fn sync_entrances<'a>(
    visibility: &mut SlideVisibility,
    entrances: impl IntoIterator<Item = &'a mut Entrance>,
    dt: f32,
) {
    visibility.update(dt);
    let revealed = visibility.take_revealed();

    for (i, entrance) in entrances.into_iter().enumerate() {
        let ordinal = i + 1;
        if revealed == Some(ordinal) {
            entrance.start();
        } else if !visibility.is_visible(ordinal) {
            entrance.hide();
        }
        entrance.update(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::{NavigationObserver, Position};

    fn entering(entrances: &[Entrance]) -> Vec<usize> {
        entrances
            .iter()
            .enumerate()
            .filter(|(_, e)| e.state == RevealState::Entering)
            .map(|(i, _)| i + 1)
            .collect()
    }

    #[test]
    fn entrance_runs_to_shown() {
        let mut entrance = Entrance::new(ENTRANCE_DURATION);
        assert_eq!(entrance.state, RevealState::Hidden);

        entrance.start();
        assert_eq!(entrance.state, RevealState::Entering);
        assert_eq!(entrance.opacity(), 0.0);

        entrance.update(ENTRANCE_DURATION / 2.0);
        assert_eq!(entrance.state, RevealState::Entering);
        assert!(entrance.opacity() > 0.0 && entrance.opacity() < 1.0);
        assert!(entrance.offset() < ENTRANCE_OFFSET);

        entrance.update(ENTRANCE_DURATION);
        assert_eq!(entrance.state, RevealState::Shown);
        assert_eq!(entrance.opacity(), 1.0);
        assert_eq!(entrance.offset(), 0.0);
    }

    #[test]
    fn zero_duration_shows_immediately() {
        let mut entrance = Entrance::new(0.0);
        entrance.start();
        assert_eq!(entrance.state, RevealState::Shown);
        assert_eq!(entrance.opacity(), 1.0);
    }

    #[test]
    fn restart_after_hide() {
        let mut entrance = Entrance::new(0.5);
        entrance.start();
        entrance.update(1.0);
        entrance.hide();
        assert_eq!(entrance.state, RevealState::Hidden);
        entrance.start();
        assert_eq!(entrance.state, RevealState::Entering);
        assert_eq!(entrance.opacity(), 0.0);
    }

    #[test]
    fn fit_scale_never_enlarges() {
        assert_eq!(fit_scale(100.0, 50.0, 400.0, 400.0), 1.0);
        assert_eq!(fit_scale(800.0, 400.0, 400.0, 400.0), 0.5);
        assert_eq!(fit_scale(400.0, 800.0, 400.0, 200.0), 0.25);
        assert_eq!(fit_scale(0.0, 10.0, 100.0, 100.0), 0.0);
    }

    #[test]
    fn faded_scales_alpha() {
        assert_eq!(faded(Color::new(10, 20, 30, 200), 0.5).a, 100);
        assert_eq!(faded(Color::new(10, 20, 30, 200), 2.0).a, 200);
    }

    #[test]
    fn delayed_reveal_starts_one_entrance() {
        let mut visibility = SlideVisibility::new(3, 0.05);
        let mut entrances: Vec<Entrance> = (0..3).map(|_| Entrance::new(0.6)).collect();

        visibility.on_transition(Position { current: 2, total: 3 });
        sync_entrances(&mut visibility, entrances.iter_mut(), 0.03);
        assert!(entering(&entrances).is_empty());

        sync_entrances(&mut visibility, entrances.iter_mut(), 0.03);
        assert_eq!(entering(&entrances), vec![2]);
        assert_eq!(entrances[0].state, RevealState::Hidden);
        assert_eq!(entrances[2].state, RevealState::Hidden);

        sync_entrances(&mut visibility, entrances.iter_mut(), 1.0);
        assert_eq!(entrances[1].state, RevealState::Shown);
        assert!(entering(&entrances).is_empty());
    }

    #[test]
    fn reasserted_slide_replays_its_entrance() {
        let mut visibility = SlideVisibility::new(3, 0.05);
        let mut entrances: Vec<Entrance> = (0..3).map(|_| Entrance::new(0.6)).collect();
        visibility.on_transition(Position { current: 2, total: 3 });
        sync_entrances(&mut visibility, entrances.iter_mut(), 0.1);
        sync_entrances(&mut visibility, entrances.iter_mut(), 1.0);
        assert_eq!(entrances[1].state, RevealState::Shown);

        visibility.on_transition(Position { current: 2, total: 3 });
        sync_entrances(&mut visibility, entrances.iter_mut(), 0.0);
        assert_eq!(entrances[1].state, RevealState::Hidden);

        sync_entrances(&mut visibility, entrances.iter_mut(), 0.06);
        assert_eq!(entering(&entrances), vec![2]);
        assert!(entrances[1].opacity() < 1.0);
    }

    #[test]
    fn moving_away_hides_the_old_entrance() {
        let mut visibility = SlideVisibility::new(3, 0.0);
        let mut entrances: Vec<Entrance> = (0..3).map(|_| Entrance::new(0.0)).collect();
        visibility.on_transition(Position { current: 1, total: 3 });
        sync_entrances(&mut visibility, entrances.iter_mut(), 0.016);
        assert_eq!(entrances[0].state, RevealState::Shown);

        visibility.on_transition(Position { current: 3, total: 3 });
        sync_entrances(&mut visibility, entrances.iter_mut(), 0.016);
        assert_eq!(entrances[0].state, RevealState::Hidden);
        assert_eq!(entrances[2].state, RevealState::Shown);
    }
}
