// SPDX-License-Identifier: MPL-2.0
//! Animated light/dark theme switch.
//!
//! The toggle owns a boolean mirroring the last value it emitted. Each press
//! flips it, emits [`Event::ThemeChanged`] exactly once, and restarts four
//! independent animations in place:
//!
//! - thumb offset (spring, slight overshoot)
//! - track color (300 ms cross-fade)
//! - thumb scale (spring down to 0.8, then back to 1.0)
//! - glyph rotation (spring, +180° per press, never reset)
//!
//! Presses are not debounced. The owner keeps its own theme flag in sync by
//! handling the event; nothing enforces that.

use crate::animation::{mix, Animated, Motion, SpringConfig};
use crate::ui::design_tokens::{palette, radius, shadow, sizing};
use crate::ui::icons::{Glyph, GlyphCanvas};
use crate::ui::state::ToggleSize;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::widget::mouse_area;
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};
use std::time::Duration;

/// Spring moving the thumb between its two positions.
pub const OFFSET_SPRING: SpringConfig = SpringConfig::new(15.0, 100.0);

/// Spring used for both legs of the squash pulse.
pub const SCALE_SPRING: SpringConfig = SpringConfig::new(15.0, 100.0);

/// Spring spinning the glyph.
pub const ROTATION_SPRING: SpringConfig = SpringConfig::new(12.0, 80.0);

/// Duration of the track color cross-fade.
pub const TRACK_FADE: Duration = Duration::from_millis(300);

/// Thumb scale at the bottom of the squash pulse.
pub const SQUASH_SCALE: f32 = 0.8;

/// Degrees added to the glyph rotation on every press.
pub const ROTATION_STEP: f32 = 180.0;

/// Track color in light mode.
pub const TRACK_LIGHT: Color = palette::GRAY_100;

/// Track color in dark mode.
pub const TRACK_DARK: Color = palette::GRAY_900;

/// Messages handled by the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Pressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ThemeChanged(bool),
}

/// Toggle state: the mirrored flag plus its animated presentation.
#[derive(Debug, Clone)]
pub struct State {
    is_dark: bool,
    size: ToggleSize,
    thumb_offset: Animated,
    track_progress: Animated,
    thumb_scale: Animated,
    rotation: Animated,
}

impl Default for State {
    fn default() -> Self {
        Self::new(ToggleSize::default(), false)
    }
}

impl State {
    /// Creates a toggle resting in the given position.
    #[must_use]
    pub fn new(size: ToggleSize, is_dark: bool) -> Self {
        Self {
            is_dark,
            size,
            thumb_offset: Animated::new(if is_dark { size.thumb_travel() } else { 0.0 }),
            track_progress: Animated::new(if is_dark { 1.0 } else { 0.0 }),
            thumb_scale: Animated::new(1.0),
            rotation: Animated::new(0.0),
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Pressed => Event::ThemeChanged(self.activate()),
        }
    }

    /// Flips the flag, restarts the animations and returns the new value.
    fn activate(&mut self) -> bool {
        let is_dark = !self.is_dark;
        self.is_dark = is_dark;

        let offset = if is_dark { self.size.thumb_travel() } else { 0.0 };
        self.thumb_offset.animate(Motion::spring(offset, OFFSET_SPRING));

        self.track_progress.animate(Motion::timing(
            if is_dark { 1.0 } else { 0.0 },
            TRACK_FADE,
        ));

        self.thumb_scale.animate_sequence([
            Motion::spring(SQUASH_SCALE, SCALE_SPRING),
            Motion::spring(1.0, SCALE_SPRING),
        ]);

        // Accumulate on the target, not the current value, so a press during
        // the spin still lands on a multiple of 180°.
        let rotation = self.rotation.target() + ROTATION_STEP;
        self.rotation.animate(Motion::spring(rotation, ROTATION_SPRING));

        log::debug!("theme toggle pressed, dark = {is_dark}");
        is_dark
    }

    /// Advances every animation by one frame.
    pub fn advance(&mut self, dt: Duration) {
        self.thumb_offset.advance(dt);
        self.track_progress.advance(dt);
        self.thumb_scale.advance(dt);
        self.rotation.advance(dt);
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.thumb_offset.is_animating()
            || self.track_progress.is_animating()
            || self.thumb_scale.is_animating()
            || self.rotation.is_animating()
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    #[must_use]
    pub fn size(&self) -> ToggleSize {
        self.size
    }

    /// Glyph for the current flag, chosen at render time.
    #[must_use]
    pub fn glyph(&self) -> Glyph {
        if self.is_dark {
            Glyph::Moon
        } else {
            Glyph::Sunny
        }
    }

    #[must_use]
    pub fn glyph_color(&self) -> Color {
        if self.is_dark {
            palette::GRAY_900
        } else {
            palette::ORANGE
        }
    }

    /// Current track color along the light→dark cross-fade.
    #[must_use]
    pub fn track_color(&self) -> Color {
        mix(TRACK_LIGHT, TRACK_DARK, self.track_progress.value())
    }

    /// Track color once the cross-fade completes.
    #[must_use]
    pub fn track_color_target(&self) -> Color {
        mix(TRACK_LIGHT, TRACK_DARK, self.track_progress.target())
    }

    #[must_use]
    pub fn thumb_offset(&self) -> f32 {
        self.thumb_offset.value()
    }

    #[must_use]
    pub fn thumb_offset_target(&self) -> f32 {
        self.thumb_offset.target()
    }

    #[must_use]
    pub fn thumb_scale(&self) -> f32 {
        self.thumb_scale.value()
    }

    /// Current glyph rotation in degrees.
    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation.value()
    }

    #[must_use]
    pub fn rotation_target(&self) -> f32 {
        self.rotation.target()
    }

    /// Renders the toggle.
    pub fn view(&self) -> Element<'_, Message> {
        let size = Size::new(self.size.value(), sizing::TOGGLE_TRACK_HEIGHT);
        let canvas = Canvas::new(ToggleCanvas {
            track: self.track_color(),
            thumb_offset: self.thumb_offset(),
            thumb_scale: self.thumb_scale(),
            glyph: GlyphCanvas::new(self.glyph(), self.glyph_color(), sizing::ICON_XS)
                .rotation(self.rotation())
                .scale(self.thumb_scale()),
        })
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height));

        mouse_area(canvas)
            .on_press(Message::Pressed)
            .interaction(mouse::Interaction::Pointer)
            .into()
    }
}

/// Snapshot of the toggle drawn for one frame.
struct ToggleCanvas {
    track: Color,
    thumb_offset: f32,
    thumb_scale: f32,
    glyph: GlyphCanvas,
}

impl<Message> canvas::Program<Message> for ToggleCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let track = Path::rounded_rectangle(Point::ORIGIN, bounds.size(), radius::TOGGLE.into());
        frame.fill(&track, self.track);

        let thumb_radius = sizing::TOGGLE_THUMB / 2.0 * self.thumb_scale;
        let center = Point::new(
            sizing::TOGGLE_TRACK_PADDING + sizing::TOGGLE_THUMB / 2.0 + self.thumb_offset,
            bounds.height / 2.0,
        );

        let thumb_shadow = shadow::THUMB;
        frame.fill(
            &Path::circle(
                Point::new(
                    center.x + thumb_shadow.offset.x,
                    center.y + thumb_shadow.offset.y,
                ),
                thumb_radius + thumb_shadow.blur_radius / 4.0,
            ),
            thumb_shadow.color,
        );
        frame.fill(&Path::circle(center, thumb_radius), palette::WHITE);

        self.glyph.draw_at(&mut frame, center);

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn settle(toggle: &mut State) {
        for _ in 0..1_000 {
            if !toggle.is_animating() {
                return;
            }
            toggle.advance(FRAME);
        }
        panic!("toggle did not settle");
    }

    #[test]
    fn first_press_emits_dark_and_targets_dark_track() {
        let mut toggle = State::default();

        assert_eq!(toggle.update(Message::Pressed), Event::ThemeChanged(true));
        assert_eq!(toggle.rotation_target(), 180.0);
        assert_eq!(toggle.track_color_target(), TRACK_DARK);
        assert_eq!(toggle.thumb_offset_target(), 22.0);
    }

    #[test]
    fn second_press_emits_light_and_keeps_spinning() {
        let mut toggle = State::default();
        toggle.update(Message::Pressed);

        assert_eq!(toggle.update(Message::Pressed), Event::ThemeChanged(false));
        assert_eq!(toggle.rotation_target(), 360.0);
        assert_eq!(toggle.track_color_target(), TRACK_LIGHT);
        assert_eq!(toggle.thumb_offset_target(), 0.0);
    }

    #[test]
    fn emitted_values_alternate_from_false() {
        let mut toggle = State::default();
        for k in 1..=9u32 {
            let Event::ThemeChanged(value) = toggle.update(Message::Pressed);
            assert_eq!(value, k % 2 == 1, "activation {k}");
        }
    }

    #[test]
    fn rotation_accumulates_even_mid_spin() {
        let mut toggle = State::default();
        for k in 1..=5u8 {
            toggle.update(Message::Pressed);
            toggle.advance(FRAME);
            assert_eq!(toggle.rotation_target(), f32::from(k) * 180.0);
        }

        settle(&mut toggle);
        assert_eq!(toggle.rotation(), 900.0);
    }

    #[test]
    fn glyph_follows_flag_parity() {
        let mut toggle = State::default();
        assert_eq!(toggle.glyph(), Glyph::Sunny);
        toggle.update(Message::Pressed);
        assert_eq!(toggle.glyph(), Glyph::Moon);
        toggle.update(Message::Pressed);
        assert_eq!(toggle.glyph(), Glyph::Sunny);
    }

    #[test]
    fn thumb_squashes_then_recovers() {
        let mut toggle = State::default();
        toggle.update(Message::Pressed);

        let mut smallest = toggle.thumb_scale();
        for _ in 0..1_000 {
            if !toggle.is_animating() {
                break;
            }
            toggle.advance(FRAME);
            smallest = smallest.min(toggle.thumb_scale());
        }

        assert!(smallest <= SQUASH_SCALE + 0.01);
        assert_eq!(toggle.thumb_scale(), 1.0);
    }

    #[test]
    fn thumb_overshoots_slightly_before_settling() {
        let mut toggle = State::default();
        toggle.update(Message::Pressed);

        let travel = toggle.size().thumb_travel();
        let mut peak = 0.0_f32;
        for _ in 0..200 {
            toggle.advance(FRAME);
            peak = peak.max(toggle.thumb_offset());
        }

        assert!(peak > travel);
        assert!(peak < travel * 1.2);
        assert_eq!(toggle.thumb_offset(), travel);
    }

    #[test]
    fn track_cross_fades_over_its_duration() {
        let mut toggle = State::default();
        toggle.update(Message::Pressed);

        toggle.advance(TRACK_FADE / 2);
        let midway = toggle.track_color();
        assert_ne!(midway, TRACK_LIGHT);
        assert_ne!(midway, TRACK_DARK);

        toggle.advance(TRACK_FADE / 2);
        assert_eq!(toggle.track_color(), TRACK_DARK);
    }

    #[test]
    fn starting_dark_rests_on_the_right() {
        let toggle = State::new(ToggleSize::new(60.0), true);
        assert!(toggle.is_dark());
        assert_eq!(toggle.thumb_offset(), 32.0);
        assert_eq!(toggle.track_color(), TRACK_DARK);
        assert!(!toggle.is_animating());
    }
}
