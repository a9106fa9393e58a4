// SPDX-License-Identifier: MPL-2.0
//! Two-state machine driving the floating menu.

use super::entries::{MenuEntry, MENU_ENTRIES};
use super::timing;
use crate::animation::{Animated, Motion, Scheduler};
use crate::ui::design_tokens::sizing;
use crate::ui::haptics::{HapticFeedback, ImpactStyle};
use std::time::Duration;

/// Logical state of the menu. Flips immediately on every trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Compact,
    Expanded,
}

/// Behavior switches read from the `[menu]` settings section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOptions {
    /// Drop delayed steps of a superseded transition when the user reverses
    /// mid-flight. Disabling it lets a late "reveal" land on a collapsing
    /// menu.
    pub cancel_pending_on_reverse: bool,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            cancel_pending_on_reverse: crate::config::DEFAULT_CANCEL_PENDING_ON_REVERSE,
        }
    }
}

/// Messages handled by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Plus affordance pressed, in either state.
    ToggleRequested,
    BackdropPressed,
    EntryPressed(u32),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Expanded,
    Collapsed,
    EntryActivated(u32),
}

/// Container geometry, either sampled or as targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub width: f32,
    pub height: f32,
    /// Horizontal offset from the centered compact position.
    pub offset_x: f32,
    /// Plus icon rotation in degrees.
    pub rotation: f32,
}

impl Geometry {
    /// Resting geometry of the compact pill.
    pub const COMPACT: Self = Self {
        width: sizing::MENU_COMPACT_WIDTH,
        height: sizing::MENU_COMPACT_HEIGHT,
        offset_x: 0.0,
        rotation: 0.0,
    };

    /// Resting geometry of the expanded panel on a screen of the given width.
    #[must_use]
    pub fn expanded(screen_width: f32) -> Self {
        let width = (screen_width - 2.0 * sizing::MENU_SIDE_MARGIN).max(sizing::MENU_COMPACT_WIDTH);
        Self {
            width,
            height: sizing::MENU_EXPANDED_HEIGHT,
            offset_x: -(width - sizing::MENU_COMPACT_WIDTH) / 2.0,
            rotation: timing::EXPANDED_ROTATION,
        }
    }
}

/// Sub-steps started after a delay, measured from the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DelayedStep {
    RevealContent,
    RestoreChat,
    CollapseGeometry,
}

#[derive(Debug, Clone)]
pub struct State {
    phase: Phase,
    options: MenuOptions,
    screen_width: f32,
    width: Animated,
    height: Animated,
    offset_x: Animated,
    rotation: Animated,
    backdrop: Animated,
    chat: Animated,
    title: Animated,
    items: Animated,
    items_offset: Animated,
    pending: Scheduler<DelayedStep>,
}

impl State {
    /// Creates a compact menu resting at the bottom of a screen.
    #[must_use]
    pub fn new(screen_width: f32, options: MenuOptions) -> Self {
        let compact = Geometry::COMPACT;
        Self {
            phase: Phase::Compact,
            options,
            screen_width,
            width: Animated::new(compact.width),
            height: Animated::new(compact.height),
            offset_x: Animated::new(compact.offset_x),
            rotation: Animated::new(compact.rotation),
            backdrop: Animated::new(0.0),
            chat: Animated::new(1.0),
            title: Animated::new(0.0),
            items: Animated::new(0.0),
            items_offset: Animated::new(timing::LIST_HIDDEN_OFFSET),
            pending: Scheduler::new(),
        }
    }

    pub fn update(&mut self, message: Message, haptics: &dyn HapticFeedback) -> Event {
        match message {
            Message::ToggleRequested => self.toggle(haptics),
            Message::BackdropPressed => {
                if self.backdrop_interactive() {
                    self.toggle(haptics)
                } else {
                    Event::None
                }
            }
            Message::EntryPressed(id) => {
                if self.phase == Phase::Expanded {
                    Event::EntryActivated(id)
                } else {
                    Event::None
                }
            }
        }
    }

    /// Flips the phase and starts the matching transition from the current
    /// values.
    pub fn toggle(&mut self, haptics: &dyn HapticFeedback) -> Event {
        if self.options.cancel_pending_on_reverse {
            let dropped = self.pending.cancel_all();
            if dropped > 0 {
                log::debug!("menu reversed mid-flight, {dropped} delayed step(s) dropped");
            }
        }

        match self.phase {
            Phase::Compact => {
                self.phase = Phase::Expanded;
                haptics.impact(ImpactStyle::Medium);
                self.expand();
                log::debug!("menu expanded");
                Event::Expanded
            }
            Phase::Expanded => {
                self.phase = Phase::Compact;
                self.collapse();
                log::debug!("menu collapsed");
                Event::Collapsed
            }
        }
    }

    fn expand(&mut self) {
        self.animate_geometry(Geometry::expanded(self.screen_width));
        self.backdrop.animate(Motion::timing(1.0, timing::BACKDROP_FADE));
        self.chat.animate(Motion::timing(0.0, timing::CHAT_FADE_OUT));
        self.pending.schedule(timing::CONTENT_REVEAL_DELAY, DelayedStep::RevealContent);
    }

    fn collapse(&mut self) {
        self.title.animate(Motion::timing(0.0, timing::CONTENT_FADE_OUT));
        self.items.animate(Motion::timing(0.0, timing::CONTENT_FADE_OUT));
        self.items_offset.animate(Motion::spring(
            timing::LIST_HIDDEN_OFFSET,
            timing::LIST_SPRING,
        ));
        self.backdrop.animate(Motion::timing(0.0, timing::BACKDROP_FADE));
        self.pending.schedule(timing::CHAT_RETURN_DELAY, DelayedStep::RestoreChat);
        self.pending.schedule(timing::COLLAPSE_DELAY, DelayedStep::CollapseGeometry);
    }

    fn apply(&mut self, step: DelayedStep) {
        match step {
            DelayedStep::RevealContent => {
                self.title.animate(Motion::timing(1.0, timing::TITLE_FADE_IN));
                self.items.animate(Motion::timing(1.0, timing::ITEMS_FADE_IN));
                self.items_offset.animate(Motion::spring(0.0, timing::LIST_SPRING));
            }
            DelayedStep::RestoreChat => {
                self.chat.animate(Motion::spring(1.0, timing::CHAT_RETURN_SPRING));
            }
            DelayedStep::CollapseGeometry => self.animate_geometry(Geometry::COMPACT),
        }
    }

    fn animate_geometry(&mut self, target: Geometry) {
        let spring = timing::GEOMETRY_SPRING;
        self.width.animate(Motion::spring(target.width, spring));
        self.height.animate(Motion::spring(target.height, spring));
        self.offset_x.animate(Motion::spring(target.offset_x, spring));
        self.rotation.animate(Motion::spring(target.rotation, spring));
    }

    /// Records a new screen width. While expanded, the width and offset
    /// springs are retargeted to the new expanded geometry.
    pub fn set_screen_width(&mut self, screen_width: f32) {
        if !screen_width.is_finite() || screen_width == self.screen_width {
            return;
        }
        self.screen_width = screen_width;

        if self.phase == Phase::Expanded {
            let target = Geometry::expanded(screen_width);
            self.width.animate(Motion::spring(target.width, timing::GEOMETRY_SPRING));
            self.offset_x.animate(Motion::spring(target.offset_x, timing::GEOMETRY_SPRING));
        }
    }

    /// Advances every value and fires delayed steps that come due.
    ///
    /// The delta is split at each fire time so a step scheduled at 200 ms
    /// starts from the values at exactly 200 ms, whatever the frame rate.
    pub fn advance(&mut self, dt: Duration) {
        let mut remaining = dt;
        while let Some(wait) = self.pending.time_until_next() {
            if wait > remaining {
                break;
            }
            self.advance_values(wait);
            remaining -= wait;
            for step in self.pending.advance(wait) {
                self.apply(step);
            }
        }
        self.advance_values(remaining);
        let fired = self.pending.advance(remaining);
        debug_assert!(fired.is_empty());
    }

    fn advance_values(&mut self, dt: Duration) {
        if dt.is_zero() {
            return;
        }
        for value in [
            &mut self.width,
            &mut self.height,
            &mut self.offset_x,
            &mut self.rotation,
            &mut self.backdrop,
            &mut self.chat,
            &mut self.title,
            &mut self.items,
            &mut self.items_offset,
        ] {
            value.advance(dt);
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.pending.is_idle()
            || [
                &self.width,
                &self.height,
                &self.offset_x,
                &self.rotation,
                &self.backdrop,
                &self.chat,
                &self.title,
                &self.items,
                &self.items_offset,
            ]
            .iter()
            .any(|value| value.is_animating())
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.phase == Phase::Expanded
    }

    #[must_use]
    pub fn options(&self) -> MenuOptions {
        self.options
    }

    #[must_use]
    pub fn screen_width(&self) -> f32 {
        self.screen_width
    }

    /// Entries rendered by the expanded list.
    #[must_use]
    pub fn entries(&self) -> &'static [MenuEntry] {
        &MENU_ENTRIES
    }

    /// Number of delayed steps not yet fired.
    #[must_use]
    pub fn pending_steps(&self) -> usize {
        self.pending.pending_len()
    }

    /// Current container geometry.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        Geometry {
            width: self.width.value(),
            height: self.height.value(),
            offset_x: self.offset_x.value(),
            rotation: self.rotation.value(),
        }
    }

    /// Geometry the container is currently heading to.
    ///
    /// During the collapse delay this is still the expanded geometry.
    #[must_use]
    pub fn geometry_target(&self) -> Geometry {
        Geometry {
            width: self.width.target(),
            height: self.height.target(),
            offset_x: self.offset_x.target(),
            rotation: self.rotation.target(),
        }
    }

    /// Left edge of the container in screen coordinates.
    #[must_use]
    pub fn left(&self) -> f32 {
        (self.screen_width - sizing::MENU_COMPACT_WIDTH) / 2.0 + self.offset_x.value()
    }

    #[must_use]
    pub fn backdrop_opacity(&self) -> f32 {
        self.backdrop.value().clamp(0.0, 1.0)
    }

    /// Backdrop is drawn while expanded and while fading out.
    #[must_use]
    pub fn backdrop_visible(&self) -> bool {
        self.is_expanded() || self.backdrop_opacity() > 0.0
    }

    /// Backdrop accepts taps only while expanded.
    #[must_use]
    pub fn backdrop_interactive(&self) -> bool {
        self.is_expanded()
    }

    #[must_use]
    pub fn chat_opacity(&self) -> f32 {
        self.chat.value().clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn title_opacity(&self) -> f32 {
        self.title.value().clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn title_opacity_target(&self) -> f32 {
        self.title.target()
    }

    #[must_use]
    pub fn items_opacity(&self) -> f32 {
        self.items.value().clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn items_opacity_target(&self) -> f32 {
        self.items.target()
    }

    /// Whether the panel renders the header and list rather than the
    /// compact cluster.
    ///
    /// While compact, the expanded content only lingers as long as it is
    /// fading out. A reveal that lands after a collapse never brings it back.
    #[must_use]
    pub fn shows_expanded_content(&self) -> bool {
        if self.is_expanded() {
            return true;
        }
        let fading_out = self.title.target() == 0.0 && self.items.target() == 0.0;
        fading_out && (self.title_opacity() > 0.0 || self.items_opacity() > 0.0)
    }

    /// Vertical offset of the entry list, positive is down.
    #[must_use]
    pub fn items_offset(&self) -> f32 {
        self.items_offset.value()
    }

    #[must_use]
    pub fn chat_opacity_target(&self) -> f32 {
        self.chat.target()
    }
}
