// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window geometry is always tracked; display frames are only requested while
//! an animation or a delayed menu step is in flight, so an idle UI does not
//! redraw.

use super::Message;
use iced::{event, window, Subscription};

/// Routes window open and resize events to the root.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Emits one message per display frame while `animating` is true.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}
