// SPDX-License-Identifier: MPL-2.0
//! Floating menu anchored at the bottom of the screen.
//!
//! The menu is a compact pill (chat shortcut and a plus icon) that grows in
//! place into a panel listing [`MENU_ENTRIES`], with a tinted backdrop behind
//! it. Transitions are staged:
//!
//! - **open**: geometry springs out, backdrop fades in, chat cluster fades
//!   out, and the header and list appear after [`timing::CONTENT_REVEAL_DELAY`]
//! - **close**: header and list fade out, the chat cluster returns after
//!   [`timing::CHAT_RETURN_DELAY`] and the container shrinks after
//!   [`timing::COLLAPSE_DELAY`]
//!
//! The logical [`Phase`] flips on the tap; everything else is presentation
//! advanced frame by frame.

mod entries;
mod state;
pub mod timing;
mod view;

pub use entries::{MenuEntry, MENU_ENTRIES};
pub use state::{Event, Geometry, MenuOptions, Message, Phase, State};
pub use view::{backdrop, view, ViewContext};
