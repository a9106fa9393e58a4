// SPDX-License-Identifier: MPL-2.0
//! Bundled fonts and the startup gate that waits for them.
//!
//! Font files found in `assets/fonts/` are embedded at build time and
//! registered with the renderer before the first real frame. The root view
//! renders nothing until every load has resolved, successfully or not.

use crate::error::FontError;
use iced::font::{self, Family};
use iced::{Font, Task};
use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "assets/fonts/"]
struct FontAsset;

/// Family name of the display serif.
pub const SERIF_FAMILY: &str = "Instrument Serif";

/// Display serif, upright.
pub const SERIF: Font = Font {
    family: Family::Name(SERIF_FAMILY),
    ..Font::DEFAULT
};

/// Display serif, italic. Used for menu headings.
pub const SERIF_ITALIC: Font = Font {
    family: Family::Name(SERIF_FAMILY),
    style: font::Style::Italic,
    ..Font::DEFAULT
};

fn is_font_file(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.ends_with(".ttf") || lower.ends_with(".otf")
}

/// Names of the embedded font files, sorted.
#[must_use]
pub fn bundled_names() -> Vec<String> {
    let mut names: Vec<String> = FontAsset::iter()
        .filter(|name| is_font_file(name))
        .map(|name| name.into_owned())
        .collect();
    names.sort();
    names
}

/// Tracks outstanding font loads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FontGate {
    pending: usize,
}

impl FontGate {
    /// Creates a gate waiting for `expected` loads. Zero opens it at once.
    #[must_use]
    pub fn new(expected: usize) -> Self {
        Self { pending: expected }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.pending == 0
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Records one finished load, successful or not.
    pub fn resolve(&mut self) {
        self.pending = self.pending.saturating_sub(1);
        if self.is_open() {
            log::debug!("font gate open");
        }
    }
}

/// Starts loading every bundled font.
///
/// Returns the gate to consult in `view` and the task whose messages must
/// each be answered with [`FontGate::resolve`].
pub fn load_bundled<Message>(
    on_loaded: fn(String, Result<(), FontError>) -> Message,
) -> (FontGate, Task<Message>)
where
    Message: Send + 'static,
{
    let names = bundled_names();
    let mut tasks = Vec::with_capacity(names.len());
    let mut expected = 0;

    for name in names {
        let Some(file) = FontAsset::get(&name) else {
            // Listed but unreadable: resolve it right away as a failure.
            let err = FontError::MissingAsset(name.clone());
            tasks.push(Task::done(on_loaded(name, Err(err))));
            expected += 1;
            continue;
        };
        let bytes: Cow<'static, [u8]> = file.data;
        tasks.push(font::load(bytes).map(move |result| {
            let result = result.map_err(|_| FontError::LoadFailed(name.clone()));
            on_loaded(name.clone(), result)
        }));
        expected += 1;
    }

    if expected == 0 {
        log::debug!("no bundled fonts, font gate open");
    }
    (FontGate::new(expected), Task::batch(tasks))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gate_is_open() {
        assert!(FontGate::new(0).is_open());
    }

    #[test]
    fn gate_opens_after_every_load_resolves() {
        let mut gate = FontGate::new(2);
        gate.resolve();
        assert!(!gate.is_open());
        assert_eq!(gate.pending(), 1);
        gate.resolve();
        assert!(gate.is_open());
    }

    #[test]
    fn extra_resolution_does_not_underflow() {
        let mut gate = FontGate::new(1);
        gate.resolve();
        gate.resolve();
        assert_eq!(gate.pending(), 0);
    }

    #[test]
    fn only_font_files_are_bundled() {
        assert!(is_font_file("InstrumentSerif-Italic.TTF"));
        assert!(is_font_file("Display.otf"));
        assert!(!is_font_file("README.md"));
        assert!(bundled_names().iter().all(|name| is_font_file(name)));
    }

    #[test]
    fn serif_faces_share_family() {
        assert_eq!(SERIF.family, SERIF_ITALIC.family);
        assert_eq!(SERIF_ITALIC.style, font::Style::Italic);
    }
}
