// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::FontError;
use crate::ui::{menu, theme_toggle};
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Toggle(theme_toggle::Message),
    Menu(menu::Message),
    /// Display frame while something is animating.
    Frame(Instant),
    /// Window opened or resized; carries the new logical size.
    WindowResized(Size),
    /// A bundled font finished loading.
    FontLoaded {
        name: String,
        result: Result<(), FontError>,
    },
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_DOCK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Start in dark mode whatever the configured theme mode says.
    pub dark: bool,
}
