// SPDX-License-Identifier: MPL-2.0
use iced_dock::app::{self, paths, Flags};

const HELP: &str = "\
iced_dock

USAGE:
  iced_dock [OPTIONS]

OPTIONS:
  --lang <id>          UI language (e.g. en-US, fr)
  --config-dir <path>  Directory holding settings.toml
                       (overrides ICED_DOCK_CONFIG_DIR)
  --dark               Start in dark mode
  -h, --help           Print this help

Logging is controlled with RUST_LOG (default: info).
";

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .filter_module("wgpu_core", log::LevelFilter::Error)
        .filter_module("naga", log::LevelFilter::Error)
        .init();
}

fn main() -> iced::Result {
    init_logging();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("ignoring --lang: {err}");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        log::warn!("ignoring --config-dir: {err}");
        None
    });
    let flags = Flags {
        lang,
        config_dir,
        dark: args.contains("--dark"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    log::info!("iced_dock {} starting", env!("CARGO_PKG_VERSION"));
    app::run(flags)
}
