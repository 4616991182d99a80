// SPDX-License-Identifier: MPL-2.0
use iced_slides::app::{self, paths, Flags};
use std::path::PathBuf;

const HELP: &str = "\
Usage: iced_slides [OPTIONS] [DECK]

Arguments:
  [DECK]                   Slide deck (TOML); the built-in deck when omitted

Options:
  --lang <ID>              Interface language (e.g. en-US, fr)
  --config-dir <DIR>       Directory holding settings.toml
  --no-autoplay            Start with automatic rotation off
  --autoplay-delay <MS>    Milliseconds between automatic advances
  --transition <MS>        Milliseconds a slide change takes to settle
  -h, --help               Print help
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        no_autoplay: args.contains("--no-autoplay"),
        autoplay_delay_ms: args.opt_value_from_str("--autoplay-delay")?,
        transition_duration_ms: args.opt_value_from_str("--transition")?,
        deck_path: None,
    };

    let mut free = args.finish().into_iter();
    let deck_path = free.next().map(PathBuf::from);
    let ignored: Vec<_> = free.collect();
    if !ignored.is_empty() {
        log::warn!("Ignoring extra arguments: {:?}", ignored);
    }

    Ok(Flags { deck_path, ..flags })
}

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
