// SPDX-License-Identifier: MPL-2.0
use iced_feed::app::{self, paths, Flags};
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
iced_feed - a social feed with animated comment panels

USAGE:
  iced_feed [OPTIONS]

OPTIONS:
  --posts <N>          Number of mock posts to generate
  --seed <SEED>        Seed for the mock feed (reproducible content)
  --feed <FILE>        Load posts from a TOML fixture instead
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help

ENVIRONMENT:
  ICED_FEED_CONFIG_DIR   Config directory (overridden by --config-dir)
  RUST_LOG               Log filter, e.g. `iced_feed=debug`
";

fn parse_path(value: &OsStr) -> Result<PathBuf, &'static str> {
    Ok(PathBuf::from(value))
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        posts: args.opt_value_from_str("--posts")?,
        seed: args.opt_value_from_str("--seed")?,
        feed_path: args.opt_value_from_os_str("--feed", parse_path)?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }
    Ok(flags)
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("application exited with error: {err}");
            ExitCode::FAILURE
        }
    }
}
