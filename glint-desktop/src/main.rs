mod setup;
mod config_gen;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use anyhow::Context;
use glint_core::config::{TerminalConfig, TypewriterConfig};
use glint_core::{Animator, LineSink, SystemClock, TextSink};

struct Args {
    tui: bool,
    once: bool,
    config: PathBuf,
    // logged once the logger is up
    warnings: Vec<String>,
}

fn parse_args<I: IntoIterator<Item = String>>(raw: I) -> Args {
    let mut args = Args {
        tui: false,
        once: false,
        config: PathBuf::from("config.toml"),
        warnings: Vec::new(),
    };

    let mut iter = raw.into_iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--tui" => args.tui = true,
            "--once" => args.once = true,
            "--config" => match iter.next() {
                Some(path) if !path.starts_with("--") => args.config = PathBuf::from(path),
                other => {
                    args.warnings.push(format!(
                        "--config needs a path, using {}",
                        args.config.display()
                    ));
                    if let Some(flag) = other {
                        args.warnings.push(format!("Ignoring '{}' after --config", flag));
                    }
                }
            },
            unknown => args.warnings.push(format!("Unknown argument '{}' ignored", unknown)),
        }
    }
    args
}

fn main() -> ExitCode {
    let args = parse_args(env::args());
    let is_tui_mode = cfg!(feature = "tui") && args.tui;

    setup::init(&args.config, is_tui_mode);
    log::info!(">>> Glint Launcher Started (TUI: {}) <<<", is_tui_mode);
    for w in &args.warnings {
        log::warn!("{}", w);
    }

    match run(&args, is_tui_mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("glint: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg_attr(not(feature = "tui"), allow(unused_variables))]
fn run(args: &Args, is_tui_mode: bool) -> anyhow::Result<()> {
    let mut tw_cfg: TypewriterConfig = glint_shared::config::get("typewriter");
    let term_cfg: TerminalConfig = glint_shared::config::get("terminal");
    if args.once {
        tw_cfg.max_cycles = Some(1);
    }
    log::debug!("Typewriter config: {:?}", tw_cfg);

    #[cfg(feature = "tui")]
    if is_tui_mode {
        log::info!("Mode: TUI");
        let sink = glint_core::TuiSink::new(&term_cfg).context("Failed to initialize TUI")?;
        let mut anim = build(&tw_cfg, Box::new(sink))?;
        return glint_core::run_interactive(&mut anim);
    }

    log::info!("Mode: line");
    let mut anim = build(&tw_cfg, Box::new(LineSink::stdout(&term_cfg)))?;
    anim.run();
    println!();
    Ok(())
}

fn build(cfg: &TypewriterConfig, sink: Box<dyn TextSink>) -> anyhow::Result<Animator<SystemClock>> {
    Animator::new(cfg, Some(sink), SystemClock::new()).context("Invalid [typewriter] configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(list: &[&str]) -> Args {
        parse_args(std::iter::once("glint").chain(list.iter().copied()).map(String::from))
    }

    #[test]
    fn flags_and_config_path() {
        let args = parse(&["--once", "--config", "banner.toml", "--tui"]);
        assert!(args.once && args.tui);
        assert_eq!(args.config, PathBuf::from("banner.toml"));
        assert!(args.warnings.is_empty());
    }

    #[test]
    fn config_without_value_warns() {
        let args = parse(&["--config"]);
        assert_eq!(args.config, PathBuf::from("config.toml"));
        assert_eq!(args.warnings.len(), 1);

        let args = parse(&["--config", "--once"]);
        assert_eq!(args.config, PathBuf::from("config.toml"));
        assert_eq!(args.warnings.len(), 2);
        assert!(!args.once);
    }

    #[test]
    fn unknown_flags_are_reported() {
        let args = parse(&["--fast"]);
        assert_eq!(args.warnings, ["Unknown argument '--fast' ignored"]);
    }
}
