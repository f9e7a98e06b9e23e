use glint_core::config::{TerminalConfig, TypewriterConfig};
use glint_core::{Animator, LineSink, SystemClock};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cfg = TypewriterConfig {
        max_cycles: Some(1),
        ..TypewriterConfig::default()
    };
    let sink = LineSink::stdout(&TerminalConfig::default());

    match Animator::new(&cfg, Some(Box::new(sink)), SystemClock::new()) {
        Ok(mut anim) => {
            anim.run();
            println!();
        }
        Err(e) => log::error!("Banner config rejected: {}", e),
    }
}
