use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use env_logger::{Builder, Target};
use glint_core::config::SystemConfig;
use crate::config_gen;

pub fn init(config_path: &Path, is_tui: bool) {
    config_gen::ensure_config_exists(config_path);

    if let Err(e) = glint_shared::config::init(config_path) {
        eprintln!("Config load warning: {}", e);
    }

    init_logger(is_tui);
}

struct TeeWriter<W1, W2>(W1, W2);

impl<W1: Write, W2: Write> Write for TeeWriter<W1, W2> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.0.write(buf)?;
        self.1.write_all(&buf[..n])?;
        Ok(n)
    }
    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()?;
        self.1.flush()?;
        Ok(())
    }
}

// stdout carries the animation, so console logs go to stderr; the TUI owns the
// whole screen and only gets the file.
fn init_logger(is_tui: bool) {
    let sys_cfg: SystemConfig = glint_shared::config::get("system");
    let mut builder = Builder::from_env(env_logger::Env::default().default_filter_or(&sys_cfg.log_level));

    if let Err(e) = fs::create_dir_all(&sys_cfg.log_path) {
        eprintln!("Failed to create log dir: {}", e);
    }
    let log_file_path = Path::new(&sys_cfg.log_path).join("glint.log");

    match OpenOptions::new().create(true).append(true).open(&log_file_path) {
        Ok(log_file) if is_tui => {
            builder.target(Target::Pipe(Box::new(log_file)));
        }
        Ok(log_file) => {
            builder.target(Target::Pipe(Box::new(TeeWriter(std::io::stderr(), log_file))));
        }
        Err(e) => {
            eprintln!("Failed to open log file {:?}: {}", log_file_path, e);
            if is_tui {
                builder.filter_level(log::LevelFilter::Off);
            } else {
                builder.target(Target::Stderr);
            }
        }
    }

    builder.init();
}
