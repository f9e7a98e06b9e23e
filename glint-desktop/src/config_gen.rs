use std::fs;
use std::path::Path;
use serde::Serialize;
use glint_core::config::{SystemConfig, TerminalConfig, TypewriterConfig};

#[derive(Serialize, Default)]
struct FullConfig {
    system: SystemConfig,
    typewriter: TypewriterConfig,
    terminal: TerminalConfig,
}

pub fn ensure_config_exists(path: &Path) {
    if path.exists() {
        return;
    }

    eprintln!("Creating default configuration at '{}'...", path.display());

    let toml_str = match toml::to_string_pretty(&FullConfig::default()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to serialize default config: {}", e);
            return;
        }
    };

    if let Err(e) = fs::write(path, toml_str) {
        eprintln!("Failed to write config file: {}", e);
    } else {
        eprintln!("Config file created successfully.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_file_reads_back() {
        let path = std::env::temp_dir().join(format!("glint-gen-{}.toml", std::process::id()));
        fs::remove_file(&path).ok();

        ensure_config_exists(&path);
        let table = glint_shared::config::parse(&fs::read_to_string(&path).unwrap());

        let tw: TypewriterConfig = glint_shared::config::section(&table, "typewriter");
        assert_eq!(tw.phrases, TypewriterConfig::default().phrases);
        let sys: SystemConfig = glint_shared::config::section(&table, "system");
        assert_eq!(sys.log_level, "info");
        fs::remove_file(&path).ok();
    }
}
