use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::error::ConfigError;
use crate::typewriter::Wait;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub log_path:  String,
    pub log_level: String,
}

/// Pacing of the animation, all in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub type_tick_ms:   u64,
    pub delete_tick_ms: u64, // faster than typing
    pub hold_ms:        u64, // full phrase on screen
    pub advance_ms:     u64, // blank before the next phrase
    pub jitter_ms:      u64, // random extra per typed char, 0 = off
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    #[serde(flatten)]
    pub timing: Timing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cycles: Option<u32>, // None = forever
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub title: String,
    pub prefix: String,
    pub cursor: String,
    pub blink_ms: u64,
}

impl Timing {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("type_tick_ms", self.type_tick_ms),
            ("delete_tick_ms", self.delete_tick_ms),
            ("hold_ms", self.hold_ms),
            ("advance_ms", self.advance_ms),
        ];
        for (field, value) in fields {
            if value == 0 {
                return Err(ConfigError::ZeroDuration { field });
            }
        }

        if self.delete_tick_ms >= self.type_tick_ms {
            log::warn!(
                "delete tick ({}ms) is not faster than type tick ({}ms)",
                self.delete_tick_ms, self.type_tick_ms
            );
        }
        Ok(())
    }

    /// `jitter` is the random extra already drawn by the caller, clamped to `jitter_ms`.
    pub fn delay(&self, wait: Wait, jitter: u64) -> Duration {
        let ms = match wait {
            Wait::TypeTick   => self.type_tick_ms + jitter.min(self.jitter_ms),
            Wait::DeleteTick => self.delete_tick_ms,
            Wait::Hold       => self.hold_ms,
            Wait::Advance    => self.advance_ms,
        };
        Duration::from_millis(ms)
    }
}

impl TypewriterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.phrases.is_empty() {
            return Err(ConfigError::NoPhrases);
        }
        if self.phrases.iter().all(|p| p.is_empty()) {
            return Err(ConfigError::AllPhrasesEmpty { count: self.phrases.len() });
        }
        if self.max_cycles == Some(0) {
            return Err(ConfigError::ZeroCycles);
        }
        self.timing.validate()
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            log_path:  "logs/".into(),
            log_level: "info".into(),
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            type_tick_ms: 54,
            delete_tick_ms: 38,
            hold_ms: 1000,
            advance_ms: 400,
            jitter_ms: 60,
        }
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: vec![
                "Web Game Developer".into(),
                "WhatsApp Bot (Azbry-MD)".into(),
                "UI/UX Neon Dark".into(),
                "JavaScript & Canvas".into(),
                "Vercel • GitHub • REST API".into(),
            ],
            timing: Timing::default(),
            max_cycles: None,
            seed: None,
        }
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            title: "glint".into(),
            prefix: "> ".into(),
            cursor: "▌".into(),
            blink_ms: 530,
        }
    }
}
