use glint_core::config::{TerminalConfig, Timing, TypewriterConfig};

#[test]
fn typewriter_section_from_toml() {
    let src = r#"
phrases = ["Frontend Developer", "Open Source"]
type_tick_ms = 100
delete_tick_ms = 50
hold_ms = 2500
max_cycles = 3
"#;
    let cfg: TypewriterConfig = toml::from_str(src).unwrap();

    assert_eq!(cfg.phrases, ["Frontend Developer", "Open Source"]);
    assert_eq!(cfg.timing.type_tick_ms, 100);
    assert_eq!(cfg.timing.delete_tick_ms, 50);
    assert_eq!(cfg.timing.hold_ms, 2500);
    // unspecified keys keep their defaults
    assert_eq!(cfg.timing.advance_ms, Timing::default().advance_ms);
    assert_eq!(cfg.timing.jitter_ms, 60);
    assert_eq!(cfg.max_cycles, Some(3));
    assert_eq!(cfg.seed, None);
    assert!(cfg.validate().is_ok());
}

#[test]
fn empty_section_is_the_default() {
    let cfg: TypewriterConfig = toml::from_str("").unwrap();
    assert_eq!(cfg.phrases.len(), 5);
    assert_eq!(cfg.timing, Timing::default());

    let term: TerminalConfig = toml::from_str("cursor = \"|\"").unwrap();
    assert_eq!(term.cursor, "|");
    assert_eq!(term.prefix, "> ");
}

#[test]
fn default_config_round_trips_through_toml() {
    let text = toml::to_string_pretty(&TypewriterConfig::default()).unwrap();
    assert!(text.contains("hold_ms = 1000"));
    let back: TypewriterConfig = toml::from_str(&text).unwrap();
    assert_eq!(back.timing, Timing::default());
}
