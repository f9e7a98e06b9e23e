use std::sync::RwLock;
use std::path::Path;
use std::fs;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use toml::Table;

static GLOBAL_CONFIG: OnceCell<RwLock<Table>> = OnceCell::new();

/// Loads the TOML file once for the whole process. A missing or broken file
/// leaves an empty table behind so every section falls back to its default.
pub fn init<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    let path = path.as_ref();

    let content = if path.exists() {
        log::info!("Loading config from {:?}", path);
        fs::read_to_string(path)?
    } else {
        log::warn!("Config file not found at {:?}, using defaults.", path);
        String::new()
    };

    GLOBAL_CONFIG.set(RwLock::new(parse(&content)))
        .map_err(|_| anyhow::anyhow!("Config already initialized"))?;

    Ok(())
}

pub fn parse(content: &str) -> Table {
    toml::from_str(content).unwrap_or_else(|e| {
        log::error!("Config syntax error: {}, using empty config.", e);
        Table::new()
    })
}

pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

pub fn get<T: DeserializeOwned + Default>(key: &str) -> T {
    let Some(store) = GLOBAL_CONFIG.get() else {
        log::warn!("Config read for '[{}]' before init, using default.", key);
        return T::default();
    };

    match store.read() {
        Ok(table) => section(&table, key),
        Err(_) => {
            log::error!("Config store poisoned, using default for '[{}]'.", key);
            T::default()
        }
    }
}

/// Looks up `[key]` in `table`; absent or mismatched sections give `T::default()`.
pub fn section<T: DeserializeOwned + Default>(table: &Table, key: &str) -> T {
    if let Some(value) = table.get(key) {
        value.clone().try_into().unwrap_or_else(|e| {
            log::warn!("Config section '[{}]' mismatch: {}. Using default.", key, e);
            T::default()
        })
    } else {
        T::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Window {
        width: u32,
        title: String,
    }

    #[test]
    fn reads_a_section() {
        let table = parse("[window]\nwidth = 80\ntitle = \"glint\"\n");
        let w: Window = section(&table, "window");
        assert_eq!(w, Window { width: 80, title: "glint".into() });
    }

    #[test]
    fn missing_or_mismatched_falls_back() {
        let table = parse("[window]\nwidth = \"wide\"\n");
        let w: Window = section(&table, "window");
        assert_eq!(w, Window::default());

        let other: Window = section(&table, "nope");
        assert_eq!(other, Window::default());
    }

    #[test]
    fn syntax_error_gives_empty_table() {
        assert!(parse("[window\nwidth = ").is_empty());
    }

    #[test]
    fn second_init_is_rejected() {
        let path = std::env::temp_dir().join(format!("glint-shared-{}.toml", std::process::id()));
        fs::write(&path, "[window]\nwidth = 3\n").unwrap();

        init(&path).unwrap();
        assert!(is_initialized());
        assert!(init(&path).is_err());

        let w: Window = get("window");
        assert_eq!(w.width, 3);
        fs::remove_file(&path).ok();
    }
}
