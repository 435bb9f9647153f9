use crate::config;

/// Load and validate settings. A broken config never prevents startup.
pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(e) = s.validate() {
                eprintln!("playdeck: {e}, using defaults");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            eprintln!("playdeck: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
