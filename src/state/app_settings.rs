use log::LevelFilter;

#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Level captured by the diagnostic log panel.
    pub log_level: LevelFilter,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self { log_level: LevelFilter::Debug }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        Self::default()
    }
}
