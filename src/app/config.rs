use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_FILE_NAME: &str = "tashkeel_output.txt";

pub struct AppConfig {
    pub default_save_path: PathBuf,
    pub log_path: PathBuf,
    pub message_timeout: Duration,
    pub tick_rate: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        let default_save_path = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_FILE_NAME);

        let log_path = dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("tashkeel")
            .join("tashkeel.log");

        Self {
            default_save_path,
            log_path,
            message_timeout: Duration::from_secs(5),
            tick_rate: Duration::from_millis(250),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    OverwriteFile(PathBuf),
}

impl PendingAction {
    pub fn confirm_message(&self) -> &'static str {
        match self {
            Self::OverwriteFile(_) => "File already exists. Overwrite it?",
        }
    }
}
