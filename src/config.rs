use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub data_dir: PathBuf,
    pub leads_file: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            leads_file: env::var("LEADS_FILE").unwrap_or_else(|_| "leads.json".to_string()),
        }
    }

    pub fn leads_path(&self) -> PathBuf {
        self.data_dir.join(&self.leads_file)
    }
}
