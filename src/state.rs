use crate::config::AppConfig;
use crate::storage::LeadStore;

pub struct AppState {
    pub config: AppConfig,
    pub leads: Box<dyn LeadStore>,
}
