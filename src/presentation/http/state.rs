use crate::{config::Config, infrastructure::classifier::traits::ClassifierService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn ClassifierService>,
    pub config: Config,
}
