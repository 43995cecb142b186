mod models;
mod relay;

use std::sync::Arc;

pub use models::{ContactField, ContactMessage};
pub use relay::{ContactRelay, EmailJsRelay};

use crate::config::ContactConfig;
use crate::Result;

/// Build the relay described by the config
pub fn create_relay(config: &ContactConfig) -> Result<Arc<dyn ContactRelay>> {
    Ok(Arc::new(EmailJsRelay::new(config)?))
}
