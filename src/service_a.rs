use std::sync::Arc;

use tracing::info;
use wirebox::Injectable;

use crate::logger::Logger;

#[derive(Default, Injectable)]
pub struct ServiceA {
    #[inject("Logger")]
    logging_service: Option<Arc<Logger>>,
}

impl ServiceA {
    pub fn run(&self) {
        info!("running service A");
        if let Some(logger) = &self.logging_service {
            logger.log("this works !");
        }
    }
}
