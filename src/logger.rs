use std::sync::Mutex;

use chrono::Utc;
use wirebox::{Injectable, Singleton};

/// Shared logging sink: keeps an ordered list of timestamped messages.
#[derive(Default, Injectable, Singleton)]
#[singleton("Logger")]
pub struct Logger {
    messages: Mutex<Vec<String>>,
}

impl Logger {
    pub fn log(&self, message: &str) {
        let mut messages = self
            .messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        messages.push(format!("{}: {}", Utc::now().timestamp_millis(), message));
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
