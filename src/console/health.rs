use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use crate::client::EsClient;

/// Seconds between background health fetches.
pub const HEALTH_REFRESH_SECS: u64 = 3;

/// Shared text cell the poller overwrites and the render loop reads. The
/// value is replaced whole under the lock, so readers never see a partial
/// update.
#[derive(Clone)]
pub struct HealthCell {
    inner: Arc<Mutex<String>>,
}

impl HealthCell {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new("waiting for cluster health...".to_string())),
        }
    }

    pub fn set(&self, text: String) {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = text;
    }

    pub fn get(&self) -> String {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for HealthCell {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawns the detached poller thread. It owns its own client and runs for
/// the life of the process; a failed fetch writes the error into the cell
/// instead of killing the loop.
pub fn spawn_health_poller(client: EsClient, cell: HealthCell) {
    thread::spawn(move || {
        loop {
            match client.cat_health() {
                Ok(text) => cell.set(text),
                Err(err) => cell.set(format!("health unavailable: {err:#}")),
            }
            thread::sleep(Duration::from_secs(HEALTH_REFRESH_SECS));
        }
    });
}

#[cfg(test)]
#[path = "../tests/console/health_tests.rs"]
mod tests;
