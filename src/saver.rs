use crate::storage::{EMPLOYEES_KEY, FileKv, RECORDS_KEY, THEME_KEY};
use crate::store::AppState;
use actix_web::rt::time::timeout;
use anyhow::Result;
use futures::StreamExt;
use futures::channel::mpsc::UnboundedReceiver;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Write-coalescing persistence loop. Every mutation sends one unit on the
/// dirty channel; a snapshot is written only once the channel has stayed
/// quiet for a full debounce window, so a burst of edits costs one write.
/// Closing the channel flushes once more and ends the task.
pub async fn run(
    state: Arc<AppState>,
    kv: FileKv,
    mut dirty: UnboundedReceiver<()>,
    debounce: Duration,
) {
    while dirty.next().await.is_some() {
        // Each further signal re-arms the window.
        while let Ok(Some(())) = timeout(debounce, dirty.next()).await {}

        match persist(&state, &kv) {
            Ok(()) => debug!("State persisted"),
            Err(e) => error!(error = %e, "Failed to persist state"),
        }
    }
}

/// Serializes all three stores and writes them under their keys. The
/// snapshot is taken from the live in-memory state at write time, never
/// from what was previously persisted.
pub fn persist(state: &AppState, kv: &FileKv) -> Result<()> {
    let employees = serde_json::to_string(&*state.employees())?;
    let records = serde_json::to_string(&*state.records())?;
    let theme = serde_json::to_string(&state.settings().theme)?;

    kv.set(EMPLOYEES_KEY, &employees)?;
    kv.set(RECORDS_KEY, &records)?;
    kv.set(THEME_KEY, &theme)?;
    Ok(())
}
