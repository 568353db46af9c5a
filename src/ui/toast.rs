use log::{debug, warn};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::ui::{ContactView, Toast, ToastKind};

#[derive(Default)]
struct HideTimer {
    generation: u64,
    task: Option<JoinHandle<()>>,
}

/// Drives the status region. Only the most recent notification owns a
/// hide timer; showing a new toast cancels the previous one.
pub struct Toaster {
    view: Arc<dyn ContactView>,
    duration: Duration,
    hide_timer: Arc<Mutex<HideTimer>>,
}

impl Toaster {
    pub fn new(view: Arc<dyn ContactView>, duration: Duration) -> Self {
        Self {
            view,
            duration,
            hide_timer: Arc::new(Mutex::new(HideTimer::default())),
        }
    }

    /// Outside a tokio runtime the toast is shown but never auto-hidden.
    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) {
        let toast = Toast::new(message, kind);
        let mut timer = self.hide_timer.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(previous) = timer.task.take() {
            debug!("Cancelling hide timer of previous toast");
            previous.abort();
        }
        timer.generation += 1;

        debug!("Showing {} toast: {}", kind.class_name(), toast.message);
        self.view.set_status(Some(&toast));

        let Ok(handle) = Handle::try_current() else {
            warn!("No tokio runtime, toast will stay visible");
            return;
        };

        let view = Arc::clone(&self.view);
        let state = Arc::clone(&self.hide_timer);
        let generation = timer.generation;
        let duration = self.duration;
        timer.task = Some(handle.spawn(async move {
            tokio::time::sleep(duration).await;
            hide_if_current(&state, view.as_ref(), generation);
        }));
    }
}

// A timer that already woke up can no longer be aborted, so it must
// check under the lock that no newer toast has been shown since.
fn hide_if_current(state: &Mutex<HideTimer>, view: &dyn ContactView, generation: u64) {
    let mut timer = state.lock().unwrap_or_else(|e| e.into_inner());
    if timer.generation == generation {
        timer.task = None;
        view.set_status(None);
    } else {
        debug!("Skipping stale hide timer {}", generation);
    }
}

impl Drop for Toaster {
    fn drop(&mut self) {
        let mut timer = self.hide_timer.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(task) = timer.task.take() {
            task.abort();
        }
    }
}
