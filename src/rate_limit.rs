#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;

/// Leading-edge throttle: the first call in a window runs, every call until
/// `limit_ms` after it is dropped.
#[derive(Clone, Debug)]
pub struct Throttle {
    limit_ms: f64,
    window_opened_at: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            window_opened_at: None,
        }
    }

    /// Returns `true` when a call arriving at `now_ms` should run.
    pub fn admit(&mut self, now_ms: f64) -> bool {
        match self.window_opened_at {
            Some(opened) if now_ms - opened < self.limit_ms => false,
            _ => {
                self.window_opened_at = Some(now_ms);
                true
            }
        }
    }
}

/// Trailing-edge debounce: a burst of calls collapses into the last one,
/// fired `wait_ms` after the burst goes quiet. Dropping the value cancels
/// the pending call.
pub struct Debounce {
    wait_ms: u32,
    #[cfg(target_arch = "wasm32")]
    pending: Option<Timeout>,
}

impl Debounce {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            #[cfg(target_arch = "wasm32")]
            pending: None,
        }
    }

    pub fn call(&mut self, callback: impl FnOnce() + 'static) {
        #[cfg(target_arch = "wasm32")]
        {
            // replacing the handle drops (and clears) the previous timeout
            self.pending = Some(Timeout::new(self.wait_ms, callback));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (self.wait_ms, callback);
        }
    }
}
