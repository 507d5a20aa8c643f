#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::hooks::{use_event_listener, ListenerTarget};

/// Uncaught script fault as reported by a window `error` event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fault {
    pub message: String,
    pub source: String,
    pub line: u32,
    pub column: u32,
}

impl Fault {
    pub fn location(&self) -> String {
        if self.source.is_empty() {
            return "unknown".to_string();
        }
        format!("{}:{}:{}", self.source, self.line, self.column)
    }
}

/// Routes uncaught page faults into the log. Nothing is shown to the user.
pub fn use_fault_reporting() {
    use_event_listener(ListenerTarget::Window, "error", |event| {
        #[cfg(target_arch = "wasm32")]
        {
            let fault = match event.dyn_ref::<web_sys::ErrorEvent>() {
                Some(error) => Fault {
                    message: error.message(),
                    source: error.filename(),
                    line: error.lineno(),
                    column: error.colno(),
                },
                None => Fault {
                    message: event.type_(),
                    ..Fault::default()
                },
            };
            tracing::error!(message = %fault.message, location = %fault.location(), "uncaught page error");
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = event;
        }
    });
}
