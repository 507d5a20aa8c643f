use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::rate_limit::Throttle;
#[cfg(target_arch = "wasm32")]
use crate::reveal::{crosses_threshold, OneShot};
use crate::reveal::VisibilityOptions;
use crate::timing::{now_ms, scroll_y};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerTarget {
    Window,
    Document,
}

#[cfg(target_arch = "wasm32")]
struct Listener {
    target: web_sys::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl Listener {
    fn attach(
        target: ListenerTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let target: web_sys::EventTarget = match target {
            ListenerTarget::Window => window.into(),
            ListenerTarget::Document => window.document()?.into(),
        };
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        tracing::debug!(event, "listener attached");
        Some(Self {
            target,
            event,
            closure,
        })
    }

    fn detach(&self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Registers `handler` on the window or document for the lifetime of the
/// calling component.
pub fn use_event_listener(
    target: ListenerTarget,
    event: &'static str,
    handler: impl FnMut(web_sys::Event) + 'static,
) {
    #[cfg(target_arch = "wasm32")]
    {
        let listener = use_hook(move || Rc::new(Listener::attach(target, event, handler)));
        use_drop(move || {
            if let Some(listener) = &*listener {
                listener.detach();
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (target, event, handler);
    }
}

/// Scroll listener admitting at most one call per `limit_ms`; the handler
/// receives the current vertical scroll offset.
pub fn use_throttled_scroll(limit_ms: f64, mut handler: impl FnMut(f64) + 'static) {
    let mut throttle = Throttle::new(limit_ms);
    use_event_listener(ListenerTarget::Window, "scroll", move |_event| {
        if throttle.admit(now_ms()) {
            handler(scroll_y());
        }
    });
}

#[cfg(target_arch = "wasm32")]
struct ObserverHandle {
    observer: web_sys::IntersectionObserver,
    _closure: Rc<Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>>,
}

/// One-shot visibility trigger bound to a single element.
///
/// `visible` flips to `true` the first time the element crosses the
/// configured threshold and never flips back; the observer is released at
/// that point, or when the owning component unmounts.
#[derive(Clone, Copy)]
pub struct Reveal {
    visible: Signal<bool>,
    #[cfg(target_arch = "wasm32")]
    target: Signal<Option<web_sys::Element>>,
}

impl Reveal {
    pub fn visible(&self) -> bool {
        (self.visible)()
    }

    pub fn signal(&self) -> Signal<bool> {
        self.visible
    }

    /// `onmounted` handler for the observed element.
    pub fn mount(&self, event: MountedEvent) {
        #[cfg(target_arch = "wasm32")]
        {
            use dioxus::web::WebEventExt;
            let mut target = self.target;
            let element = event.data.as_ref().as_web_event();
            if let Ok(node) = element.dyn_into::<web_sys::Element>() {
                target.set(Some(node));
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = event;
        }
    }
}

pub fn use_reveal(options: VisibilityOptions) -> Reveal {
    let visible = use_signal(|| false);
    #[cfg(target_arch = "wasm32")]
    {
        let target = use_signal(|| None::<web_sys::Element>);
        let mut handle = use_signal(|| None::<ObserverHandle>);

        use_effect(move || {
            let Some(element) = target.read().as_ref().cloned() else {
                return;
            };
            if handle.peek().is_some() || *visible.peek() {
                return;
            }
            let mut visible = visible;
            let mut guard = OneShot::default();
            let threshold = options.threshold;
            let closure = Rc::new(Closure::wrap(Box::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                        if !crosses_threshold(entry.is_intersecting(), entry.intersection_ratio(), threshold) {
                            continue;
                        }
                        if guard.fire() {
                            tracing::debug!("reveal: element entered viewport");
                            visible.set(true);
                        }
                        observer.unobserve(&entry.target());
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>));

            let init = web_sys::IntersectionObserverInit::new();
            init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));
            init.set_root_margin(options.root_margin);
            let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
                closure.as_ref().as_ref().unchecked_ref(),
                &init,
            ) else {
                tracing::warn!("reveal: intersection observer unavailable");
                return;
            };
            observer.observe(&element);
            handle.set(Some(ObserverHandle {
                observer,
                _closure: closure,
            }));
        });

        use_drop(move || {
            if let Some(handle) = handle.peek().as_ref() {
                handle.observer.disconnect();
            }
        });

        Reveal { visible, target }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = options;
        Reveal { visible }
    }
}

/// Element handle captured from `onmounted`, for components that need to
/// query DOM geometry or containment.
#[derive(Clone, Copy)]
pub struct MountedElement {
    #[cfg(target_arch = "wasm32")]
    element: Signal<Option<web_sys::Element>>,
}

impl MountedElement {
    pub fn mount(&self, event: MountedEvent) {
        #[cfg(target_arch = "wasm32")]
        {
            use dioxus::web::WebEventExt;
            let mut element = self.element;
            if let Ok(node) = event.data.as_ref().as_web_event().dyn_into::<web_sys::Element>() {
                element.set(Some(node));
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = event;
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn get(&self) -> Option<web_sys::Element> {
        self.element.peek().as_ref().cloned()
    }
}

pub fn use_mounted_element() -> MountedElement {
    #[cfg(target_arch = "wasm32")]
    {
        MountedElement {
            element: use_signal(|| None::<web_sys::Element>),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        MountedElement {}
    }
}
