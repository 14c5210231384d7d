use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use tracing::{debug, error};
use web_sys::Event;

// a listener registered on the global window
//
// the registration lives exactly as long as this guard, dropping it removes
// the listener from the window
pub struct WindowSubscription {
    event: &'static str,
    listener: Option<EventListener>,
}

impl WindowSubscription {
    pub fn attach<F>(
        event: &'static str,
        options: EventListenerOptions,
        handler: F,
    ) -> anyhow::Result<Self>
    where
        F: FnMut(&Event) + 'static,
    {
        let window =
            web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window exists"))?;

        let listener = EventListener::new_with_options(&window, event, options, handler);
        debug!({event = event}, "attached window listener");

        Ok(WindowSubscription {
            event,
            listener: Some(listener),
        })
    }

    pub fn detach(&mut self) {
        if let Some(listener) = self.listener.take() {
            drop(listener);
            debug!({event = self.event}, "detached window listener");
        }
    }
}

impl Drop for WindowSubscription {
    fn drop(&mut self) {
        self.detach();
    }
}

// capture phase so the page cannot swallow the event first, and not passive
// since the handler needs preventDefault()
pub fn capture_options() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Capture,
        passive: false,
    }
}

// registers a window listener when the calling component mounts and removes
// it when the component is dropped
//
// the handler is only installed on the first render; later renders ignore it
pub fn use_window_listener<F>(event: &'static str, options: EventListenerOptions, handler: F)
where
    F: FnMut(&Event) + 'static,
{
    let subscription = use_hook(move || {
        let subscription = match WindowSubscription::attach(event, options, handler) {
            Ok(val) => Some(val),
            Err(err) => {
                error!("failed to attach {event} listener: {err}");
                None
            }
        };
        Rc::new(RefCell::new(subscription))
    });

    use_drop(move || {
        if let Some(mut subscription) = subscription.borrow_mut().take() {
            subscription.detach();
        }
    });
}

pub fn scroll_offset() -> anyhow::Result<f64> {
    let window = web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window exists"))?;

    window
        .scroll_y()
        .map_err(|err| anyhow::Error::msg(format!("failed to read scroll offset: {err:?}")))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use web_sys::{KeyboardEvent, KeyboardEventInit};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn dispatch_scroll() {
        let window = web_sys::window().unwrap();
        let event = Event::new("scroll").unwrap();
        window.dispatch_event(&event).unwrap();
    }

    // returns false when a listener called preventDefault()
    fn dispatch_ctrl_k() -> bool {
        let init = KeyboardEventInit::new();
        init.set_key("k");
        init.set_ctrl_key(true);
        init.set_cancelable(true);

        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        web_sys::window().unwrap().dispatch_event(&event).unwrap()
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnMut(&Event) + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = count.clone();
        (count, move |_: &Event| handle.set(handle.get() + 1))
    }

    #[wasm_bindgen_test]
    fn dropped_subscription_stops_firing() {
        let (count, handler) = counter();
        let subscription =
            WindowSubscription::attach("scroll", EventListenerOptions::default(), handler).unwrap();

        dispatch_scroll();
        dispatch_scroll();
        assert_eq!(count.get(), 2);

        drop(subscription);
        dispatch_scroll();
        assert_eq!(count.get(), 2);
    }

    #[wasm_bindgen_test]
    fn detach_is_idempotent() {
        let (count, handler) = counter();
        let mut subscription =
            WindowSubscription::attach("scroll", EventListenerOptions::default(), handler).unwrap();

        subscription.detach();
        subscription.detach();
        dispatch_scroll();
        drop(subscription);
        dispatch_scroll();

        assert_eq!(count.get(), 0);
    }

    #[wasm_bindgen_test]
    fn capture_listener_can_prevent_default() {
        let count = Rc::new(Cell::new(0));
        let handle = count.clone();
        let subscription = WindowSubscription::attach("keydown", capture_options(), move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                if event.ctrl_key() && event.key() == "k" {
                    event.prevent_default();
                    handle.set(handle.get() + 1);
                }
            }
        })
        .unwrap();

        assert!(!dispatch_ctrl_k());
        assert_eq!(count.get(), 1);

        drop(subscription);
        assert!(dispatch_ctrl_k());
        assert_eq!(count.get(), 1);
    }
}
