//! Pointer and scroll tracking behind a subscribe/release contract.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Window};
use yew::Callback;

use crate::error::LandingError;
use crate::state::PointerPosition;

/// Releases its subscription when dropped.
#[must_use = "dropping a subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// A source of the two ambient page signals.
pub trait SignalSource {
    fn subscribe_pointer(
        &self,
        on_move: Callback<PointerPosition>,
    ) -> Result<Subscription, LandingError>;

    fn subscribe_scroll(&self, on_scroll: Callback<f64>) -> Result<Subscription, LandingError>;
}

/// Signals read from the global window.
pub struct WindowSignals {
    window: Window,
}

impl WindowSignals {
    pub fn new() -> Result<Self, LandingError> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or(LandingError::NoWindow)
    }
}

impl SignalSource for WindowSignals {
    fn subscribe_pointer(
        &self,
        on_move: Callback<PointerPosition>,
    ) -> Result<Subscription, LandingError> {
        let callback = Closure::<dyn Fn(MouseEvent)>::new(move |event: MouseEvent| {
            on_move.emit(PointerPosition::new(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            ));
        });
        listen(&self.window, "mousemove", callback)
    }

    fn subscribe_scroll(&self, on_scroll: Callback<f64>) -> Result<Subscription, LandingError> {
        let window = self.window.clone();
        let callback = Closure::<dyn Fn()>::new(move || match window.scroll_y() {
            Ok(scroll_y) => on_scroll.emit(scroll_y),
            Err(e) => log::warn!("Failed to read scroll offset: {:?}", e),
        });
        listen(&self.window, "scroll", callback)
    }
}

fn listen<F: ?Sized + 'static>(
    window: &Window,
    event: &'static str,
    callback: Closure<F>,
) -> Result<Subscription, LandingError> {
    window
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(|e| LandingError::listener(event, e))?;
    let window = window.clone();
    Ok(Subscription::new(move || {
        if let Err(e) =
            window.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove {} listener: {:?}", event, e);
        }
    }))
}

#[derive(Default)]
struct Listeners {
    next_id: usize,
    pointer: Vec<(usize, Callback<PointerPosition>)>,
    scroll: Vec<(usize, Callback<f64>)>,
}

/// Signal source driven by hand, for exercising trackers without a browser.
#[derive(Clone, Default)]
pub struct ManualSignals {
    listeners: Rc<RefCell<Listeners>>,
}

impl ManualSignals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_pointer(&self, x: f64, y: f64) {
        let targets: Vec<_> = self
            .listeners
            .borrow()
            .pointer
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for cb in targets {
            cb.emit(PointerPosition::new(x, y));
        }
    }

    pub fn scroll_to(&self, offset: f64) {
        let targets: Vec<_> = self
            .listeners
            .borrow()
            .scroll
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for cb in targets {
            cb.emit(offset);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        let listeners = self.listeners.borrow();
        listeners.pointer.len() + listeners.scroll.len()
    }

    fn next_id(&self) -> usize {
        let mut listeners = self.listeners.borrow_mut();
        listeners.next_id += 1;
        listeners.next_id
    }
}

impl SignalSource for ManualSignals {
    fn subscribe_pointer(
        &self,
        on_move: Callback<PointerPosition>,
    ) -> Result<Subscription, LandingError> {
        let id = self.next_id();
        self.listeners.borrow_mut().pointer.push((id, on_move));
        let listeners = Rc::clone(&self.listeners);
        Ok(Subscription::new(move || {
            listeners.borrow_mut().pointer.retain(|(other, _)| *other != id);
        }))
    }

    fn subscribe_scroll(&self, on_scroll: Callback<f64>) -> Result<Subscription, LandingError> {
        let id = self.next_id();
        self.listeners.borrow_mut().scroll.push((id, on_scroll));
        let listeners = Rc::clone(&self.listeners);
        Ok(Subscription::new(move || {
            listeners.borrow_mut().scroll.retain(|(other, _)| *other != id);
        }))
    }
}
