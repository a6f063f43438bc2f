//! Viewport intersection reporting for reveal animation.

use std::collections::{BTreeSet, HashMap};

use js_sys::Array;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::Callback;

use crate::config::{self, ObserverOptions};
use crate::error::{js_reason, LandingError};

/// One batch of `(section id, intersecting)` reports.
pub type VisibilityReport = Vec<(String, bool)>;

pub trait VisibilityObserver {
    type Target;

    fn observe(&mut self, target: &Self::Target, id: &str);
    fn unobserve(&mut self, id: &str);
    fn disconnect(&mut self);
}

/// Registers every section once. Sections created afterwards are never observed.
pub fn register_sections<O, I>(observer: &mut O, sections: I) -> usize
where
    O: VisibilityObserver,
    I: IntoIterator<Item = (O::Target, String)>,
{
    let mut registered = 0;
    for (target, id) in sections {
        if id.is_empty() {
            log::warn!("Skipping animated section without an id");
            continue;
        }
        observer.observe(&target, &id);
        registered += 1;
    }
    registered
}

pub struct BrowserVisibilityObserver {
    observer: IntersectionObserver,
    targets: HashMap<String, Element>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl BrowserVisibilityObserver {
    pub fn new(
        options: &ObserverOptions,
        on_change: Callback<VisibilityReport>,
    ) -> Result<Self, LandingError> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let report: VisibilityReport = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| (entry.target().id(), entry.is_intersecting()))
                    .collect();
                if !report.is_empty() {
                    on_change.emit(report);
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| LandingError::Observer(js_reason(&e)))?;

        Ok(Self {
            observer,
            targets: HashMap::new(),
            _callback: callback,
        })
    }

    /// The one-time pass over every element carrying the section marker.
    pub fn register_marked_sections(&mut self, document: &Document) -> Result<usize, LandingError> {
        let nodes = document
            .query_selector_all(&config::section_selector())
            .map_err(|e| LandingError::Query(js_reason(&e)))?;
        let sections: Vec<(Element, String)> = (0..nodes.length())
            .filter_map(|index| nodes.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| {
                let id = element.id();
                (element, id)
            })
            .collect();
        Ok(register_sections(self, sections))
    }
}

impl VisibilityObserver for BrowserVisibilityObserver {
    type Target = Element;

    fn observe(&mut self, target: &Element, id: &str) {
        self.observer.observe(target);
        self.targets.insert(id.to_string(), target.clone());
    }

    fn unobserve(&mut self, id: &str) {
        if let Some(target) = self.targets.remove(id) {
            self.observer.unobserve(&target);
        }
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
        self.targets.clear();
    }
}

impl Drop for BrowserVisibilityObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Observer whose callbacks are synthesized by the caller.
pub struct FakeVisibilityObserver {
    on_change: Callback<VisibilityReport>,
    observed: BTreeSet<String>,
    connected: bool,
}

impl FakeVisibilityObserver {
    pub fn new(on_change: Callback<VisibilityReport>) -> Self {
        Self {
            on_change,
            observed: BTreeSet::new(),
            connected: true,
        }
    }

    pub fn observed_ids(&self) -> Vec<&str> {
        self.observed.iter().map(String::as_str).collect()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Delivers the entries for observed sections, like a real observer would.
    pub fn report(&self, entries: &[(&str, bool)]) {
        if !self.connected {
            return;
        }
        let report: VisibilityReport = entries
            .iter()
            .filter(|(id, _)| self.observed.contains(*id))
            .map(|(id, intersecting)| (id.to_string(), *intersecting))
            .collect();
        if !report.is_empty() {
            self.on_change.emit(report);
        }
    }
}

impl VisibilityObserver for FakeVisibilityObserver {
    type Target = ();

    fn observe(&mut self, _target: &(), id: &str) {
        if self.connected {
            self.observed.insert(id.to_string());
        }
    }

    fn unobserve(&mut self, id: &str) {
        self.observed.remove(id);
    }

    fn disconnect(&mut self) {
        self.connected = false;
        self.observed.clear();
    }
}
