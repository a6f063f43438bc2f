use std::cell::RefCell;
use std::rc::Rc;

use yew::Callback;

use super::landing_state::{start_section_reveal, track_signals};
use crate::error::LandingError;
use crate::observer::{register_sections, FakeVisibilityObserver, VisibilityObserver};
use crate::signals::{ManualSignals, Subscription, WindowSignals};
use crate::state::LandingAction;

type SignalFactory = dyn Fn(Callback<LandingAction>) -> Vec<Subscription>;
type RevealFactory = dyn Fn(Callback<LandingAction>) -> Result<Subscription, LandingError>;

/// Where the landing page gets its ambient signals and section observer.
/// Supply one with a `ContextProvider`; without a provider the browser is used.
/// Both factories run once on mount, and dropping what they return is the unmount.
#[derive(Clone)]
pub struct PageEnvironment {
    signals: Rc<SignalFactory>,
    reveal: Rc<RevealFactory>,
}

impl PageEnvironment {
    pub fn new(
        signals: impl Fn(Callback<LandingAction>) -> Vec<Subscription> + 'static,
        reveal: impl Fn(Callback<LandingAction>) -> Result<Subscription, LandingError> + 'static,
    ) -> Self {
        Self {
            signals: Rc::new(signals),
            reveal: Rc::new(reveal),
        }
    }

    pub fn browser() -> Self {
        Self::new(
            |dispatch| match WindowSignals::new() {
                Ok(signals) => track_signals(&signals, dispatch),
                Err(e) => {
                    log::warn!("Ambient tracking disabled: {}", e);
                    Vec::new()
                }
            },
            |dispatch| {
                let observer = start_section_reveal(dispatch)?;
                Ok(Subscription::new(move || drop(observer)))
            },
        )
    }

    /// Hand-driven signals plus a fake observer over `sections`, registered on
    /// mount like the browser's marker pass.
    pub fn manual(signals: ManualSignals, sections: Vec<String>) -> (Self, FakeReveal) {
        let reveal = FakeReveal::default();
        let slot = Rc::clone(&reveal.observer);
        let environment = Self::new(
            move |dispatch| track_signals(&signals, dispatch),
            move |dispatch| {
                let mut observer =
                    FakeVisibilityObserver::new(dispatch.reform(LandingAction::Intersections));
                register_sections(&mut observer, sections.iter().map(|id| ((), id.clone())));
                *slot.borrow_mut() = Some(observer);
                let slot = Rc::clone(&slot);
                Ok(Subscription::new(move || {
                    if let Some(observer) = slot.borrow_mut().as_mut() {
                        observer.disconnect();
                    }
                }))
            },
        );
        (environment, reveal)
    }

    pub fn track(&self, dispatch: Callback<LandingAction>) -> Vec<Subscription> {
        (self.signals)(dispatch)
    }

    /// `None` when the observer cannot be created; sections then stay hidden.
    pub fn reveal(&self, dispatch: Callback<LandingAction>) -> Option<Subscription> {
        match (self.reveal)(dispatch) {
            Ok(guard) => Some(guard),
            Err(e) => {
                log::warn!("Reveal animation disabled: {}", e);
                None
            }
        }
    }
}

impl Default for PageEnvironment {
    fn default() -> Self {
        Self::browser()
    }
}

impl PartialEq for PageEnvironment {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.signals, &other.signals) && Rc::ptr_eq(&self.reveal, &other.reveal)
    }
}

/// Drives the observer a manual environment creates on mount.
#[derive(Clone, Default)]
pub struct FakeReveal {
    observer: Rc<RefCell<Option<FakeVisibilityObserver>>>,
}

impl FakeReveal {
    pub fn report(&self, entries: &[(&str, bool)]) {
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer.report(entries);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.observer.borrow().is_some()
    }

    pub fn is_connected(&self) -> bool {
        self.observer
            .borrow()
            .as_ref()
            .map_or(false, FakeVisibilityObserver::is_connected)
    }

    pub fn observed_ids(&self) -> Vec<String> {
        self.observer
            .borrow()
            .as_ref()
            .map(|observer| observer.observed_ids().into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
