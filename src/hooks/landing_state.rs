use yew::prelude::*;

use super::environment::PageEnvironment;
use crate::config::ObserverOptions;
use crate::error::LandingError;
use crate::observer::BrowserVisibilityObserver;
use crate::signals::{SignalSource, Subscription};
use crate::state::{LandingAction, LandingState};

/// Subscribes pointer and scroll updates to `dispatch`. A signal that cannot be
/// subscribed is skipped so the page keeps its static default for it.
pub fn track_signals<S: SignalSource + ?Sized>(
    source: &S,
    dispatch: Callback<LandingAction>,
) -> Vec<Subscription> {
    let mut subscriptions = Vec::with_capacity(2);
    match source.subscribe_pointer(dispatch.reform(LandingAction::PointerMoved)) {
        Ok(subscription) => subscriptions.push(subscription),
        Err(e) => log::warn!("Pointer tracking disabled: {}", e),
    }
    match source.subscribe_scroll(dispatch.reform(LandingAction::Scrolled)) {
        Ok(subscription) => subscriptions.push(subscription),
        Err(e) => log::warn!("Scroll tracking disabled: {}", e),
    }
    subscriptions
}

pub fn start_section_reveal(
    dispatch: Callback<LandingAction>,
) -> Result<BrowserVisibilityObserver, LandingError> {
    let document = web_sys::window()
        .ok_or(LandingError::NoWindow)?
        .document()
        .ok_or(LandingError::NoDocument)?;
    let mut observer = BrowserVisibilityObserver::new(
        &ObserverOptions::default(),
        dispatch.reform(LandingAction::Intersections),
    )?;
    let registered = observer.register_marked_sections(&document)?;
    log::info!("Observing {} animated sections", registered);
    Ok(observer)
}

/// Pointer, scroll and section visibility for the landing page, wired through
/// the nearest `PageEnvironment`. Everything is acquired on mount and released
/// on unmount.
#[hook]
pub fn use_landing_state() -> UseReducerHandle<LandingState> {
    let state = use_reducer(LandingState::default);
    let environment = use_context::<PageEnvironment>().unwrap_or_default();

    {
        let dispatcher = state.dispatcher();
        let environment = environment.clone();
        use_effect_with_deps(
            move |_| {
                let subscriptions =
                    environment.track(Callback::from(move |action| dispatcher.dispatch(action)));
                log::debug!("Tracking {} ambient signals", subscriptions.len());
                move || {
                    drop(subscriptions);
                    log::debug!("Released ambient signals");
                }
            },
            (),
        );
    }

    // Runs after the first render so every marked section is in the DOM.
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let reveal =
                    environment.reveal(Callback::from(move |action| dispatcher.dispatch(action)));
                move || {
                    if reveal.is_some() {
                        log::debug!("Disconnecting section observer");
                    }
                    drop(reveal);
                }
            },
            (),
        );
    }

    state
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::content::{metric, section};
    use crate::hooks::FakeReveal;
    use crate::signals::ManualSignals;
    use crate::test_support::{marked_section_ids, render_page};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Stands in for the reducer handle: applies every dispatched action.
    fn store() -> (Rc<RefCell<Rc<LandingState>>>, Callback<LandingAction>) {
        let state = Rc::new(RefCell::new(Rc::new(LandingState::default())));
        let sink = state.clone();
        let dispatch = Callback::from(move |action| {
            let current = sink.borrow().clone();
            *sink.borrow_mut() = current.reduce(action);
        });
        (state, dispatch)
    }

    struct MountedPage {
        state: Rc<RefCell<Rc<LandingState>>>,
        reveal: FakeReveal,
        subscriptions: Vec<Subscription>,
        reveal_guard: Option<Subscription>,
    }

    impl MountedPage {
        /// Runs the same mount steps as `use_landing_state`, registering the
        /// sections the rendered page actually marks.
        fn mount(signals: &ManualSignals) -> Self {
            let sections = marked_section_ids(&render_page(&LandingState::default()));
            let (environment, reveal) = PageEnvironment::manual(signals.clone(), sections);
            let (state, dispatch) = store();
            let subscriptions = environment.track(dispatch.clone());
            let reveal_guard = environment.reveal(dispatch);
            Self {
                state,
                reveal,
                subscriptions,
                reveal_guard,
            }
        }

        fn unmount(self) -> (Rc<RefCell<Rc<LandingState>>>, FakeReveal) {
            let MountedPage {
                state,
                reveal,
                subscriptions,
                reveal_guard,
            } = self;
            drop(subscriptions);
            drop(reveal_guard);
            (state, reveal)
        }

        fn snapshot(&self) -> Rc<LandingState> {
            self.state.borrow().clone()
        }
    }

    #[test]
    fn mount_registers_every_marked_section() {
        let signals = ManualSignals::new();
        let page = MountedPage::mount(&signals);
        assert_eq!(signals.subscriber_count(), 2);
        assert!(page.reveal.is_connected());
        let observed = page.reveal.observed_ids();
        assert_eq!(observed.len(), 9);
        for id in [section::STATS, section::FEATURES_VISUAL, section::CTA, "service-1"] {
            assert!(observed.iter().any(|o| o == id), "{} not observed", id);
        }
    }

    #[test]
    fn scroll_pointer_and_reveal_end_to_end() {
        let signals = ManualSignals::new();
        let page = MountedPage::mount(&signals);

        signals.scroll_to(500.0);
        assert_eq!(page.snapshot().hero_transform(), "translateY(100px)");

        signals.move_pointer(300.0, 400.0);
        assert!(page.snapshot().background_style().contains("300px 400px"));

        assert!(!page.snapshot().is_visible(section::CTA));
        page.reveal.report(&[(section::CTA, true)]);
        assert!(page.snapshot().is_visible(section::CTA));
    }

    #[test]
    fn dashboard_reveal_drives_progress() {
        let signals = ManualSignals::new();
        let page = MountedPage::mount(&signals);
        let usage = metric("데이터 활용도").expect("metric exists");

        assert_eq!(page.snapshot().progress_width(usage), "0%");
        page.reveal.report(&[(section::FEATURES_VISUAL, true)]);
        assert_eq!(page.snapshot().progress_width(usage), "89%");
    }

    #[test]
    fn unmount_releases_everything_by_drop() {
        let signals = ManualSignals::new();
        let page = MountedPage::mount(&signals);
        signals.scroll_to(50.0);
        page.reveal.report(&[(section::STATS, true)]);
        let before = page.snapshot();

        let (state, reveal) = page.unmount();

        signals.scroll_to(800.0);
        signals.move_pointer(10.0, 20.0);
        reveal.report(&[(section::STATS, false), (section::CTA, true)]);

        assert_eq!(signals.subscriber_count(), 0);
        assert!(reveal.is_mounted());
        assert!(!reveal.is_connected());
        assert_eq!(**state.borrow(), *before);
    }

    #[test]
    fn sections_added_after_mount_never_reveal() {
        let signals = ManualSignals::new();
        let page = MountedPage::mount(&signals);
        page.reveal.report(&[("late-banner", true)]);
        assert!(!page.snapshot().is_visible("late-banner"));
        assert!(page.snapshot().visibility.is_empty());
    }

    #[test]
    fn environments_compare_by_identity() {
        let (manual, _) = PageEnvironment::manual(ManualSignals::new(), Vec::new());
        assert!(manual == manual.clone());
        let (other, _) = PageEnvironment::manual(ManualSignals::new(), Vec::new());
        assert!(manual != other);
    }
}
