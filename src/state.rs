use std::collections::HashMap;
use std::rc::Rc;

use yew::prelude::*;

use crate::config::PARALLAX_FACTOR;
use crate::content::{section, Metric};

/// Last observed pointer coordinates, in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Section id -> currently intersecting. Entries are never removed.
pub type VisibilityMap = HashMap<String, bool>;

/// Everything the landing page renders from. Each field has exactly one writer.
/// Snapshots share the visibility map; only intersection reports copy it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandingState {
    pub pointer: PointerPosition,
    pub scroll: f64,
    pub visibility: Rc<VisibilityMap>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LandingAction {
    PointerMoved(PointerPosition),
    Scrolled(f64),
    Intersections(Vec<(String, bool)>),
}

impl Reducible for LandingState {
    type Action = LandingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self;
        let next = Rc::make_mut(&mut state);
        match action {
            LandingAction::PointerMoved(position) => next.pointer = position,
            LandingAction::Scrolled(offset) => next.scroll = offset,
            LandingAction::Intersections(entries) => {
                let visibility = Rc::make_mut(&mut next.visibility);
                for (id, intersecting) in entries {
                    visibility.insert(id, intersecting);
                }
            }
        }
        state
    }
}

impl LandingState {
    pub fn background_style(&self) -> String {
        format!(
            "background: radial-gradient(circle at {}px {}px, rgba(59, 130, 246, 0.1) 0%, transparent 50%);",
            self.pointer.x, self.pointer.y
        )
    }

    pub fn hero_offset(&self) -> f64 {
        self.scroll * PARALLAX_FACTOR
    }

    pub fn hero_transform(&self) -> String {
        format!("translateY({}px)", self.hero_offset())
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visibility.get(id).copied().unwrap_or(false)
    }

    fn dashboard_visible(&self) -> bool {
        self.is_visible(section::FEATURES_VISUAL)
    }

    /// Bars stay empty until the dashboard is on screen, and empty again once it leaves.
    pub fn progress_width(&self, metric: &Metric) -> String {
        if self.dashboard_visible() {
            format!("{}%", metric.progress)
        } else {
            "0%".to_string()
        }
    }

    pub fn progress_classes(&self, metric: &Metric) -> Classes {
        classes!(
            "progress-fill",
            metric.color_class,
            self.dashboard_visible().then_some("animate")
        )
    }
}
