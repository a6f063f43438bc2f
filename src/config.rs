use log::Level;

/// Fraction of a section that must be on screen before it counts as visible.
pub const OBSERVER_THRESHOLD: f64 = 0.1;
/// Inset applied to the viewport edges when testing for intersection.
pub const OBSERVER_ROOT_MARGIN: &str = "-50px";
/// Hero content drifts at this fraction of the scroll speed.
pub const PARALLAX_FACTOR: f64 = 0.2;
/// Attribute marking an element for the one-time reveal registration pass.
pub const SECTION_MARKER_ATTR: &str = "data-animate";
pub const VISIBLE_CLASS: &str = "visible";

#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: OBSERVER_THRESHOLD,
            root_margin: OBSERVER_ROOT_MARGIN,
        }
    }
}

/// Log level baked in at build time through `LANDING_LOG_LEVEL`.
pub fn log_level() -> Level {
    parse_level(option_env!("LANDING_LOG_LEVEL")).unwrap_or(if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    })
}

fn parse_level(raw: Option<&str>) -> Option<Level> {
    raw.and_then(|level| level.trim().parse().ok())
}

pub fn section_selector() -> String {
    format!("[{}]", SECTION_MARKER_ATTR)
}
