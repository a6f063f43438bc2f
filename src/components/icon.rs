use yew::prelude::*;

/// Glyphs used on the page. Rendering is delegated to the Font Awesome stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    ArrowRight,
    Award,
    BarChart,
    ChevronDown,
    Clock,
    Database,
    Globe,
    Shield,
    Sparkles,
    Star,
    TrendingUp,
    Users,
    Zap,
}

impl IconKind {
    pub fn glyph_class(self) -> &'static str {
        match self {
            IconKind::ArrowRight => "fa-arrow-right",
            IconKind::Award => "fa-award",
            IconKind::BarChart => "fa-chart-column",
            IconKind::ChevronDown => "fa-chevron-down",
            IconKind::Clock => "fa-clock",
            IconKind::Database => "fa-database",
            IconKind::Globe => "fa-globe",
            IconKind::Shield => "fa-shield-halved",
            IconKind::Sparkles => "fa-wand-magic-sparkles",
            IconKind::Star => "fa-star",
            IconKind::TrendingUp => "fa-arrow-trend-up",
            IconKind::Users => "fa-users",
            IconKind::Zap => "fa-bolt",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <i class={classes!("fa-solid", props.kind.glyph_class(), props.class.clone())} aria-hidden="true"></i>
    }
}
