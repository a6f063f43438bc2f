use yew::prelude::*;

use crate::config::VISIBLE_CLASS;

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    pub id: AttrValue,
    pub visible: bool,
    /// Transition delay in milliseconds.
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

pub fn reveal_classes(visible: bool, extra: Classes) -> Classes {
    classes!("animated-section", visible.then_some(VISIBLE_CLASS), extra)
}

/// A region that fades in once the section observer reports it on screen.
/// Only sections present at mount time are observed.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let class = reveal_classes(props.visible, props.class.clone());
    html! {
        <div
            id={props.id.clone()}
            data-animate=""
            class={class}
            style={format!("transition-delay: {}ms;", props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_section_lacks_visible_class() {
        let classes = reveal_classes(false, Classes::new());
        assert!(classes.contains("animated-section"));
        assert!(!classes.contains("visible"));
    }

    #[test]
    fn visible_section_keeps_extra_classes() {
        let classes = reveal_classes(true, classes!("wide"));
        assert!(classes.contains("visible"));
        assert!(classes.contains("wide"));
    }
}
