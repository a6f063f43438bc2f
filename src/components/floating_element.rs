use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FloatingElementProps {
    pub class: &'static str,
    /// Animation delay in seconds.
    #[prop_or_default]
    pub delay: f64,
}

#[function_component(FloatingElement)]
pub fn floating_element(props: &FloatingElementProps) -> Html {
    html! {
        <div
            class={classes!("floating-element", props.class)}
            style={format!("animation-delay: {}s;", props.delay)}
        />
    }
}
