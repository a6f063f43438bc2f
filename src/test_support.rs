//! Server-side rendering of the page for markup assertions.

use std::rc::Rc;

use yew::prelude::*;
use yew::LocalServerRenderer;

use crate::pages::landing::render_landing;
use crate::state::{LandingAction, LandingState};

#[derive(Properties, PartialEq)]
pub(crate) struct SnapshotProps {
    pub state: LandingState,
}

#[function_component(Snapshot)]
fn snapshot(props: &SnapshotProps) -> Html {
    render_landing(&props.state)
}

pub(crate) fn state_after(actions: Vec<LandingAction>) -> LandingState {
    let mut state = Rc::new(LandingState::default());
    for action in actions {
        state = state.reduce(action);
    }
    (*state).clone()
}

pub(crate) fn render_page(state: &LandingState) -> String {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("test runtime");
    let renderer = LocalServerRenderer::<Snapshot>::with_props(SnapshotProps {
        state: state.clone(),
    })
    .hydratable(false);
    tokio::task::LocalSet::new().block_on(&runtime, renderer.render())
}

/// The opening tag of the first element whose markup contains `marker`.
pub(crate) fn opening_tag<'a>(html: &'a str, marker: &str) -> &'a str {
    let at = html
        .find(marker)
        .unwrap_or_else(|| panic!("`{}` not rendered", marker));
    tag_around(html, at)
}

fn tag_around(html: &str, at: usize) -> &str {
    let start = html[..at].rfind('<').expect("inside a tag");
    let end = at + html[at..].find('>').expect("tag is closed");
    &html[start..=end]
}

pub(crate) fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let key = format!(" {}=\"", name);
    let start = tag.find(&key)? + key.len();
    let len = tag[start..].find('"')?;
    Some(&tag[start..start + len])
}

/// Ids of every element carrying the reveal marker, in document order.
pub(crate) fn marked_section_ids(html: &str) -> Vec<String> {
    html.match_indices("data-animate")
        .filter_map(|(at, _)| attribute(tag_around(html, at), "id"))
        .map(str::to_string)
        .collect()
}
