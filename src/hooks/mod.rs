mod environment;
mod landing_state;

pub use environment::{FakeReveal, PageEnvironment};
pub use landing_state::{start_section_reveal, track_signals, use_landing_state};
