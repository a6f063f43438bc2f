pub mod animated_section;
pub mod dashboard;
pub mod floating_element;
pub mod icon;
