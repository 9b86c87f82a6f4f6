//! Page regions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components own the mount/unmount lifetime of the state machines in
//! `state`: whatever a component subscribes to or schedules is released in
//! its `on_cleanup`. Section bodies render the static tables in `content`.

pub mod about;
pub mod blog;
pub mod contact_form;
pub mod content_section;
pub mod education;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod navigation;
pub mod projects;
pub mod skills;
