//! Client-side state machines.
//!
//! DESIGN
//! ======
//! Each module owns one narrow slice of interaction and knows nothing about
//! the DOM. Browser capabilities (storage, scroll events, timers) are passed
//! in through traits from `util`, so every transition here runs natively.

pub mod contact;
pub mod disclosure;
pub mod headline;
pub mod preference;
pub mod sections;
