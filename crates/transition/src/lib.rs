mod coordinator;
pub mod driver;
mod link;
mod machine;
pub mod simulate;
mod surface;

pub use coordinator::{PageTransitions, TransitionCoordinator, TransitionHost};
pub use link::{classify_href, ClickOutcome, LinkHooks, LinkTarget, TransitionLink};
pub use machine::{Effect, TransitionEvent, TransitionMachine, TransitionState};
pub use surface::{ContentPose, Coverage, TransitionTiming, PAGE_EASE};

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
