//! Platform-neutral logic behind the studio site: content, navigation,
//! animation timelines and the contact form.

pub mod animation;
#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod content;
pub mod navigation;
pub mod scroll;
#[cfg(test)]
mod tests;
pub mod timer;
pub mod viewport;

pub use animation::{AnimationDescriptor, Easing, EntranceSpec, LoopAnimation, Pose, Stagger};
pub use contact::{ContactField, ContactFlow, ContactFormState, ContactSubmission, FormPhase};
pub use content::{ContentCard, NAV_ITEMS};
pub use navigation::{HeaderState, NavItem, ScrollOutcome, SectionId, SectionNavigator};
pub use scroll::ScrollState;
pub use viewport::{EntranceTrigger, Intersection, Playback, StartLine, ViewportPolicy};
