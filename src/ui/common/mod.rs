//! Common reusable UI components

pub mod button;
pub mod form;

pub use button::{Button, ButtonVariant, ScrollButton};
pub use form::{FormField, TextAreaField};
