//! Reusable UI components

mod notice;
mod registration_form;

pub use notice::*;
pub use registration_form::*;
