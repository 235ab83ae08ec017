//! Form rendering module
//!
//! - `field_renderer`: one bordered field with its error line
//! - `contact_form`: the contact form panel and submit button

mod contact_form;
mod field_renderer;

pub use contact_form::{draw as draw_contact_form, field_hint};
