//! The corporate website: pages, rendering and the contact form.

mod contact;
mod page;
mod render;

pub use contact::{submit, ContactForm, FormField, SubmissionOutcome};
pub use page::Page;
pub use render::{
    escape_html, localized_href, render_contact, render_not_found, render_page, ContactNotice,
    ContactView,
};
