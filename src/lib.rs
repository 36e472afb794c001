//! Arkaya corporate website.
//!
//! The library holds everything the binary serves: localized content
//! resolution (`i18n`), the mobile navigation state machine (`navigation`),
//! page rendering and the contact form (`site`), and the HTTP layer
//! (`server`).

pub mod config;
pub mod i18n;
pub mod navigation;
pub mod server;
pub mod site;
