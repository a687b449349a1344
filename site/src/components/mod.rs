//! Leptos UI components for rendering the site.
//!
//! Each component is a Leptos `#[component]` function rendered on the
//! server only. Components take owned content and have no side effects, so
//! the same content always yields the same markup.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! ├── NavBar
//! │   └── NavLink (per nav item)
//! └── main, in Section::ORDER
//!     ├── HeroBanner        #home
//!     ├── ServicesGrid      #services
//!     │   └── ServiceCard (per offering)
//!     ├── ProcessList       #process
//!     │   └── StepItem (per step, sorted by order)
//!     ├── AboutBlurb        #about
//!     └── ContactPanel      #contact
//!         └── ContactForm
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but can be
//! rendered on their own:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use axionix_site::components::ServiceCard;
//!
//! view! { <ServiceCard offering=offering /> }
//! ```

mod about;
mod contact;
mod document;
mod hero;
mod icons;
mod nav;
mod process;
mod services;

pub use about::AboutBlurb;
pub use contact::{ContactForm, ContactPanel};
pub use document::SiteDocument;
pub use hero::HeroBanner;
pub use icons::{Icon, glyph_name, glyph_path};
pub use nav::{NavBar, NavLink};
pub use process::{ProcessList, StepItem};
pub use services::{ServiceCard, ServicesGrid};
