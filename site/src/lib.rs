//! # axionix-site
//!
//! Server-side renderer and contact-request handling for the Axionix
//! cargo-survey site.
//!
//! The page is a single static HTML document: a navigation bar followed by
//! the hero, services, process, about and contact sections. Content lives in
//! one immutable [`types::SiteContent`] value; rendering is a pure function
//! of that value, built from [Leptos](https://leptos.dev/) components.
//!
//! ## Quick Start
//!
//! ```rust
//! use axionix_site::{render_page, PageAssets, types::SiteContent};
//!
//! let content = SiteContent::axionix();
//! content.validate().expect("content links resolve");
//!
//! let html = render_page(&content, &PageAssets::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("id=\"services\""));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - content model
//! - [`components`] - Leptos components, one per section
//! - [`compose`] - section order, anchors and the static link check
//! - [`contact`] - contact form capture, validation and submission
//! - [`config`] - optional `axionix.toml`
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering uses the `RenderHtml` trait only. There is no reactive
//! runtime, no hydration and no client-side script.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod compose;
pub mod config;
pub mod contact;
pub mod error;
pub mod styles;
pub mod types;

use std::fmt;

use components::SiteDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use serde::Deserialize;

pub use contact::{ContactFormHandler, ContactSubmission, FormView};
pub use error::{ContentError, ContentProblem, SubmissionError};
use types::SiteContent;

/// Render the complete page with an empty contact form.
///
/// # Example
///
/// ```rust
/// use axionix_site::{render_page, PageAssets, types::SiteContent};
///
/// let content = SiteContent::axionix();
/// let first = render_page(&content, &PageAssets::default());
/// let second = render_page(&content, &PageAssets::default());
/// assert_eq!(first, second);
/// ```
pub fn render_page(content: &SiteContent, assets: &PageAssets) -> String {
    render_page_with_form(content, assets, &FormView::default())
}

/// Render the complete page, showing the given contact form state
/// (prefilled values, field errors, status line).
pub fn render_page_with_form(content: &SiteContent, assets: &PageAssets, form: &FormView) -> String {
    let doc = view! {
        <SiteDocument content=content.clone() assets=assets.clone() form=form.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render the page into a caller-supplied sink.
pub fn render_into<W: fmt::Write>(
    content: &SiteContent,
    assets: &PageAssets,
    form: &FormView,
    sink: &mut W,
) -> fmt::Result {
    sink.write_str(&render_page_with_form(content, assets, form))
}

/// Static assets and presentation switches for the rendered page.
///
/// # Example
///
/// ```rust
/// use axionix_site::PageAssets;
///
/// let assets = PageAssets {
///     stylesheet_href: Some("/site.css".into()),
///     animations: false,
///     ..Default::default()
/// };
/// assert_eq!(assets.logo_path, "/Axionix.png");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageAssets {
    /// Logo image shown in the navigation bar
    pub logo_path: String,
    /// External stylesheet; `None` inlines [`styles::SITE_CSS`]
    pub stylesheet_href: Option<String>,
    /// Fade/slide-in on the hero
    pub animations: bool,
    /// Contact form `action`; `None` leaves the form unwired
    pub form_action: Option<String>,
}

impl Default for PageAssets {
    fn default() -> Self {
        Self {
            logo_path: "/Axionix.png".into(),
            stylesheet_href: None,
            animations: true,
            form_action: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::section_anchors;
    use crate::contact::{DiscardTransport, FieldError, FormField};
    use crate::error::TransportError;
    use crate::types::IconKind;
    use components::{ServiceCard, glyph_path};
    use pretty_assertions::assert_eq;

    fn page() -> String {
        render_page(&SiteContent::axionix(), &PageAssets::default())
    }

    #[test]
    fn renders_complete_document() {
        let html = page();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("AXIONIX"));
        assert!(html.contains("Content-Security-Policy"));
        assert!(html.contains("Our Services"));
        assert!(html.contains("How It Works"));
        assert!(html.contains("About Axionix"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let content = SiteContent::axionix();
        let assets = PageAssets::default();
        assert_eq!(render_page(&content, &assets), render_page(&content, &assets));
    }

    #[test]
    fn render_into_matches_render_page() {
        let content = SiteContent::axionix();
        let assets = PageAssets::default();
        let mut sink = String::new();
        render_into(&content, &assets, &FormView::default(), &mut sink).expect("write");
        assert_eq!(sink, render_page(&content, &assets));
    }

    #[test]
    fn every_nav_anchor_is_rendered_exactly_once() {
        let content = SiteContent::axionix();
        let html = render_page(&content, &PageAssets::default());
        for item in content.nav() {
            let id = format!("id=\"{}\"", item.anchor);
            assert_eq!(html.matches(&id).count(), 1, "anchor {}", item.anchor);
            assert!(html.contains(&format!("href=\"#{}\"", item.anchor)));
        }
    }

    #[test]
    fn sections_follow_fixed_order() {
        let html = page();
        let nav = html.find("class=\"nav\"").expect("nav");
        let positions: Vec<usize> = section_anchors()
            .map(|a| html.find(&format!("id=\"{}\"", a)).expect("section"))
            .collect();
        assert!(nav < positions[0]);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn service_icon_depends_only_on_kind() {
        for offering in SiteContent::axionix().services() {
            let first = view! { <ServiceCard offering=offering.clone() /> }.to_html();
            let second = view! { <ServiceCard offering=offering.clone() /> }.to_html();
            assert_eq!(first, second);
            assert!(first.contains(glyph_path(offering.icon_kind.glyph())));
            assert!(first.contains(&offering.description));
        }

        let a = SiteContent::axionix().services()[0].clone();
        let mut b = a.clone();
        b.title = "Plant Moves".into();
        b.description = "Cranes and excavators".into();
        let html_b = view! { <ServiceCard offering=b /> }.to_html();
        assert!(html_b.contains(glyph_path(IconKind::HeavyVehicle.glyph())));
        assert!(!html_b.contains(glyph_path(IconKind::Marine.glyph())));
    }

    #[test]
    fn steps_render_by_order_field() {
        let mut content = SiteContent::axionix();
        content.process.steps.reverse();
        let html = render_page(&content, &PageAssets::default());

        // The stylesheet also mentions data-order; only look at the list
        let list_start = html.find("<ol class=\"process-steps\"").expect("step list");
        let list = &html[list_start..];

        let positions: Vec<usize> = (1..=4)
            .map(|n| {
                list.find(&format!("<li class=\"process-step\" data-order=\"{}\"", n))
                    .expect("step")
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        let request = list.find(">Request</span>").expect("request step");
        let recovery = list.find(">Recovery</span>").expect("recovery step");
        assert!(request < recovery);
    }

    #[test]
    fn contact_affordances_use_standard_schemes() {
        let html = page();
        assert!(html.contains("href=\"tel:+1234567890\""));
        assert!(html.contains("href=\"mailto:ops@axionix.example\""));
    }

    #[test]
    fn form_exposes_wire_field_names() {
        let html = page();
        assert!(html.contains("name=\"name\""));
        assert!(html.contains("name=\"email\""));
        assert!(html.contains("name=\"cargoDetails\""));
        assert!(html.contains("Send Request"));
        assert!(!html.contains("role=\"alert\""));
        assert!(!html.contains("action="));
    }

    #[test]
    fn form_shows_field_errors_and_keeps_values() {
        let form = FormView {
            values: ContactSubmission::new("", "", "Reefer unit, Rotterdam"),
            errors: vec![FieldError {
                field: FormField::Name,
                message: "Please enter your name",
            }],
            ..Default::default()
        };
        let html = render_page_with_form(&SiteContent::axionix(), &PageAssets::default(), &form);
        assert!(html.contains("data-field=\"name\""));
        assert!(html.contains("Please enter your name"));
        assert!(!html.contains("data-field=\"email\""));
        assert!(html.contains("Reefer unit, Rotterdam"));
    }

    #[test]
    fn submitting_form_disables_control() {
        let form = FormView {
            submitting: true,
            ..Default::default()
        };
        let html = render_page_with_form(&SiteContent::axionix(), &PageAssets::default(), &form);
        assert!(html.contains("aria-busy=\"true\""));
    }

    #[tokio::test]
    async fn rejected_submit_renders_errors_and_values() {
        let handler = ContactFormHandler::new(DiscardTransport);
        handler.set_field(FormField::CargoDetails, "Reefer unit, Rotterdam");
        let values = handler.capture();

        let result = handler.submit().await;
        let form = FormView::after_submit(values, &result);
        let html = render_page_with_form(&SiteContent::axionix(), &PageAssets::default(), &form);

        assert_eq!(html.matches("role=\"alert\"").count(), 2);
        assert!(html.contains("data-field=\"name\""));
        assert!(html.contains("data-field=\"email\""));
        assert!(html.contains("Reefer unit, Rotterdam"));
    }

    #[test]
    fn in_flight_submit_renders_busy_control() {
        let values = ContactSubmission::new("Jane Doe", "jane@example.com", "");
        let form = FormView::after_submit(values, &Err(SubmissionError::InFlight));
        let html = render_page_with_form(&SiteContent::axionix(), &PageAssets::default(), &form);

        assert!(html.contains("aria-busy=\"true\""));
        assert!(html.contains("value=\"Jane Doe\""));
    }

    #[test]
    fn failed_delivery_renders_status_and_keeps_values() {
        let values = ContactSubmission::new("Jane Doe", "jane@example.com", "");
        let result = Err(SubmissionError::Transport(TransportError("relay unreachable".into())));
        let form = FormView::after_submit(values, &result);
        let html = render_page_with_form(&SiteContent::axionix(), &PageAssets::default(), &form);

        assert!(html.contains("role=\"status\""));
        assert!(html.contains("delivery failed: relay unreachable"));
        assert!(html.contains("value=\"jane@example.com\""));
        assert!(!html.contains("aria-busy"));
    }

    #[test]
    fn wired_form_posts_to_action() {
        let assets = PageAssets {
            form_action: Some("/contact".into()),
            ..Default::default()
        };
        let html = render_page(&SiteContent::axionix(), &assets);
        assert!(html.contains("action=\"/contact\""));
        assert!(html.contains("method=\"post\""));
    }

    #[test]
    fn animations_can_be_switched_off() {
        let on = page();
        assert!(on.contains("hero-title reveal"));

        let assets = PageAssets {
            animations: false,
            ..Default::default()
        };
        let off = render_page(&SiteContent::axionix(), &assets);
        assert!(!off.contains("reveal reveal-late"));
        assert!(off.contains("Multi-Modal Cargo Surveying"));
    }

    #[test]
    fn hero_lead_emphasises_transport_modes() {
        let html = page();
        assert!(html.contains("<b>heavy vehicles</b>"));
        assert!(html.contains("<b>aircraft</b>"));
        assert!(html.contains("<b>ships</b>"));
        assert!(html.contains("Axionix provides independent, technology-driven surveys for "));
    }

    #[test]
    fn external_stylesheet_replaces_inline_css() {
        let assets = PageAssets {
            stylesheet_href: Some("/site.css".into()),
            ..Default::default()
        };
        let html = render_page(&SiteContent::axionix(), &assets);
        assert!(html.contains("href=\"/site.css\""));
        assert!(!html.contains("@keyframes"));
    }
}
