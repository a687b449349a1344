//! Root document component - the complete HTML page
//!
//! Navigation first, then every [`Section`] in [`Section::ORDER`].

use leptos::prelude::*;

use super::{AboutBlurb, ContactPanel, HeroBanner, NavBar, ProcessList, ServicesGrid};
use crate::PageAssets;
use crate::compose::Section;
use crate::contact::FormView;
use crate::styles::{CSP, SITE_CSS};
use crate::types::SiteContent;

/// The complete HTML document for the site
#[component]
pub fn SiteDocument(content: SiteContent, assets: PageAssets, form: FormView) -> impl IntoView {
    let title = content.brand.title.clone();
    let stylesheet = assets.stylesheet_href.clone();
    let sections = Section::ORDER
        .into_iter()
        .map(|section| section_view(section, &content, &assets, &form))
        .collect::<Vec<_>>();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title}</title>
                {match stylesheet {
                    Some(href) => view! { <link rel="stylesheet" href=href /> }.into_any(),
                    None => view! { <style>{SITE_CSS}</style> }.into_any(),
                }}
            </head>
            <body class="site">
                <NavBar
                    brand=content.brand
                    items=content.nav
                    cta=content.nav_cta
                    logo_path=assets.logo_path
                />
                <main>{sections}</main>
            </body>
        </html>
    }
}

/// Renders one section from the content it owns.
fn section_view(section: Section, content: &SiteContent, assets: &PageAssets, form: &FormView) -> AnyView {
    match section {
        Section::Home => view! {
            <HeroBanner hero=content.hero.clone() animations=assets.animations />
        }
        .into_any(),
        Section::Services => view! {
            <ServicesGrid section=content.services.clone() />
        }
        .into_any(),
        Section::Process => view! {
            <ProcessList section=content.process.clone() />
        }
        .into_any(),
        Section::About => view! {
            <AboutBlurb section=content.about.clone() />
        }
        .into_any(),
        Section::Contact => view! {
            <ContactPanel
                section=content.contact.clone()
                form=form.clone()
                form_action=assets.form_action.clone()
            />
        }
        .into_any(),
    }
}
