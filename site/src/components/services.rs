use leptos::prelude::*;

use super::Icon;
use crate::compose::Section;
use crate::types::{ServiceOffering, ServicesSection};

/// Service cards, in content order.
#[component]
pub fn ServicesGrid(section: ServicesSection) -> impl IntoView {
    view! {
        <section id=Section::Services.anchor() class="services">
            <div class="container">
                <h2 class="section-title">{section.heading}</h2>
                <div class="services-grid">
                    {section.offerings.into_iter().map(|offering| view! {
                        <ServiceCard offering=offering />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// One card. The icon depends only on the offering's icon kind.
#[component]
pub fn ServiceCard(offering: ServiceOffering) -> impl IntoView {
    let kind = offering.icon_kind;

    view! {
        <article class="service-card" data-kind=kind.as_str()>
            <Icon glyph=kind.glyph() size="64" class="service-icon" />
            <h3 class="service-title">{offering.title}</h3>
            <p class="service-description">{offering.description}</p>
        </article>
    }
}
