use leptos::prelude::*;

use super::Icon;
use crate::compose::Section;
use crate::types::{Glyph, Hero};

/// Hero banner under the `home` anchor.
///
/// With `animations` on, the headline and illustration carry `reveal`
/// classes; the CSS fades them in without holding back any content.
#[component]
pub fn HeroBanner(hero: Hero, animations: bool) -> impl IntoView {
    let title_class = if animations { "hero-title reveal" } else { "hero-title" };
    let art_class = if animations { "hero-art reveal reveal-late" } else { "hero-art" };
    let lead = hero
        .lead_runs()
        .into_iter()
        .map(|(text, emphasised)| {
            let text = text.to_string();
            if emphasised {
                view! { <b>{text}</b> }.into_any()
            } else {
                text.into_any()
            }
        })
        .collect::<Vec<_>>();
    let Hero {
        title_lines,
        tagline,
        highlights,
        primary_cta,
        secondary_cta,
        ..
    } = hero;

    view! {
        <section id=Section::Home.anchor() class="hero">
            <div class="container hero-grid">
                <div class="hero-content">
                    <h1 class=title_class>
                        {title_lines.into_iter().enumerate().map(|(idx, line)| view! {
                            {(idx > 0).then(|| view! { <br /> })}
                            {line}
                        }).collect::<Vec<_>>()}
                    </h1>
                    <p class="hero-lead">{lead}</p>
                    <div class="hero-highlights">
                        {highlights.into_iter().map(|highlight| view! {
                            <span class="hero-highlight">
                                <Icon glyph=highlight.glyph />
                                {highlight.label}
                            </span>
                        }).collect::<Vec<_>>()}
                    </div>
                    <div class="hero-actions">
                        <a href=primary_cta.href class="btn btn-primary">{primary_cta.label}</a>
                        <a href=secondary_cta.href class="btn btn-outline">{secondary_cta.label}</a>
                    </div>
                </div>
                <div class=art_class aria-hidden="true">
                    <Icon glyph=Glyph::Truck size="80" class="art-truck" />
                    <Icon glyph=Glyph::Plane size="96" class="art-plane" />
                    <Icon glyph=Glyph::Ship size="96" class="art-ship" />
                    <span class="art-tagline">{tagline}</span>
                </div>
            </div>
        </section>
    }
}
