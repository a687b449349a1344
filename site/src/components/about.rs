use leptos::prelude::*;

use crate::compose::Section;
use crate::types::AboutSection;

/// About section under the `about` anchor.
#[component]
pub fn AboutBlurb(section: AboutSection) -> impl IntoView {
    view! {
        <section id=Section::About.anchor() class="about">
            <div class="container">
                <h2 class="section-title">{section.heading}</h2>
                <p class="about-body">{section.body}</p>
            </div>
        </section>
    }
}
