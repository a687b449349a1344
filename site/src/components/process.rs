use leptos::prelude::*;

use super::Icon;
use crate::compose::Section;
use crate::types::{ProcessSection, ProcessStep};

/// Numbered process steps, sorted by their `order` field.
#[component]
pub fn ProcessList(section: ProcessSection) -> impl IntoView {
    let mut steps = section.steps;
    steps.sort_by_key(|step| step.order);

    view! {
        <section id=Section::Process.anchor() class="process">
            <div class="container">
                <h2 class="section-title">{section.heading}</h2>
                <ol class="process-steps">
                    {steps.into_iter().map(|step| view! { <StepItem step=step /> }).collect::<Vec<_>>()}
                </ol>
            </div>
        </section>
    }
}

/// One step: numbered badge, optional glyph, label and description.
#[component]
pub fn StepItem(step: ProcessStep) -> impl IntoView {
    let order = step.order.to_string();
    let badge = order.clone();

    view! {
        <li class="process-step" data-order=order>
            <span class="step-badge">{badge}</span>
            {step.icon.map(|glyph| view! { <Icon glyph=glyph size="28" class="step-icon" /> })}
            <span class="step-label">{step.label}</span>
            <span class="step-description">{step.description}</span>
        </li>
    }
}
