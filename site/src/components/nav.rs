use leptos::prelude::*;

use crate::compose::Section;
use crate::types::{Brand, CallToAction, NavItem};

/// Sticky top bar: brand, one link per nav item, survey call-to-action.
#[component]
pub fn NavBar(brand: Brand, items: Vec<NavItem>, cta: CallToAction, logo_path: String) -> impl IntoView {
    let home_href = format!("#{}", Section::Home.anchor());
    let logo_alt = format!("{} logo", brand.name);

    view! {
        <nav class="nav">
            <div class="container nav-inner">
                <a href=home_href class="nav-brand">
                    <img class="nav-logo" src=logo_path alt=logo_alt />
                    <span class="nav-title">{brand.name}</span>
                </a>
                <div class="nav-links">
                    {items.into_iter().map(|item| view! { <NavLink item=item /> }).collect::<Vec<_>>()}
                </div>
                <a href=cta.href class="btn btn-primary btn-sm nav-cta">{cta.label}</a>
            </div>
        </nav>
    }
}

/// A single in-page navigation link.
#[component]
pub fn NavLink(item: NavItem) -> impl IntoView {
    let href = item.href();
    view! {
        <a href=href class="nav-link">{item.label}</a>
    }
}
