//! Page layout: which sections exist, in what order, under which anchors.
//!
//! The navigation bar sits above every section. Sections follow in
//! [`Section::ORDER`], each rendered once with [`Section::anchor`] as its
//! element id. [`link_problems`] is the static check that every in-page link
//! in the content lands on one of those ids.

use crate::error::ContentProblem;
use crate::types::SiteContent;

/// One region of the single-page layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Hero banner, `#home`
    Home,
    /// Service cards, `#services`
    Services,
    /// Engagement steps, `#process`
    Process,
    /// Company blurb, `#about`
    About,
    /// Contact links and form, `#contact`
    Contact,
}

impl Section {
    /// Top-to-bottom page order.
    pub const ORDER: [Section; 5] = [
        Section::Home,
        Section::Services,
        Section::Process,
        Section::About,
        Section::Contact,
    ];

    /// Element id of the section. Matched case-sensitively.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::Process => "process",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    /// Section whose anchor is exactly `anchor`.
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|s| s.anchor() == anchor)
    }
}

/// Anchors produced by the page, in page order.
pub fn section_anchors() -> impl Iterator<Item = &'static str> {
    Section::ORDER.into_iter().map(Section::anchor)
}

/// In-page links of the content that do not resolve to a section.
///
/// Covers nav items, the nav call-to-action and both hero buttons. Links to
/// other documents (anything not starting with `#`) are not checked.
pub fn link_problems(content: &SiteContent) -> Vec<ContentProblem> {
    let mut problems = Vec::new();

    for item in content.nav() {
        if item.anchor.starts_with('#') {
            problems.push(ContentProblem::PrefixedAnchor {
                label: item.label.clone(),
                anchor: item.anchor.clone(),
            });
        } else if Section::from_anchor(&item.anchor).is_none() {
            problems.push(ContentProblem::BrokenAnchor {
                label: item.label.clone(),
                anchor: item.anchor.clone(),
            });
        }
    }

    let ctas = [
        &content.nav_cta,
        &content.hero.primary_cta,
        &content.hero.secondary_cta,
    ];
    for cta in ctas {
        let Some(fragment) = cta.fragment() else {
            continue;
        };
        if Section::from_anchor(fragment).is_none() {
            problems.push(ContentProblem::BrokenAnchor {
                label: cta.label.clone(),
                anchor: fragment.to_string(),
            });
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NavItem;
    use pretty_assertions::assert_eq;

    #[test]
    fn order_is_fixed() {
        let anchors: Vec<_> = section_anchors().collect();
        assert_eq!(anchors, vec!["home", "services", "process", "about", "contact"]);
    }

    #[test]
    fn from_anchor_is_case_sensitive() {
        assert_eq!(Section::from_anchor("about"), Some(Section::About));
        assert_eq!(Section::from_anchor("About"), None);
    }

    #[test]
    fn builtin_links_resolve() {
        assert!(link_problems(&SiteContent::axionix()).is_empty());
    }

    #[test]
    fn unknown_nav_anchor_is_broken() {
        let mut content = SiteContent::axionix();
        content.nav.push(NavItem::new("Careers", "careers"));
        assert_eq!(
            link_problems(&content),
            vec![ContentProblem::BrokenAnchor {
                label: "Careers".into(),
                anchor: "careers".into(),
            }]
        );
    }

    #[test]
    fn prefixed_nav_anchor_is_flagged() {
        let mut content = SiteContent::axionix();
        content.nav[0].anchor = "#home".into();
        assert_eq!(
            link_problems(&content),
            vec![ContentProblem::PrefixedAnchor {
                label: "Home".into(),
                anchor: "#home".into(),
            }]
        );
    }

    #[test]
    fn hero_cta_fragment_is_checked_but_urls_are_not() {
        let mut content = SiteContent::axionix();
        content.hero.secondary_cta.href = "#Services".into();
        content.nav_cta.href = "https://axionix.example/quote".into();
        assert_eq!(
            link_problems(&content),
            vec![ContentProblem::BrokenAnchor {
                label: "View Services".into(),
                anchor: "Services".into(),
            }]
        );
    }
}
