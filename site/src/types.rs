//! Site content types.
//!
//! Everything shown on the page lives in one [`SiteContent`] value. It is
//! built once (either [`SiteContent::axionix`] or a content file) and passed
//! by reference to the renderer; nothing mutates it afterwards.
//!
//! These types are:
//!
//! - **Serializable** - content can be kept in a TOML or JSON file
//! - **Clone-friendly** - components take owned props
//! - **Checked** - [`SiteContent::problems`] lists every broken invariant
//!
//! # Example
//!
//! ```rust
//! use axionix_site::types::{IconKind, SiteContent};
//!
//! let content = SiteContent::axionix();
//! assert_eq!(content.nav().len(), 5);
//! assert_eq!(content.services()[1].icon_kind, IconKind::Aircraft);
//! assert!(content.validate().is_ok());
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::compose;
use crate::error::{ContentError, ContentProblem};

/// Transport mode a service covers. Selects the service card icon.
///
/// Content files go through [`FromStr`], so an unknown kind fails loading
/// with [`ContentError::UnknownIconKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum IconKind {
    /// Trucks, trailers, plant and special-move loads
    HeavyVehicle,
    /// Airfreight
    Aircraft,
    /// Ships, containers and break-bulk
    Marine,
}

impl IconKind {
    /// Name used in content files and the `data-kind` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HeavyVehicle => "HeavyVehicle",
            Self::Aircraft => "Aircraft",
            Self::Marine => "Marine",
        }
    }

    /// Glyph drawn on the service card. Same kind, same glyph.
    pub fn glyph(self) -> Glyph {
        match self {
            Self::HeavyVehicle => Glyph::Truck,
            Self::Aircraft => Glyph::Plane,
            Self::Marine => Glyph::Ship,
        }
    }
}

impl FromStr for IconKind {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HeavyVehicle" => Ok(Self::HeavyVehicle),
            "Aircraft" => Ok(Self::Aircraft),
            "Marine" => Ok(Self::Marine),
            other => Err(ContentError::UnknownIconKind(other.to_string())),
        }
    }
}

impl TryFrom<String> for IconKind {
    type Error = ContentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inline SVG glyphs available to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Glyph {
    /// Delivery truck
    Truck,
    /// Aircraft side view
    Plane,
    /// Cargo ship
    Ship,
    /// Shield with check mark
    ShieldCheck,
    /// Document under a magnifier
    FileSearch,
    /// Life buoy
    LifeBuoy,
    /// Telephone handset
    Phone,
    /// Envelope
    Mail,
}

/// Brand shown at the left of the navigation bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Wordmark next to the logo
    pub name: String,
    /// Page `<title>`
    pub title: String,
}

/// A navigation link to one section of the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Visible link text
    pub label: String,
    /// Bare fragment id (`services`, not `#services`). Case-sensitive.
    pub anchor: String,
}

impl NavItem {
    /// Nav item pointing at `anchor`.
    pub fn new(label: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            anchor: anchor.into(),
        }
    }

    /// `#anchor`, ready for an `href` attribute.
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// Button-styled link. `href` may be a fragment (`#contact`) or a full URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    /// Button text
    pub label: String,
    /// Fragment (`#contact`) or absolute URL
    pub href: String,
}

impl CallToAction {
    /// Call-to-action with the given text and target.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Section anchor this link targets, when it is an in-page link.
    pub fn fragment(&self) -> Option<&str> {
        self.href.strip_prefix('#')
    }
}

/// Small icon + label badge under the hero lead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Icon drawn before the label
    pub glyph: Glyph,
    /// Badge text
    pub label: String,
}

/// Opening banner: headline, lead, badges and the two calls to action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Headline, one entry per visual line
    pub title_lines: Vec<String>,
    /// Paragraph under the headline
    pub lead: String,
    /// Phrases of `lead` rendered in bold, wherever they occur
    #[serde(default)]
    pub lead_emphasis: Vec<String>,
    /// Caption on the transport-mode illustration
    pub tagline: String,
    /// Badges under the lead
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    /// Filled button
    pub primary_cta: CallToAction,
    /// Outlined button
    pub secondary_cta: CallToAction,
}

impl Hero {
    /// The lead split into plain (`false`) and emphasised (`true`) runs,
    /// in reading order. The runs concatenate back to `lead`.
    pub fn lead_runs(&self) -> Vec<(&str, bool)> {
        let mut runs = Vec::new();
        let mut rest = self.lead.as_str();
        loop {
            let next = self
                .lead_emphasis
                .iter()
                .filter(|phrase| !phrase.is_empty())
                .filter_map(|phrase| rest.find(phrase.as_str()).map(|at| (at, phrase.len())))
                .min_by_key(|&(at, len)| (at, std::cmp::Reverse(len)));
            let Some((at, len)) = next else {
                break;
            };
            if at > 0 {
                runs.push((&rest[..at], false));
            }
            runs.push((&rest[at..at + len], true));
            rest = &rest[at + len..];
        }
        if !rest.is_empty() {
            runs.push((rest, false));
        }
        runs
    }
}

/// One service card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOffering {
    /// Card heading
    pub title: String,
    /// Card body text
    pub description: String,
    /// Transport mode; decides the card icon
    pub icon_kind: IconKind,
}

/// The services section: heading and cards in content order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesSection {
    /// Section heading
    pub heading: String,
    /// Cards, rendered in this order
    pub offerings: Vec<ServiceOffering>,
}

/// One numbered step of the engagement process.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    /// 1-based position. Rendering sorts by this, not by slice position.
    pub order: u8,
    /// Step name under the badge
    pub label: String,
    /// One-line explanation
    pub description: String,
    /// Glyph drawn above the label
    #[serde(default)]
    pub icon: Option<Glyph>,
}

/// The numbered engagement process.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSection {
    /// Section heading
    pub heading: String,
    /// Steps in any order; rendering sorts by `order`
    pub steps: Vec<ProcessStep>,
}

/// Short company description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutSection {
    /// Section heading
    pub heading: String,
    /// Body paragraph
    pub body: String,
}

/// Click-to-call and click-to-email details.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Dialable form, e.g. `+1234567890`
    pub phone: String,
    /// Human form, e.g. `+1 (234) 567-890`
    pub phone_display: String,
    /// Operations mailbox
    pub email: String,
}

impl ContactInfo {
    /// `tel:` link for click-to-call.
    pub fn tel_uri(&self) -> String {
        format!("tel:{}", self.phone)
    }

    /// `mailto:` link for click-to-email.
    pub fn mailto_uri(&self) -> String {
        format!("mailto:{}", self.email)
    }

    fn problems(&self) -> Vec<ContentProblem> {
        let mut problems = Vec::new();
        if !PHONE_REGEX.is_match(&self.phone) {
            problems.push(ContentProblem::InvalidPhone(self.phone.clone()));
        }
        if !EMAIL_REGEX.is_match(&self.email) {
            problems.push(ContentProblem::InvalidEmail(self.email.clone()));
        }
        problems
    }
}

/// Labels and placeholders for the contact form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormCopy {
    /// Label of the name input
    pub name_label: String,
    /// Placeholder of the name input
    pub name_placeholder: String,
    /// Label of the email input
    pub email_label: String,
    /// Placeholder of the email input
    pub email_placeholder: String,
    /// Label of the cargo details textarea
    pub details_label: String,
    /// Placeholder of the cargo details textarea
    pub details_placeholder: String,
    /// Submit button text
    pub submit_label: String,
}

/// Contact section: call/email links and the request form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSection {
    /// Section heading
    pub heading: String,
    /// Text above the contact links
    pub blurb: String,
    /// Phone and email
    pub info: ContactInfo,
    /// Form labels and placeholders
    pub form: FormCopy,
}

/// All content of the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    /// Navigation bar brand
    pub brand: Brand,
    /// Navigation links, one per section
    pub nav: Vec<NavItem>,
    /// Button at the right of the navigation bar
    pub nav_cta: CallToAction,
    /// Opening banner
    pub hero: Hero,
    /// Service cards
    pub services: ServicesSection,
    /// Engagement steps
    pub process: ProcessSection,
    /// Company description
    pub about: AboutSection,
    /// Contact links and form
    pub contact: ContactSection,
}

impl SiteContent {
    /// Built-in Axionix content.
    pub fn axionix() -> Self {
        Self {
            brand: Brand {
                name: "AXIONIX".into(),
                title: "Axionix - Multi-Modal Cargo Surveying & Recoveries".into(),
            },
            nav: vec![
                NavItem::new("Home", "home"),
                NavItem::new("Services", "services"),
                NavItem::new("Process", "process"),
                NavItem::new("About", "about"),
                NavItem::new("Contact", "contact"),
            ],
            nav_cta: CallToAction::new("Request a Survey", "#contact"),
            hero: Hero {
                title_lines: vec![
                    "Multi-Modal Cargo Surveying".into(),
                    "& Recoveries, Done Right".into(),
                ],
                lead: "Axionix provides independent, technology-driven surveys for heavy vehicles, \
                       aircraft, and ships, backed by rapid recovery action and digital \
                       chain-of-custody you can trust."
                    .into(),
                lead_emphasis: vec!["heavy vehicles".into(), "aircraft".into(), "ships".into()],
                tagline: "Heavy, Air, Sea".into(),
                highlights: vec![
                    Highlight {
                        glyph: Glyph::ShieldCheck,
                        label: "Insured & Certified".into(),
                    },
                    Highlight {
                        glyph: Glyph::FileSearch,
                        label: "24/7 Call-Outs".into(),
                    },
                ],
                primary_cta: CallToAction::new("Request a Survey", "#contact"),
                secondary_cta: CallToAction::new("View Services", "#services"),
            },
            services: ServicesSection {
                heading: "Our Services".into(),
                offerings: vec![
                    ServiceOffering {
                        title: "Heavy Vehicle Surveys".into(),
                        description: "Detailed post-transport condition checks, damage analysis \
                                      and claim documentation for trucks, trailers, plant, mining, \
                                      and special-move loads."
                            .into(),
                        icon_kind: IconKind::HeavyVehicle,
                    },
                    ServiceOffering {
                        title: "Aircraft Cargo Surveying".into(),
                        description: "Loadmaster oversight, tie-down verification, incident \
                                      surveys, and cargo condition reporting for airfreight, \
                                      including outsize, sensitive, and military consignments."
                            .into(),
                        icon_kind: IconKind::Aircraft,
                    },
                    ServiceOffering {
                        title: "Marine Surveys & Recoveries".into(),
                        description: "Cargo tally, loss assessment, salvage coordination and \
                                      independent reporting for ships, containers, break-bulk \
                                      and project cargo."
                            .into(),
                        icon_kind: IconKind::Marine,
                    },
                ],
            },
            process: ProcessSection {
                heading: "How It Works".into(),
                steps: vec![
                    ProcessStep {
                        order: 1,
                        label: "Request".into(),
                        description: "Call or email with your cargo details".into(),
                        icon: Some(Glyph::FileSearch),
                    },
                    ProcessStep {
                        order: 2,
                        label: "Survey".into(),
                        description: "On-site inspection, digital evidence, rapid reporting"
                            .into(),
                        icon: Some(Glyph::ShieldCheck),
                    },
                    ProcessStep {
                        order: 3,
                        label: "Recovery".into(),
                        description: "Loss mitigation, salvage, claim support".into(),
                        icon: Some(Glyph::LifeBuoy),
                    },
                    ProcessStep {
                        order: 4,
                        label: "Report".into(),
                        description: "Comprehensive docs for your underwriter".into(),
                        icon: Some(Glyph::Ship),
                    },
                ],
            },
            about: AboutSection {
                heading: "About Axionix".into(),
                body: "Axionix is a modern, technology-enabled survey and recovery firm. We \
                       serve logistics providers, underwriters, and cargo owners with accuracy, \
                       independence, and speed across air, sea, and heavy-road transport modes."
                    .into(),
            },
            contact: ContactSection {
                heading: "Request a Survey".into(),
                blurb: "Need rapid support? Call us any time or send the consignment details to \
                        schedule a survey and recovery team."
                    .into(),
                info: ContactInfo {
                    phone: "+1234567890".into(),
                    phone_display: "+1 (234) 567-890".into(),
                    email: "ops@axionix.example".into(),
                },
                form: FormCopy {
                    name_label: "Name".into(),
                    name_placeholder: "Your name".into(),
                    email_label: "Email".into(),
                    email_placeholder: "you@example.com".into(),
                    details_label: "Cargo Details".into(),
                    details_placeholder: "Describe the cargo, location, and timeline".into(),
                    submit_label: "Send Request".into(),
                },
            },
        }
    }

    /// Load content from a TOML file, or JSON when the extension is `.json`.
    ///
    /// Unknown icon kinds and missing fields fail here, before anything renders.
    pub fn load_from_path(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(&raw).map_err(|source| ContentError::Json {
                path: path.to_path_buf(),
                source,
            })
        } else {
            toml::from_str(&raw).map_err(|source| ContentError::Toml {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    /// Navigation links, in display order.
    pub fn nav(&self) -> &[NavItem] {
        &self.nav
    }

    /// Service offerings, in display order.
    pub fn services(&self) -> &[ServiceOffering] {
        &self.services.offerings
    }

    /// Process steps as stored; see [`ProcessSection::steps`].
    pub fn steps(&self) -> &[ProcessStep] {
        &self.process.steps
    }

    /// Phone and email shown in the contact section.
    pub fn contact_info(&self) -> &ContactInfo {
        &self.contact.info
    }

    /// Every invariant violation in this content, in page order.
    pub fn problems(&self) -> Vec<ContentProblem> {
        let mut problems = Vec::new();
        for (what, expected, found) in [
            ("nav items", NAV_ITEM_COUNT, self.nav().len()),
            ("services", SERVICE_COUNT, self.services().len()),
            ("process steps", STEP_COUNT, self.steps().len()),
        ] {
            if found != expected {
                problems.push(ContentProblem::Count {
                    what,
                    expected,
                    found,
                });
            }
        }

        problems.extend(compose::link_problems(self));

        for (idx, service) in self.services().iter().enumerate() {
            if service.title.trim().is_empty() {
                problems.push(ContentProblem::Empty {
                    what: format!("service #{} title", idx + 1),
                });
            }
            if service.description.trim().is_empty() {
                problems.push(ContentProblem::Empty {
                    what: format!("service #{} description", idx + 1),
                });
            }
        }

        problems.extend(
            self.hero
                .lead_emphasis
                .iter()
                .filter(|phrase| phrase.is_empty() || !self.hero.lead.contains(phrase.as_str()))
                .map(|phrase| ContentProblem::MissingEmphasis(phrase.clone())),
        );
        problems.extend(step_order_problems(self.steps()));
        problems.extend(self.contact.info.problems());
        problems
    }

    /// `Ok` when [`Self::problems`] is empty, otherwise [`ContentError::Invalid`].
    pub fn validate(&self) -> Result<(), ContentError> {
        let problems = self.problems();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(ContentError::Invalid(problems))
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::axionix()
    }
}

/// Navigation links on the page.
pub const NAV_ITEM_COUNT: usize = 5;
/// Service cards on the page.
pub const SERVICE_COUNT: usize = 3;
/// Steps in the engagement process.
pub const STEP_COUNT: usize = 4;

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]{7,15}$").unwrap());

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Every order lies in `1..=STEP_COUNT`, and sorted they read 1, 2, .., n.
fn step_order_problems(steps: &[ProcessStep]) -> Vec<ContentProblem> {
    let mut problems: Vec<ContentProblem> = steps
        .iter()
        .filter(|step| step.order == 0 || usize::from(step.order) > STEP_COUNT)
        .map(|step| ContentProblem::StepOutOfRange {
            label: step.label.clone(),
            order: step.order,
            max: STEP_COUNT,
        })
        .collect();

    let mut orders: Vec<u8> = steps.iter().map(|s| s.order).collect();
    orders.sort_unstable();

    problems.extend(
        orders
            .iter()
            .zip(1usize..)
            .find(|(found, expected)| usize::from(**found) != *expected)
            .map(|(found, expected)| ContentProblem::StepOrder {
                count: steps.len(),
                expected,
                found: *found,
            }),
    );
    problems
}
