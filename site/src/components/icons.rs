//! Inline SVG glyphs.
//!
//! Simplified solid outlines on a 256x256 grid, drawn with `evenodd` so
//! inner shapes (the shield check, the buoy ring) cut through.

use leptos::prelude::*;

use crate::types::Glyph;

/// Renders a decorative inline SVG glyph.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon glyph=Glyph::Ship size="24" /> }
/// ```
#[component]
pub fn Icon(
    glyph: Glyph,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            data-glyph=glyph_name(glyph)
            aria-hidden="true"
        >
            <path fill-rule="evenodd" d=glyph_path(glyph)></path>
        </svg>
    }
}

/// Value of the `data-glyph` attribute for a glyph.
pub fn glyph_name(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Truck => "truck",
        Glyph::Plane => "plane",
        Glyph::Ship => "ship",
        Glyph::ShieldCheck => "shield-check",
        Glyph::FileSearch => "file-search",
        Glyph::LifeBuoy => "life-buoy",
        Glyph::Phone => "phone",
        Glyph::Mail => "mail",
    }
}

/// SVG path data (the `d` attribute) for a glyph.
pub fn glyph_path(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Truck => ICON_TRUCK,
        Glyph::Plane => ICON_PLANE,
        Glyph::Ship => ICON_SHIP,
        Glyph::ShieldCheck => ICON_SHIELD_CHECK,
        Glyph::FileSearch => ICON_FILE_SEARCH,
        Glyph::LifeBuoy => ICON_LIFE_BUOY,
        Glyph::Phone => ICON_PHONE,
        Glyph::Mail => ICON_MAIL,
    }
}

// =============================================================================
// Glyph outlines
// =============================================================================

/// Box trailer, cab and two wheels
const ICON_TRUCK: &str = "M16,64H152V176H16Z M152,104H200L240,144V176H152Z M64,200A20,20,0,1,1,44,180A20,20,0,0,1,64,200Z M216,200A20,20,0,1,1,196,180A20,20,0,0,1,216,200Z";

/// Top-down airliner
const ICON_PLANE: &str = "M128,16L148,96L240,140V160L148,140L140,204L168,224V240L128,228L88,240V224L116,204L108,140L16,160V140L108,96Z";

/// Hull, deckhouse and funnel
const ICON_SHIP: &str = "M24,152H232L200,216H56Z M72,104H184V144H72Z M112,56H144V96H112Z";

/// Shield with a check mark cut out
const ICON_SHIELD_CHECK: &str = "M128,24L216,56V120C216,176,176,216,128,232C80,216,40,176,40,120V56Z M116,168L72,124L88,108L116,136L172,80L188,96Z";

/// Document with a lens cut out
const ICON_FILE_SEARCH: &str = "M56,24H160L208,72V232H56Z M124,108A36,36,0,1,0,160,144A36,36,0,0,0,124,108Z";

/// Ring buoy
const ICON_LIFE_BUOY: &str = "M128,24A104,104,0,1,0,232,128A104,104,0,0,0,128,24Z M128,80A48,48,0,1,1,80,128A48,48,0,0,1,128,80Z";

/// Handset
const ICON_PHONE: &str = "M64,24H104L124,80L96,100C108,128,128,148,156,160L176,132L232,152V192C232,216,216,232,192,232C112,232,24,144,24,64C24,40,40,24,64,24Z";

/// Envelope with the flap cut out
const ICON_MAIL: &str = "M24,56H232V200H24Z M44,72L128,132L212,72Z";
