//! Inline SVG icons.
//!
//! Glyphs are drawn on a 256x256 grid so they line up with each other at
//! any size.

use leptos::prelude::*;

use crate::types::IconKind;

/// Renders an inline SVG icon from a path data string.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_MENU size="24" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    #[prop(into)]
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "24")]
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
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Icon for an [`IconKind`], tagged with its name for styling.
#[component]
pub fn IconGlyph(
    /// Which glyph to draw
    kind: IconKind,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span class="icon" data-icon=kind.name()>
            <Icon path=icon_path(kind) class=class />
        </span>
    }
}

/// Path data for each icon kind.
pub fn icon_path(kind: IconKind) -> &'static str {
    match kind {
        IconKind::AlertTriangle => ICON_ALERT_TRIANGLE,
        IconKind::BarChart => ICON_BAR_CHART,
        IconKind::TrendingUp => ICON_TRENDING_UP,
        IconKind::CloudRain => ICON_CLOUD_RAIN,
        IconKind::Thermometer => ICON_THERMOMETER,
        IconKind::Sprout => ICON_SPROUT,
        IconKind::Wind => ICON_WIND,
        IconKind::Menu => ICON_MENU,
    }
}

// =============================================================================
// Glyphs
// =============================================================================

/// Warning triangle with exclamation mark
pub const ICON_ALERT_TRIANGLE: &str = "M128,24,240,224H16ZM120,96v64h16V96Zm8,80a12,12,0,1,0,12,12A12,12,0,0,0,128,176Z";

/// Three vertical bars on a baseline
pub const ICON_BAR_CHART: &str = "M40,208V120H80v88Zm64,0V56h40V208Zm64,0V96h40V208ZM24,216H232v16H24Z";

/// Zig-zag line rising to the right
pub const ICON_TRENDING_UP: &str = "M232,56v64H216V83.31l-80,80-40-40L37.66,181.66,26.34,170.34,96,100.69l40,40,68.69-68.69H168V56Z";

/// Cloud with three rain streaks
pub const ICON_CLOUD_RAIN: &str = "M160,32a72,72,0,0,0-67.6,47.2A52,52,0,1,0,76,180h84a74,74,0,0,0,0-148ZM88,196l-16,32h16l16-32Zm48,0-16,32h16l16-32Zm48,0-16,32h16l16-32Z";

/// Bulb thermometer with scale marks
pub const ICON_THERMOMETER: &str = "M136,152.8V48a24,24,0,0,0-48,0V152.8a44,44,0,1,0,48,0ZM112,224a28,28,0,0,1-12-53.3V48a12,12,0,0,1,24,0V170.7A28,28,0,0,1,112,224Zm56-168h40V72H168Zm0,40h40v16H168Z";

/// Two-leaf seedling
pub const ICON_SPROUT: &str = "M120,232V144C64,144,32,112,32,56c56,0,88,32,88,80v96Zm16-112c0-48,32-80,88-80,0,56-32,88-88,88Z";

/// Curling wind lines
pub const ICON_WIND: &str = "M24,88H168a24,24,0,1,0-24-24H128a40,40,0,1,1,40,40H24Zm0,40H200a32,32,0,1,1-32,32h16a16,16,0,1,0,16-16H24Zm0,40h96v16H24Z";

/// Three horizontal lines
pub const ICON_MENU: &str = "M32,56H224V72H32Zm0,64H224v16H32Zm0,64H224v16H32Z";
