/// Page and canvas constants for the web frontend.
///
/// Scene tuning lives in `folio_core::constants`; values here only concern
/// the DOM, the backing store and the renderer.
// DOM element ids
pub const ROOT_ID: &str = "hero";
pub const CANVAS_ID: &str = "app-canvas";
pub const HERO_TEXT_ID: &str = "hero-text";

// Device pixel ratio clamp for the canvas backing store
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 1.5;

// Page chrome
pub const LOGO_TEXT: &str = "KHALIL";
pub const LOGO_MARK_COLOR: &str = "#db2777"; // pink asterisk after the logo
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("Work", "#work"),
    ("Playground", "#playground"),
    ("About Me", "#about"),
];
pub const FOOTER_LEFT: [&str; 2] = ["Based in Rabat, Morocco", "11:16 PM GMT+1 - 27.79°C"];
pub const FOOTER_RIGHT_TITLE: &str = "Freelance Availability";
pub const FOOTER_RIGHT_STATUS: &str = "● Limited Hours";
pub const STATUS_COLOR: &str = "#f97316";
pub const MUTED_TEXT: &str = "#9ca3af";

// Stacking order of the page layers
pub const Z_CANVAS: i32 = 0;
pub const Z_HERO_TEXT: i32 = 5;
pub const Z_GRADIENT: i32 = 10;
pub const Z_CHROME: i32 = 20;

