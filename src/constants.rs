/// Page behavior tuning constants and DOM hooks.
///
/// Timings are in milliseconds unless the name says otherwise. Selectors and
/// ids mirror the markup of the portfolio page.

// ---------------- Router ----------------
pub const DETAIL_ID_PREFIX: &str = "detail-";
pub const DETAIL_CONTAINER_ID: &str = "detail-pages";
pub const DETAIL_PAGE_SELECTOR: &str = ".detail-page";
pub const DETAIL_CONTENT_SELECTOR: &str = ".detail-content";
pub const WORK_CARD_SELECTOR: &str = ".work-card";
pub const VIEW_BUTTON_SELECTOR: &str = ".view-button";
pub const BODY_DETAIL_CLASS: &str = "detail-page-active";
pub const ACTIVE_CLASS: &str = "active";
pub const MAIN_PAGE_STATE: &str = "main";

// Delay before showing the target page after a route change
pub const DETAIL_SHOW_DELAY_MS: i32 = 50;
// Delay before applying a deep link found on load
pub const DEEP_LINK_DELAY_MS: i32 = 100;

// ---------------- Scroll reveal ----------------
pub const HIDDEN_REVEAL_CLASS: &str = "hidden-reveal";
pub const VISIBLE_REVEAL_CLASS: &str = "visible-reveal";
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.2;
pub const DEFAULT_ROOT_MARGIN: &str = "0px";
pub const ANIMATED_ATTR: &str = "data-animated";

pub const SECTION_HEADING_SELECTOR: &str = ".section-header h2";
pub const HEADING_THRESHOLD: f64 = 0.3;
pub const LETTER_STAGGER_MS: i32 = 50;
pub const LETTER_TRANSITION: &str = "all 0.4s cubic-bezier(0.25, 0.46, 0.45, 0.94)";
pub const LETTER_HIDDEN_TRANSFORM: &str = "translateY(20px) rotateX(90deg)";
pub const LETTER_SHOWN_TRANSFORM: &str = "translateY(0) rotateX(0deg)";
pub const LINE_EXPAND_DELAY_MS: i32 = 500;

// ---------------- Headline word cycle ----------------
pub const HEADLINE_SELECTOR: &str = ".animated-text";
pub const WORD_SWITCHER_SELECTOR: &str = ".word-switcher";
pub const WORD_CYCLE_START_DELAY_MS: i32 = 2000;
pub const WORD_CYCLE_INTERVAL_MS: i32 = 4000;
pub const WORD_SWAP_FADE_MS: i32 = 300;

// ---------------- Signature ----------------
pub const SIGNATURE_SECTION_ID: &str = "signature";
pub const SIGNATURE_SVG_ID: &str = "signature-svg";
pub const SIGNATURE_UNDERLINE_SELECTOR: &str = ".signature-underline";
pub const SIGNATURE_THRESHOLD: f64 = 0.5;
pub const SIGNATURE_UNDERLINE_DELAY_MS: i32 = 2000;
pub const ANIMATE_CLASS: &str = "animate";

// ---------------- Mouse trail ----------------
pub const TRAIL_CONTAINER_ID: &str = "mouse-trail-container";
pub const TRAIL_DOT_CLASS: &str = "trail-dot";
pub const TRAIL_SKIP_PROBABILITY: f64 = 0.6;
pub const TRAIL_MIN_VIEWPORT_WIDTH: f64 = 768.0;
pub const TRAIL_FADE_DELAY_MS: i32 = 100;
pub const TRAIL_REMOVE_DELAY_MS: i32 = 500;

// ---------------- Decorative shapes ----------------
pub const DECO_CONTAINER_ID: &str = "deco-shapes-container";
pub const DECO_CIRCLE_COUNT: usize = 6;
pub const DECO_SQUARE_COUNT: usize = 4;
pub const DECO_LINE_COUNT: usize = 5;
pub const DECO_COLOR_CYAN: &str = "#00FFFF";
pub const DECO_COLOR_RED: &str = "#FF1744";
// (min, span) in px for circle/square edge length
pub const DECO_CIRCLE_SIZE: (f64, f64) = (40.0, 80.0);
pub const DECO_SQUARE_SIZE: (f64, f64) = (30.0, 60.0);
// (min, span) in percent for dashed line length
pub const DECO_LINE_LENGTH: (f64, f64) = (20.0, 40.0);
pub const DECO_CIRCLE_DELAY_STEP_SEC: f64 = 0.5;
pub const DECO_SQUARE_DELAY_STEP_SEC: f64 = 0.7;

// ---------------- Hero carousel ----------------
pub const HERO_SLIDE_SELECTOR: &str = ".hero-slide";
pub const HERO_SLIDE_INTERVAL_MS: i32 = 5000;

// ---------------- Background video ----------------
pub const VIDEO_ID: &str = "hero-video";
pub const VIDEO_TOGGLE_ID: &str = "video-toggle";
pub const VIDEO_DEFAULT_VOLUME: f64 = 0.7;
pub const VIDEO_PLAY_FAILED_ALERT: &str =
    "Unable to play video. Please check your browser settings.";

// ---------------- Audio player ----------------
pub const AUDIO_SOURCE: &str = "assets/audio/Akai.m4a";
pub const PLAYER_MIN_WIDTH_PX: f64 = 280.0;

// ---------------- Profile image ----------------
pub const PROFILE_IMAGE_ID: &str = "profile-picture";
pub const PROFILE_LOCAL_FALLBACK: &str = "assets/images/Consistency.jpg";
pub const PLACEHOLDER_AVATAR_CLASS: &str = "placeholder-avatar";
pub const PLACEHOLDER_AVATAR_TEXT: &str = "SR";

// ---------------- Tabs + viewer ----------------
pub const TAB_BUTTON_SELECTOR: &str = ".tab-button";
pub const TAB_CONTENT_SELECTOR: &str = ".tab-content";
pub const VIEWER_TAB_ID: &str = "3d-models";
pub const VIEWER_CONTAINER_ID: &str = "canvas-container";
pub const VIEWER_FALLBACK_ID: &str = "canvas-fallback";

// Colors as 0xRRGGBB
pub const MESH_BASE_COLOR: u32 = 0x3B1B1B; // dark ruby
pub const ACCENT_COLOR_1: u32 = 0xD8005A; // vivid magenta
pub const ACCENT_COLOR_2: u32 = 0xEF90BE; // radiant pink

pub const MESH_ROTATION_STEP_RAD: f32 = 0.005;
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_DISTANCE: f32 = 5.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const KEY_LIGHT_INTENSITY: f32 = 3.0;
pub const KEY_LIGHT_POSITION: [f32; 3] = [5.0, 5.0, 5.0];
pub const RIM_LIGHT_INTENSITY: f32 = 1.5;
pub const RIM_LIGHT_POSITION: [f32; 3] = [-5.0, 2.0, -5.0];

pub const MESH_ROUGHNESS: f32 = 0.2;
pub const MESH_METALNESS: f32 = 0.9;

// Torus knot geometry
pub const KNOT_RADIUS: f32 = 1.0;
pub const KNOT_TUBE: f32 = 0.3;
pub const KNOT_TUBULAR_SEGMENTS: u32 = 100;
pub const KNOT_RADIAL_SEGMENTS: u32 = 16;
pub const KNOT_P: u32 = 2;
pub const KNOT_Q: u32 = 3;

// Orbit control
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_MIN_POLAR: f32 = 0.01;
