pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const ANIMATION_DURATION: f32 = 0.5;      // Duration of a card moving between slots (seconds)

pub const GALLERY_INTERVAL_MS: u64 = 5000;    // Default auto-advance for the gallery deck
pub const AWARDS_INTERVAL_MS: u64 = 6000;     // Default auto-advance for the awards deck

pub const SWIPE_THRESHOLD: f32 = 50.0;        // Minimum horizontal travel for a swipe (pixels)
pub const MOBILE_BREAKPOINT: i32 = 768;       // No auto-advance at or below this viewport width
