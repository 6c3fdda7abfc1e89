pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 720;           // Default window height
pub const RENDER_WIDTH: i32 = 1920;           // Width of an exported page
pub const RENDER_HEIGHT: i32 = 1080;          // Height of an exported page
pub const FPS: u32 = 60;                      // Frames per second

pub const REVEAL_DELAY_MS: u64 = 50;          // Delay before the new slide is marked visible
pub const ENTRANCE_DURATION: f32 = 0.6;       // Duration of the entrance fade (seconds)
pub const ENTRANCE_OFFSET: f32 = 20.0;        // Vertical distance covered by the entrance (pixels)
pub const SWIPE_THRESHOLD: f32 = 50.0;        // Minimum horizontal drag recognised as a swipe (pixels)

pub const IMAGE_FIT: f32 = 0.9;               // Share of the slide area an image may cover

pub const ANNOUNCEMENT_TEMPLATE: &str = "Slide {index}: {title}";
pub const DOT_LABEL_TEMPLATE: &str = "Go to slide {index}";
pub const PREVIOUS_LABEL: &str = "Go to previous slide";
pub const NEXT_LABEL: &str = "Go to next slide";
pub const FULLSCREEN_LABEL: &str = "Toggle fullscreen";

pub const MANIFEST_FILE: &str = "deck.toml";
pub const EXPORT_DIRECTORY: &str = "slides-export";
