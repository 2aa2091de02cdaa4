//! Display and layout configuration constants.
//!
//! Positions are pre-computed as `const` so the render path does no layout
//! arithmetic per frame.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (SSD1306 128x32 module).
pub const DISPLAY_WIDTH: u32 = 128;

/// Display height in pixels.
pub const DISPLAY_HEIGHT: u32 = 32;

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Top-left corner of the status line (`Dist: 42.88 cm`, `Out of range`, ...).
pub const STATUS_ORIGIN: (i32, i32) = (0, 0);

/// Row of the proportional distance bar, 10 px above the bottom edge.
pub const BAR_Y: i32 = (DISPLAY_HEIGHT - 10) as i32;

/// Capacity of the formatted status line.
/// Long enough for `Dist: 149.99 cm` with room to spare.
pub const STATUS_TEXT_LEN: usize = 32;
