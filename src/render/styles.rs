//! Pre-computed static styles for the 128x32 readout.
//!
//! Built as `const` so no style objects are constructed per frame.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::primitives::PrimitiveStyle;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_9_POINT, PROFONT_12_POINT};

/// Left-aligned text positioned by its top edge.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Status line text (ProFont 9pt, lit pixels).
pub const STATUS_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_9_POINT, BinaryColor::On);

/// Splash title text (ProFont 12pt).
pub const TITLE_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_12_POINT, BinaryColor::On);

/// 1 px distance bar.
pub const BAR_STYLE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
