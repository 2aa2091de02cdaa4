//! SSD1306 128x32 OLED on I2C1.
//!
//! Pin mapping:
//! - SDA: GPIO14 (I2C1 SDA)
//! - SCL: GPIO15 (I2C1 SCL)
//! - Address: 0x3C (the `ssd1306` crate default)
//!
//! The driver runs in buffered graphics mode: drawing only touches the RAM
//! buffer, [`Display::show`] pushes it over I2C.

use display_interface::DisplayError;
use embassy_rp::i2c::{Blocking, Config as I2cConfig, I2c};
use embassy_rp::peripherals::I2C1;
use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use rangefinder::Display;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

/// I2C clock for the panel. SSD1306 modules handle fast mode.
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

type Driver = Ssd1306<I2CInterface<I2c<'static, I2C1, Blocking>>, DisplaySize128x32, BufferedGraphicsMode<DisplaySize128x32>>;

/// I2C configuration for the SSD1306.
pub fn oled_i2c_config() -> I2cConfig {
    let mut config = I2cConfig::default();
    config.frequency = I2C_FREQUENCY_HZ;
    config
}

/// Buffered SSD1306 exposed as a [`Display`].
pub struct Oled {
    driver: Driver,
}

impl Oled {
    /// Wrap the bus and initialize the panel (clears it, display on).
    pub fn new(i2c: I2c<'static, I2C1, Blocking>) -> Result<Self, DisplayError> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut driver =
            Ssd1306::new(interface, DisplaySize128x32, DisplayRotation::Rotate0).into_buffered_graphics_mode();
        driver.init()?;
        Ok(Self { driver })
    }
}

impl OriginDimensions for Oled {
    fn size(&self) -> Size { self.driver.size() }
}

impl DrawTarget for Oled {
    type Color = BinaryColor;
    type Error = DisplayError;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.driver.draw_iter(pixels)
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.driver.fill_solid(area, color)
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.driver.clear(color)
    }
}

impl Display for Oled {
    fn show(&mut self) -> Result<(), Self::Error> { self.driver.flush() }
}
