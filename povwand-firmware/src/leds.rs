//! LED column driver
//!
//! Maps a frame byte onto the eight wand LEDs, bit 0 at the handle end.

use embassy_rp::gpio::Output;

use povwand_core::traits::OutputPort;

/// The eight GPIO outputs driving the LED column.
pub struct WandLeds {
    pins: [Output<'static>; 8],
}

impl WandLeds {
    pub fn new(pins: [Output<'static>; 8]) -> Self {
        Self { pins }
    }
}

impl OutputPort for WandLeds {
    fn set_pattern(&mut self, pattern: u8) {
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            if pattern & (1 << bit) != 0 {
                pin.set_high();
            } else {
                pin.set_low();
            }
        }
    }
}
