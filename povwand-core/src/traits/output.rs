//! Output port trait for the LED array

/// Trait for the 8-line LED output
///
/// The wand's display is 8 parallel output lines, one per LED. Writes are
/// all-or-nothing: the whole pattern lands in one call, there is no partial
/// update and no failure path.
pub trait OutputPort {
    /// Drive the 8 output lines with `pattern` (bit 0 = first LED).
    fn set_pattern(&mut self, pattern: u8);

    /// Turn every LED off.
    fn clear(&mut self) {
        self.set_pattern(0);
    }
}
