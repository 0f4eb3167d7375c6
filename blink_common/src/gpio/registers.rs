//! GPIO register bank.
//!
//! Models the three hardware registers the reference board exposes:
//! - direction register: 1 = output, 0 = input, per pin
//! - output register: drives the pin level for outputs, enables the
//!   internal pull-up for inputs
//! - input register: read-only snapshot of live pin levels
//!
//! All mutating accessors are read-modify-write and preserve unrelated
//! bits, except `write_direction` which replaces the whole register
//! (direction is configured once at startup).

/// Mask with only `bit` set.
///
/// # Panics
/// Panics in debug builds if `bit` >= 8 (shift overflow). Callers
/// validate bit indices against `REGISTER_WIDTH` at config load.
pub const fn bit_mask(bit: u8) -> u8 {
    1 << bit
}

/// In-memory bank of the three GPIO registers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegisterBank {
    /// Pin direction register (1 = output).
    pub direction: u8,
    /// Output data register (level for outputs, pull-up for inputs).
    pub output: u8,
    /// Input data register (live pin levels).
    pub input: u8,
}

impl RegisterBank {
    /// Create a bank with all registers zeroed (hardware reset state).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the direction register.
    pub fn write_direction(&mut self, value: u8) {
        self.direction = value;
    }

    /// Set the masked bits in the output register, preserving the rest.
    pub fn set_output_bits(&mut self, mask: u8) {
        self.output |= mask;
    }

    /// Clear the masked bits in the output register, preserving the rest.
    pub fn clear_output_bits(&mut self, mask: u8) {
        self.output &= !mask;
    }

    /// Read a single bit of the input register.
    pub fn input_bit(&self, bit: u8) -> bool {
        self.input & bit_mask(bit) != 0
    }

    /// Set or clear a single bit of the input register.
    ///
    /// Only simulated backends drive this; on real hardware the input
    /// register is read-only.
    pub fn drive_input_bit(&mut self, bit: u8, level: bool) {
        if level {
            self.input |= bit_mask(bit);
        } else {
            self.input &= !bit_mask(bit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_mask() {
        assert_eq!(bit_mask(0), 0b0000_0001);
        assert_eq!(bit_mask(1), 0b0000_0010);
        assert_eq!(bit_mask(5), 0b0010_0000);
        assert_eq!(bit_mask(7), 0b1000_0000);
    }

    #[test]
    fn test_set_clear_preserves_other_bits() {
        let mut bank = RegisterBank::new();
        bank.output = 0b1010_0101;

        bank.set_output_bits(bit_mask(1));
        assert_eq!(bank.output, 0b1010_0111);

        bank.clear_output_bits(bit_mask(1));
        assert_eq!(bank.output, 0b1010_0101);
    }

    #[test]
    fn test_set_then_clear_restores_all_but_target() {
        // led_on followed by led_off: every bit except the LED bit keeps
        // its prior value, the LED bit ends cleared.
        for prior in [0u8, 0b1111_1111, 0b0101_0101, 0b0010_0010] {
            let mut bank = RegisterBank::new();
            bank.output = prior;

            bank.set_output_bits(bit_mask(1));
            bank.clear_output_bits(bit_mask(1));

            assert_eq!(bank.output, prior & !bit_mask(1));
        }
    }

    #[test]
    fn test_input_bit_independent_of_other_bits() {
        let mut bank = RegisterBank::new();

        for noise in [0u8, 0b1101_1111, 0b0101_0101] {
            bank.input = noise & !bit_mask(5);
            assert!(!bank.input_bit(5));

            bank.input |= bit_mask(5);
            assert!(bank.input_bit(5));
        }
    }

    #[test]
    fn test_drive_input_bit() {
        let mut bank = RegisterBank::new();
        bank.input = 0b1000_0001;

        bank.drive_input_bit(5, true);
        assert_eq!(bank.input, 0b1010_0001);

        bank.drive_input_bit(5, false);
        assert_eq!(bank.input, 0b1000_0001);
    }

    #[test]
    fn test_write_direction_replaces_register() {
        let mut bank = RegisterBank::new();
        bank.direction = 0b1111_0000;

        bank.write_direction(bit_mask(1));
        assert_eq!(bank.direction, 0b0000_0010);
    }
}
