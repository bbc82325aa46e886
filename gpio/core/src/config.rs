//! Electrical pin configuration values

use crate::{GpioError, GpioResult};

/// Output driver type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    PushPull,
    OpenDrain,
}

impl OutputType {
    pub const fn bits(self) -> u32 {
        match self {
            OutputType::PushPull => 0,
            OutputType::OpenDrain => 1,
        }
    }
}

/// Pin direction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Digital input
    Input,
    /// General purpose output
    Output(OutputType),
    /// Alternate function, routed to a peripheral
    Alternate(OutputType),
    /// Analog
    Analog,
}

impl Mode {
    /// Two-bit mode field value
    pub const fn bits(self) -> u32 {
        match self {
            Mode::Input => 0b00,
            Mode::Output(_) => 0b01,
            Mode::Alternate(_) => 0b10,
            Mode::Analog => 0b11,
        }
    }

    /// Output driver type for modes that drive the pin
    pub const fn output_type(self) -> Option<OutputType> {
        match self {
            Mode::Output(otype) | Mode::Alternate(otype) => Some(otype),
            Mode::Input | Mode::Analog => None,
        }
    }

    pub const fn is_alternate(self) -> bool {
        matches!(self, Mode::Alternate(_))
    }
}

/// Internal pull resistor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pull {
    #[default]
    None,
    Up,
    Down,
}

impl Pull {
    pub const fn bits(self) -> u32 {
        match self {
            Pull::None => 0b00,
            Pull::Up => 0b01,
            Pull::Down => 0b10,
        }
    }
}

/// Output slew speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speed {
    #[default]
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Speed {
    /// Decode a raw two-bit speed value
    pub fn from_bits(bits: u8) -> GpioResult<Self> {
        match bits {
            0 => Ok(Speed::Low),
            1 => Ok(Speed::Medium),
            2 => Ok(Speed::High),
            3 => Ok(Speed::VeryHigh),
            _ => Err(GpioError::InvalidSpeed),
        }
    }

    pub const fn bits(self) -> u32 {
        self as u32
    }
}

/// Alternate function number, 0..=15
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlternateFunction(u8);

impl AlternateFunction {
    pub const AF0: Self = Self(0);

    pub fn new(number: u8) -> GpioResult<Self> {
        if number > 15 {
            Err(GpioError::InvalidAlternateFunction)
        } else {
            Ok(Self(number))
        }
    }

    pub const fn number(self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_bits() {
        assert_eq!(Mode::Input.bits(), 0);
        assert_eq!(Mode::Output(OutputType::OpenDrain).bits(), 1);
        assert_eq!(Mode::Alternate(OutputType::PushPull).bits(), 2);
        assert_eq!(Mode::Analog.bits(), 3);
        assert_eq!(Mode::Input.output_type(), None);
        assert_eq!(
            Mode::Alternate(OutputType::OpenDrain).output_type(),
            Some(OutputType::OpenDrain)
        );
    }

    #[test]
    fn test_validation() {
        assert_eq!(Speed::from_bits(3), Ok(Speed::VeryHigh));
        assert_eq!(Speed::from_bits(4), Err(GpioError::InvalidSpeed));
        assert!(AlternateFunction::new(15).is_ok());
        assert_eq!(
            AlternateFunction::new(16),
            Err(GpioError::InvalidAlternateFunction)
        );
    }
}
