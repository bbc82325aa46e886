//! Pin identity

use core::fmt;
use crate::{GpioError, GpioResult, Line};

/// Number of ports addressable by the EXTI line multiplexer (4-bit field)
pub const MAX_PORTS: u8 = 16;

/// Identity of a GPIO port (A = 0, B = 1, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PortId(u8);

impl PortId {
    pub const A: PortId = PortId(0);
    pub const B: PortId = PortId(1);
    pub const C: PortId = PortId(2);
    pub const D: PortId = PortId(3);
    pub const E: PortId = PortId(4);
    pub const F: PortId = PortId(5);
    pub const G: PortId = PortId(6);
    pub const H: PortId = PortId(7);
    pub const I: PortId = PortId(8);
    pub const J: PortId = PortId(9);
    pub const K: PortId = PortId(10);

    /// Create a port identity from its index
    pub fn new(index: u8) -> GpioResult<Self> {
        if index >= MAX_PORTS {
            Err(GpioError::InvalidPort)
        } else {
            Ok(PortId(index))
        }
    }

    /// Port index as written into the line multiplexer
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Port letter, `'A'` for index 0
    pub const fn letter(self) -> char {
        (b'A' + self.0) as char
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.letter())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PortId {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "P{}", self.letter());
    }
}

/// A physical pin: port plus pin number within the port.
///
/// Construction does not validate the index; [`Pin::line`] does, so pins
/// built from external input are rejected where they are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pin {
    port: PortId,
    index: u8,
}

impl Pin {
    /// Create a pin identity
    pub const fn new(port: PortId, index: u8) -> Self {
        Self { port, index }
    }

    /// Port this pin belongs to
    pub const fn port(self) -> PortId {
        self.port
    }

    /// Pin number within its port
    pub const fn index(self) -> u8 {
        self.index
    }

    /// EXTI line this pin aliases onto
    pub fn line(self) -> GpioResult<Line> {
        Line::of(self)
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}{}", self.port.letter(), self.index)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Pin {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "P{}{}", self.port.letter(), self.index);
    }
}

/// Macro to name a pin by port letter and index
///
/// ```
/// use gpio_core::{pin, Pin, PortId};
/// assert_eq!(pin!(A, 3), Pin::new(PortId::A, 3));
/// ```
#[macro_export]
macro_rules! pin {
    ($port:ident, $index:literal) => {
        $crate::Pin::new($crate::PortId::$port, $index)
    };
}
