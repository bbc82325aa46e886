//! EXTI line numbers and the interrupt vectors that serve them

use core::fmt;
use core::ops::RangeInclusive;
use crate::{GpioError, GpioResult, Pin};

/// Number of external-interrupt lines wired to GPIO pins
pub const LINE_COUNT: usize = 16;

/// One of the sixteen EXTI lines.
///
/// The line number is the pin index: `PA3`, `PB3` and `PC3` all share line 3
/// and at most one of them may be subscribed at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Line(u8);

impl Line {
    /// Create a line from its number
    pub fn new(number: u8) -> GpioResult<Self> {
        if usize::from(number) < LINE_COUNT {
            Ok(Line(number))
        } else {
            Err(GpioError::InvalidLine)
        }
    }

    /// Line a pin aliases onto
    pub fn of(pin: Pin) -> GpioResult<Self> {
        Self::new(pin.index())
    }

    /// Line number, 0..=15
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Line number as a table index
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Single-bit mask of this line in the EXTI registers
    pub const fn mask(self) -> u32 {
        1 << self.0
    }

    /// Vector that fires for this line
    pub const fn vector(self) -> Vector {
        Vector::of(self)
    }

    /// Iterate over all lines in ascending order
    pub fn all() -> impl Iterator<Item = Line> {
        (0..LINE_COUNT as u8).map(Line)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EXTI{}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Line {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "EXTI{}", self.0);
    }
}

/// Physical interrupt vectors of the EXTI controller.
///
/// Lines 0 to 4 have a vector each; lines 5..=9 and 10..=15 are coalesced
/// onto one shared vector per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vector {
    Exti0,
    Exti1,
    Exti2,
    Exti3,
    Exti4,
    Exti9_5,
    Exti15_10,
}

impl Vector {
    /// All vectors, in the order of the lines they cover
    pub const ALL: [Vector; 7] = [
        Vector::Exti0,
        Vector::Exti1,
        Vector::Exti2,
        Vector::Exti3,
        Vector::Exti4,
        Vector::Exti9_5,
        Vector::Exti15_10,
    ];

    /// Vector serving a line
    pub const fn of(line: Line) -> Self {
        match line.0 {
            0 => Vector::Exti0,
            1 => Vector::Exti1,
            2 => Vector::Exti2,
            3 => Vector::Exti3,
            4 => Vector::Exti4,
            5..=9 => Vector::Exti9_5,
            _ => Vector::Exti15_10,
        }
    }

    /// Line numbers covered by this vector, ascending
    pub const fn range(self) -> RangeInclusive<u8> {
        match self {
            Vector::Exti0 => 0..=0,
            Vector::Exti1 => 1..=1,
            Vector::Exti2 => 2..=2,
            Vector::Exti3 => 3..=3,
            Vector::Exti4 => 4..=4,
            Vector::Exti9_5 => 5..=9,
            Vector::Exti15_10 => 10..=15,
        }
    }

    /// Lines covered by this vector, ascending
    pub fn lines(self) -> impl Iterator<Item = Line> {
        self.range().map(Line)
    }

    /// Whether more than one line shares this vector
    pub const fn is_shared(self) -> bool {
        matches!(self, Vector::Exti9_5 | Vector::Exti15_10)
    }

    /// Position in [`Vector::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Interrupt name as used by device crates and `cortex-m-rt`
    pub const fn interrupt_name(self) -> &'static str {
        match self {
            Vector::Exti0 => "EXTI0",
            Vector::Exti1 => "EXTI1",
            Vector::Exti2 => "EXTI2",
            Vector::Exti3 => "EXTI3",
            Vector::Exti4 => "EXTI4",
            Vector::Exti9_5 => "EXTI9_5",
            Vector::Exti15_10 => "EXTI15_10",
        }
    }

    /// CMSIS name of the vector table entry serving this vector
    pub const fn handler_name(self) -> &'static str {
        match self {
            Vector::Exti0 => "EXTI0_IRQHandler",
            Vector::Exti1 => "EXTI1_IRQHandler",
            Vector::Exti2 => "EXTI2_IRQHandler",
            Vector::Exti3 => "EXTI3_IRQHandler",
            Vector::Exti4 => "EXTI4_IRQHandler",
            Vector::Exti9_5 => "EXTI9_5_IRQHandler",
            Vector::Exti15_10 => "EXTI15_10_IRQHandler",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Vector {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.interrupt_name());
    }
}
