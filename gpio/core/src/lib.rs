#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

//! # GPIO Core
//!
//! Value types and collaborator traits shared by the EXTI subscription layer
//! and the hardware ports.
//!
//! A [`Pin`] names a physical pin as port plus index. Every pin index aliases
//! onto one of sixteen external-interrupt [`Line`]s, and each line is served
//! by one of seven interrupt [`Vector`]s. The traits in [`router`] describe
//! the register-level primitives a port has to provide.

use core::fmt;

pub mod config;
pub mod edge;
pub mod line;
pub mod pin;
pub mod router;

pub use config::{AlternateFunction, Mode, OutputType, Pull, Speed};
pub use edge::{Edge, EdgeSensitivity};
pub use line::{Line, Vector, LINE_COUNT};
pub use pin::{Pin, PortId};
pub use router::{ClockGate, LineRouter, PinConfigurator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type used throughout the GPIO crates
pub type GpioResult<T> = Result<T, GpioError>;

/// Error types for GPIO and EXTI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// Pin index does not map to one of the sixteen EXTI lines
    InvalidLine,
    /// Port index is outside the range the device provides
    InvalidPort,
    /// The EXTI line is already owned by another pin
    AlreadySubscribed,
    /// Alternate function number is not valid for the device
    InvalidAlternateFunction,
    /// Output speed value is not valid for the device
    InvalidSpeed,
    /// The peripheral clock could not be enabled
    ClockDisabled,
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpioError::InvalidLine => write!(f, "Pin does not map to an EXTI line"),
            GpioError::InvalidPort => write!(f, "Invalid GPIO port"),
            GpioError::AlreadySubscribed => write!(f, "EXTI line already subscribed"),
            GpioError::InvalidAlternateFunction => write!(f, "Invalid alternate function"),
            GpioError::InvalidSpeed => write!(f, "Invalid output speed"),
            GpioError::ClockDisabled => write!(f, "Peripheral clock could not be enabled"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GpioError {}

#[cfg(feature = "defmt")]
impl defmt::Format for GpioError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            GpioError::InvalidLine => defmt::write!(fmt, "InvalidLine"),
            GpioError::InvalidPort => defmt::write!(fmt, "InvalidPort"),
            GpioError::AlreadySubscribed => defmt::write!(fmt, "AlreadySubscribed"),
            GpioError::InvalidAlternateFunction => defmt::write!(fmt, "InvalidAlternateFunction"),
            GpioError::InvalidSpeed => defmt::write!(fmt, "InvalidSpeed"),
            GpioError::ClockDisabled => defmt::write!(fmt, "ClockDisabled"),
        }
    }
}
