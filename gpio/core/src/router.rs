//! Collaborator traits implemented by hardware ports
//!
//! The subscription layer never touches registers itself. It drives the
//! interrupt controller through [`LineRouter`], whose operations are plain
//! register writes and therefore infallible.

use crate::{AlternateFunction, EdgeSensitivity, GpioResult, Line, Mode, Pin, PortId, Pull, Speed};

/// Register-level access to the external interrupt controller.
///
/// Methods take `&self` because the same router is driven from application
/// threads and from interrupt context. Implementations must keep each call
/// atomic with respect to other lines sharing the same register.
pub trait LineRouter: Sync {
    /// Select which port drives `line` through the line multiplexer
    fn route_line_to_port(&self, line: Line, port: PortId);

    /// Enable or disable the rising/falling edge triggers of `line`
    fn set_edge_sensitivity(&self, line: Line, edges: EdgeSensitivity);

    /// Stop `line` from raising interrupts
    fn mask_line(&self, line: Line);

    /// Allow `line` to raise interrupts
    fn unmask_line(&self, line: Line);

    /// Clear the latched pending flag of `line`
    fn clear_pending(&self, line: Line);

    /// Whether `line` has latched a trigger that was not cleared yet
    fn is_pending(&self, line: Line) -> bool;

    /// Stop `line` from generating wake-up events.
    ///
    /// Subscribed lines run in interrupt mode only.
    fn disable_event(&self, _line: Line) {}
}

/// Electrical configuration of a pin
pub trait PinConfigurator {
    /// Configure mode, pull resistor, slew speed and alternate function.
    ///
    /// Leaves the external interrupt state of the pin untouched.
    fn configure(
        &self,
        pin: Pin,
        mode: Mode,
        pull: Pull,
        speed: Speed,
        alternate: AlternateFunction,
    ) -> GpioResult<()>;
}

/// Peripheral clock gating
pub trait ClockGate {
    /// Enable the clock of a GPIO port
    fn enable_port(&self, port: PortId) -> GpioResult<()>;

    /// Enable the clock of the line multiplexer (SYSCFG)
    fn enable_line_mux(&self);
}
