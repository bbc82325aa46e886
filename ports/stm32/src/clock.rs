//! RCC clock gating

use gpio_core::{ClockGate, GpioError, GpioResult, PortId};
use log::warn;

use crate::config::{ClockBit, Stm32Config};
use crate::registers::Reg;

/// Clock gate over the RCC enable registers named in a [`Stm32Config`]
#[derive(Debug, Clone, Copy)]
pub struct Stm32Clocks {
    config: Stm32Config,
}

impl Stm32Clocks {
    /// # Safety
    ///
    /// The RCC addresses in `config` must be valid for the lifetime of the
    /// gate.
    pub const unsafe fn new(config: Stm32Config) -> Self {
        Self { config }
    }

    /// Set an enable bit and read it back
    fn enable(&self, clock: ClockBit) -> bool {
        // SAFETY: address validity is the contract of `Stm32Clocks::new`.
        let register = unsafe { Reg::at(clock.register) };
        let mask = 1u32 << clock.bit;
        critical_section::with(|_| register.set_bits(mask));
        register.read() & mask != 0
    }
}

impl ClockGate for Stm32Clocks {
    fn enable_port(&self, port: PortId) -> GpioResult<()> {
        if port.index() >= self.config.port_count {
            return Err(GpioError::InvalidPort);
        }
        let clock = ClockBit::new(self.config.port_clock_register, port.index());
        if self.enable(clock) {
            Ok(())
        } else {
            warn!("{}: clock enable did not stick", port);
            Err(GpioError::ClockDisabled)
        }
    }

    fn enable_line_mux(&self) {
        if !self.enable(self.config.syscfg_clock) {
            warn!("SYSCFG clock enable did not stick");
        }
    }
}
