//! Electrical pin configuration
//!
//! Only the mode, output type, speed, pull and alternate-function fields of
//! the pin are written; the EXTI routing of the pin is left alone so that a
//! reconfigured input keeps its subscription.

use gpio_core::{
    AlternateFunction, ClockGate, GpioError, GpioResult, Mode, Pin, PinConfigurator, Pull, Speed,
};

use crate::clock::Stm32Clocks;
use crate::config::{gpio_offsets, Stm32Config};
use crate::registers::{with_field, Reg};

/// [`PinConfigurator`] over the GPIO port register blocks
#[derive(Debug, Clone, Copy)]
pub struct Stm32Pins {
    config: Stm32Config,
    clocks: Stm32Clocks,
}

impl Stm32Pins {
    /// # Safety
    ///
    /// The GPIO and RCC addresses in `config` must be valid for the lifetime
    /// of the configurator.
    pub const unsafe fn new(config: Stm32Config) -> Self {
        Self {
            config,
            clocks: Stm32Clocks::new(config),
        }
    }

    fn register(&self, pin: Pin, offset: usize) -> Reg {
        let base = self.config.port_base(pin.port().index());
        // SAFETY: address validity is the contract of `Stm32Pins::new`.
        unsafe { Reg::at(base + offset) }
    }
}

impl PinConfigurator for Stm32Pins {
    fn configure(
        &self,
        pin: Pin,
        mode: Mode,
        pull: Pull,
        speed: Speed,
        alternate: AlternateFunction,
    ) -> GpioResult<()> {
        if pin.index() >= 16 {
            return Err(GpioError::InvalidLine);
        }
        self.clocks.enable_port(pin.port())?;

        let position = u32::from(pin.index());

        critical_section::with(|_| {
            if mode.is_alternate() {
                let afr = if position < 8 {
                    gpio_offsets::AFRL
                } else {
                    gpio_offsets::AFRH
                };
                self.register(pin, afr).modify(|value| {
                    with_field(value, position % 8, 4, u32::from(alternate.number()))
                });
            }

            self.register(pin, gpio_offsets::MODER)
                .modify(|value| with_field(value, position, 2, mode.bits()));

            if let Some(output_type) = mode.output_type() {
                self.register(pin, gpio_offsets::OSPEEDR)
                    .modify(|value| with_field(value, position, 2, speed.bits()));
                self.register(pin, gpio_offsets::OTYPER)
                    .modify(|value| with_field(value, position, 1, output_type.bits()));
            }

            self.register(pin, gpio_offsets::PUPDR)
                .modify(|value| with_field(value, position, 2, pull.bits()));
        });

        Ok(())
    }
}
