//! NVIC setup for the EXTI vectors

use cortex_m::interrupt::InterruptNumber;
use cortex_m::peripheral::NVIC;
use gpio_core::Vector;

use crate::config::Stm32Config;

/// A device interrupt number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Irq(pub u16);

// SAFETY: the numbers come from the device description and name device
// interrupts only.
unsafe impl InterruptNumber for Irq {
    fn number(self) -> u16 {
        self.0
    }
}

/// Interrupt number of `vector` on the configured device
pub const fn irq(config: &Stm32Config, vector: Vector) -> Irq {
    Irq(config.irq(vector))
}

/// Set the priority of every EXTI vector and unmask it.
///
/// # Safety
///
/// Unmasking may break critical sections based on masking; call during
/// initialisation, after the vector handlers are bound.
pub unsafe fn enable_vectors(nvic: &mut NVIC, config: &Stm32Config) {
    for vector in Vector::ALL {
        let irq = irq(config, vector);
        nvic.set_priority(irq, config.priority);
        NVIC::unmask(irq);
    }
}

/// Mask every EXTI vector
pub fn disable_vectors(config: &Stm32Config) {
    for vector in Vector::ALL {
        NVIC::mask(irq(config, vector));
    }
}
