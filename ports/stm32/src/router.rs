//! EXTI line router over the SYSCFG multiplexer and EXTI registers

use gpio_core::{ClockGate, EdgeSensitivity, Line, LineRouter, PortId};

use crate::clock::Stm32Clocks;
use crate::config::{Stm32Config, EXTICR_OFFSET};
use crate::registers::{with_field, Reg};

/// Register-level [`LineRouter`] for STM32 devices.
///
/// The trigger, mask and multiplexer registers are shared by all sixteen
/// lines, so every read-modify-write runs in a critical section. The
/// pending register is write-1-to-clear and needs none.
#[derive(Debug, Clone, Copy)]
pub struct Stm32Router {
    config: Stm32Config,
    clocks: Stm32Clocks,
}

impl Stm32Router {
    /// Create a router for the device described by `config`.
    ///
    /// # Safety
    ///
    /// The addresses in `config` must be the device's EXTI, SYSCFG and RCC
    /// register blocks (or memory owned by the caller for the lifetime of
    /// the router).
    pub const unsafe fn new(config: Stm32Config) -> Self {
        Self {
            config,
            clocks: Stm32Clocks::new(config),
        }
    }

    pub const fn config(&self) -> &Stm32Config {
        &self.config
    }

    fn exti(&self, offset: usize) -> Reg {
        // SAFETY: address validity is the contract of `Stm32Router::new`.
        unsafe { Reg::at(self.config.exti_base + offset) }
    }

    fn exticr(&self, line: Line) -> Reg {
        let offset = EXTICR_OFFSET + 4 * (line.index() / 4);
        // SAFETY: address validity is the contract of `Stm32Router::new`.
        unsafe { Reg::at(self.config.syscfg_base + offset) }
    }

    fn update(&self, register: Reg, line: Line, enabled: bool) {
        critical_section::with(|_| {
            if enabled {
                register.set_bits(line.mask());
            } else {
                register.clear_bits(line.mask());
            }
        });
    }
}

impl LineRouter for Stm32Router {
    fn route_line_to_port(&self, line: Line, port: PortId) {
        self.clocks.enable_line_mux();
        let register = self.exticr(line);
        let position = u32::from(line.number() % 4);
        critical_section::with(|_| {
            register.modify(|value| with_field(value, position, 4, u32::from(port.index())));
        });
    }

    fn set_edge_sensitivity(&self, line: Line, edges: EdgeSensitivity) {
        let layout = self.config.exti_layout;
        self.update(self.exti(layout.rtsr), line, edges.rising);
        self.update(self.exti(layout.ftsr), line, edges.falling);
    }

    fn mask_line(&self, line: Line) {
        self.update(self.exti(self.config.exti_layout.imr), line, false);
    }

    fn unmask_line(&self, line: Line) {
        self.update(self.exti(self.config.exti_layout.imr), line, true);
    }

    fn clear_pending(&self, line: Line) {
        self.exti(self.config.exti_layout.pr).write(line.mask());
    }

    fn is_pending(&self, line: Line) -> bool {
        self.exti(self.config.exti_layout.pr).read() & line.mask() != 0
    }

    fn disable_event(&self, line: Line) {
        self.update(self.exti(self.config.exti_layout.emr), line, false);
    }
}
