//! Device description backed by leaked host memory

#![allow(dead_code)]

use std::ptr;

use gpio_port_stm32::{ClockBit, ExtiLayout, Stm32Config};

pub const EXTI: usize = 0x000;
pub const SYSCFG: usize = 0x100;
pub const RCC: usize = 0x180;
pub const GPIO: usize = 0x200;

/// RCC register with one enable bit per port
pub const PORT_CLOCKS: usize = RCC;
/// RCC register holding the SYSCFG enable bit
pub const SYSCFG_CLOCK: usize = RCC + 0x04;
pub const SYSCFG_CLOCK_BIT: u8 = 14;

pub const GPIO_STRIDE: usize = 0x40;
pub const PORT_COUNT: u8 = 4;

const WORDS: usize = 256;

/// Zeroed memory standing in for the EXTI, SYSCFG, RCC and GPIO blocks.
///
/// Plain memory keeps the last value written, so a write-1-to-clear
/// pending register reads back the bits that were written rather than 0.
pub struct FakeDevice {
    base: usize,
    pub config: Stm32Config,
}

impl FakeDevice {
    pub fn new(layout: ExtiLayout) -> Self {
        let memory: &'static mut [u32; WORDS] = Box::leak(Box::new([0u32; WORDS]));
        let base = memory.as_mut_ptr() as usize;

        let config = Stm32Config::builder()
            .name("fake")
            .exti(base + EXTI, layout)
            .syscfg(base + SYSCFG, ClockBit::new(base + SYSCFG_CLOCK, SYSCFG_CLOCK_BIT))
            .gpio(base + GPIO, GPIO_STRIDE, PORT_COUNT, base + PORT_CLOCKS)
            .build();

        Self { base, config }
    }

    pub fn read(&self, offset: usize) -> u32 {
        unsafe { ptr::read_volatile((self.base + offset) as *const u32) }
    }

    pub fn write(&self, offset: usize, value: u32) {
        unsafe { ptr::write_volatile((self.base + offset) as *mut u32, value) }
    }

    pub fn exti(&self, register: usize) -> u32 {
        self.read(EXTI + register)
    }

    pub fn set_exti(&self, register: usize, value: u32) {
        self.write(EXTI + register, value)
    }

    /// `EXTICR1..4`, numbered from 0
    pub fn exticr(&self, index: usize) -> u32 {
        self.read(SYSCFG + 0x08 + 4 * index)
    }

    pub fn gpio(&self, port: usize, register: usize) -> u32 {
        self.read(GPIO + port * GPIO_STRIDE + register)
    }
}
