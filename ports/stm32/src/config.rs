//! Device description
//!
//! Register block addresses, the EXTI register layout, clock-enable bits and
//! NVIC numbering differ between STM32 families. [`Stm32Config`] gathers
//! them; presets cover the common families and the builder adjusts them.

use gpio_core::Vector;

/// Offset of `EXTICR1` within the SYSCFG block. `EXTICR2..4` follow.
pub const EXTICR_OFFSET: usize = 0x08;

/// Offsets of the GPIO port registers
pub mod gpio_offsets {
    pub const MODER: usize = 0x00;
    pub const OTYPER: usize = 0x04;
    pub const OSPEEDR: usize = 0x08;
    pub const PUPDR: usize = 0x0C;
    pub const AFRL: usize = 0x20;
    pub const AFRH: usize = 0x24;
}

/// Offsets of the EXTI registers used for GPIO lines 0..=15
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtiLayout {
    /// Interrupt mask
    pub imr: usize,
    /// Event mask
    pub emr: usize,
    /// Rising trigger selection
    pub rtsr: usize,
    /// Falling trigger selection
    pub ftsr: usize,
    /// Pending (write 1 to clear)
    pub pr: usize,
}

impl ExtiLayout {
    /// F0, F1, F2, F3, F4, F7, L1
    pub const CLASSIC: Self = Self {
        imr: 0x00,
        emr: 0x04,
        rtsr: 0x08,
        ftsr: 0x0C,
        pr: 0x14,
    };

    /// H7, CPU1 view (`CPUIMR1`, `CPUEMR1`, `CPUPR1`)
    pub const H7: Self = Self {
        imr: 0x80,
        emr: 0x84,
        rtsr: 0x00,
        ftsr: 0x04,
        pr: 0x88,
    };
}

/// A clock-enable bit in an RCC register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockBit {
    pub register: usize,
    pub bit: u8,
}

impl ClockBit {
    pub const fn new(register: usize, bit: u8) -> Self {
        Self { register, bit }
    }
}

/// Description of the target device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stm32Config {
    pub name: &'static str,
    pub exti_base: usize,
    pub exti_layout: ExtiLayout,
    pub syscfg_base: usize,
    pub syscfg_clock: ClockBit,
    pub gpio_base: usize,
    pub gpio_stride: usize,
    pub port_count: u8,
    /// RCC register holding one enable bit per port, bit n = port n
    pub port_clock_register: usize,
    /// NVIC interrupt numbers, indexed by [`Vector::index`]
    pub irqs: [u16; 7],
    /// NVIC priority applied to every EXTI vector
    pub priority: u8,
}

/// EXTI vector interrupt numbers shared by F4 and H7
const EXTI_IRQS: [u16; 7] = [6, 7, 8, 9, 10, 23, 40];

impl Stm32Config {
    /// STM32F4 family (RCC at `0x4002_3800`)
    pub const STM32F4: Self = Self {
        name: "STM32F4",
        exti_base: 0x4001_3C00,
        exti_layout: ExtiLayout::CLASSIC,
        syscfg_base: 0x4001_3800,
        // RCC_APB2ENR.SYSCFGEN
        syscfg_clock: ClockBit::new(0x4002_3844, 14),
        gpio_base: 0x4002_0000,
        gpio_stride: 0x400,
        port_count: 11,
        // RCC_AHB1ENR
        port_clock_register: 0x4002_3830,
        irqs: EXTI_IRQS,
        priority: 0x80,
    };

    /// STM32H7 family, CPU1 (RCC at `0x5802_4400`)
    pub const STM32H7: Self = Self {
        name: "STM32H7",
        exti_base: 0x5800_0000,
        exti_layout: ExtiLayout::H7,
        syscfg_base: 0x5800_0400,
        // RCC_APB4ENR.SYSCFGEN
        syscfg_clock: ClockBit::new(0x5802_44F4, 1),
        gpio_base: 0x5802_0000,
        gpio_stride: 0x400,
        port_count: 11,
        // RCC_AHB4ENR
        port_clock_register: 0x5802_44E0,
        irqs: EXTI_IRQS,
        priority: 0x80,
    };

    /// Start a configuration from the F4 preset
    pub fn builder() -> Stm32ConfigBuilder {
        Stm32ConfigBuilder::from(Self::STM32F4)
    }

    /// NVIC interrupt number of `vector`
    pub const fn irq(&self, vector: Vector) -> u16 {
        self.irqs[vector.index()]
    }

    /// Base address of the register block of port `index`
    pub const fn port_base(&self, index: u8) -> usize {
        self.gpio_base + self.gpio_stride * index as usize
    }
}

impl Default for Stm32Config {
    fn default() -> Self {
        Self::STM32F4
    }
}

/// Builder for [`Stm32Config`]
#[derive(Debug, Clone)]
pub struct Stm32ConfigBuilder {
    config: Stm32Config,
}

impl From<Stm32Config> for Stm32ConfigBuilder {
    fn from(config: Stm32Config) -> Self {
        Self { config }
    }
}

impl Stm32ConfigBuilder {
    /// Sets the device name.
    pub fn name(mut self, name: &'static str) -> Self {
        self.config.name = name;
        self
    }

    /// Sets the EXTI block address and register layout.
    pub fn exti(mut self, base: usize, layout: ExtiLayout) -> Self {
        self.config.exti_base = base;
        self.config.exti_layout = layout;
        self
    }

    /// Sets the SYSCFG block address and its clock-enable bit.
    pub fn syscfg(mut self, base: usize, clock: ClockBit) -> Self {
        self.config.syscfg_base = base;
        self.config.syscfg_clock = clock;
        self
    }

    /// Sets the GPIO port blocks.
    ///
    /// # Parameters
    /// - `base`: address of port A
    /// - `stride`: distance between consecutive ports
    /// - `count`: number of ports present
    /// - `clock_register`: RCC register with one enable bit per port
    pub fn gpio(mut self, base: usize, stride: usize, count: u8, clock_register: usize) -> Self {
        self.config.gpio_base = base;
        self.config.gpio_stride = stride;
        self.config.port_count = count;
        self.config.port_clock_register = clock_register;
        self
    }

    /// Sets the NVIC interrupt number of one vector.
    pub fn irq(mut self, vector: Vector, number: u16) -> Self {
        self.config.irqs[vector.index()] = number;
        self
    }

    /// Sets the NVIC priority of the EXTI vectors.
    pub fn priority(mut self, priority: u8) -> Self {
        self.config.priority = priority;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Stm32Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(Stm32Config::STM32F4.irq(Vector::Exti9_5), 23);
        assert_eq!(Stm32Config::STM32F4.irq(Vector::Exti15_10), 40);
        assert_eq!(Stm32Config::STM32F4.port_base(2), 0x4002_0800);
        assert_eq!(Stm32Config::STM32H7.exti_layout, ExtiLayout::H7);
        assert_eq!(Stm32Config::default(), Stm32Config::STM32F4);
    }

    #[test]
    fn test_builder() {
        let config = Stm32Config::builder()
            .name("custom")
            .exti(0x1000, ExtiLayout::H7)
            .syscfg(0x2000, ClockBit::new(0x3000, 0))
            .gpio(0x4000, 0x100, 3, 0x3004)
            .irq(Vector::Exti0, 99)
            .priority(0x20)
            .build();

        assert_eq!(config.name, "custom");
        assert_eq!(config.exti_base, 0x1000);
        assert_eq!(config.port_base(1), 0x4100);
        assert_eq!(config.irq(Vector::Exti0), 99);
        assert_eq!(config.irq(Vector::Exti1), 7);
        assert_eq!(config.priority, 0x20);
    }
}
