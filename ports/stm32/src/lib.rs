#![cfg_attr(not(feature = "std"), no_std)]

//! # STM32 port
//!
//! Register-level implementations of the `gpio-core` collaborator traits for
//! STM32 devices: the SYSCFG line multiplexer and EXTI registers
//! ([`Stm32Router`]), GPIO mode/pull/speed/alternate-function fields
//! ([`Stm32Pins`]), RCC clock gating ([`Stm32Clocks`]) and NVIC setup of the
//! seven EXTI vectors ([`enable_vectors`]).
//!
//! ```ignore
//! use gpio_port_stm32::{Stm32Config, Stm32Exti, Stm32Router};
//!
//! static EXTI: Stm32Exti = Stm32Exti::new(unsafe { Stm32Router::new(Stm32Config::STM32F4) });
//! gpio_exti::exti_vectors!(EXTI);
//!
//! let mut cp = cortex_m::Peripherals::take().unwrap();
//! unsafe { gpio_port_stm32::enable_vectors(&mut cp.NVIC, EXTI.router().config()) };
//! ```

pub mod clock;
pub mod config;
pub mod nvic;
pub mod pins;
pub mod registers;
pub mod router;

pub use clock::Stm32Clocks;
pub use config::{ClockBit, ExtiLayout, Stm32Config, Stm32ConfigBuilder};
pub use nvic::{disable_vectors, enable_vectors, irq, Irq};
pub use pins::Stm32Pins;
pub use router::Stm32Router;

/// EXTI manager bound to the STM32 register router
pub type Stm32Exti = gpio_exti::Exti<Stm32Router>;
