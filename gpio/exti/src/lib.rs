#![cfg_attr(not(feature = "std"), no_std)]

//! # GPIO EXTI
//!
//! Exclusive subscriptions to the sixteen external-interrupt lines and the
//! interrupt-side dispatcher that demultiplexes shared vectors.
//!
//! All pins with the same index share one EXTI line, so at most one of them
//! may be subscribed at a time. [`Exti::subscribe`] claims the line with an
//! atomic compare-and-set and arms a callback; [`Exti::unsubscribe`] masks
//! the line, drains its pending flag and only then frees the slot. The
//! vector handlers generated by [`exti_vectors!`] call [`Exti::on_vector`],
//! which checks every line of the vector and runs the callbacks of those
//! that are pending, in ascending line order.
//!
//! ```ignore
//! use gpio_core::{pin, EdgeSensitivity};
//! use gpio_exti::{Context, Exti};
//!
//! static EXTI: Exti<MyRouter> = Exti::new(MyRouter::new());
//! gpio_exti::exti_vectors!(EXTI);
//!
//! fn on_button(_: Context) { /* interrupt context */ }
//!
//! EXTI.subscribe(pin!(C, 13), EdgeSensitivity::FALLING, Some(on_button), Context::NULL)?;
//! ```

#[cfg(test)]
extern crate std;

pub mod callback;
mod dispatch;
pub mod driver;
pub mod table;
mod vectors;

#[cfg(any(test, feature = "sim"))]
pub mod sim;

pub use callback::{Callback, Context, Handler};
pub use driver::{Exti, SubscribeError};
pub use gpio_core::{EdgeSensitivity, Line, Pin, PortId, Vector};
pub use table::SubscriptionTable;

#[cfg(test)]
mod tests;
