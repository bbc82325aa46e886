//! Exclusive line subscriptions

use core::fmt;

use gpio_core::{EdgeSensitivity, GpioError, Line, LineRouter, Pin};
use log::debug;

use crate::callback::{Context, Handler};
use crate::table::SubscriptionTable;

/// Reasons a subscription can be refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeError {
    /// The pin does not map to an EXTI line
    InvalidLine,
    /// Another pin (or this one) already holds the line
    AlreadySubscribed,
}

impl fmt::Display for SubscribeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubscribeError::InvalidLine => write!(f, "Pin does not map to an EXTI line"),
            SubscribeError::AlreadySubscribed => write!(f, "EXTI line already subscribed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SubscribeError {}

#[cfg(feature = "defmt")]
impl defmt::Format for SubscribeError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SubscribeError::InvalidLine => defmt::write!(fmt, "InvalidLine"),
            SubscribeError::AlreadySubscribed => defmt::write!(fmt, "AlreadySubscribed"),
        }
    }
}

impl From<SubscribeError> for GpioError {
    fn from(err: SubscribeError) -> Self {
        match err {
            SubscribeError::InvalidLine => GpioError::InvalidLine,
            SubscribeError::AlreadySubscribed => GpioError::AlreadySubscribed,
        }
    }
}

/// EXTI subscription manager and dispatcher.
///
/// Owns the subscription table and the router that drives the interrupt
/// controller. Intended to be placed in a `static` so that the vector
/// handlers generated by [`exti_vectors!`](crate::exti_vectors) can reach it.
pub struct Exti<R> {
    pub(crate) table: SubscriptionTable,
    pub(crate) router: R,
}

impl<R> Exti<R> {
    /// Create a manager with every line free
    pub const fn new(router: R) -> Self {
        Self {
            table: SubscriptionTable::new(),
            router,
        }
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn table(&self) -> &SubscriptionTable {
        &self.table
    }
}

impl<R: LineRouter> Exti<R> {
    /// Attach `handler` to the selected edges of `pin`.
    ///
    /// Claims the pin's line, configures the trigger and arms the callback.
    /// Returns once the callback can fire; from then on `handler(context)`
    /// runs in interrupt context on every configured edge until
    /// [`Exti::unsubscribe`]. A `None` handler still claims the line.
    pub fn subscribe(
        &self,
        pin: Pin,
        edges: EdgeSensitivity,
        handler: Option<Handler>,
        context: Context,
    ) -> Result<(), SubscribeError> {
        let line = pin.line().map_err(|_| SubscribeError::InvalidLine)?;

        if !self.table.claim(line, pin.port()) {
            debug!("{}: {} already held by {:?}", pin, line, self.table.owner(line));
            return Err(SubscribeError::AlreadySubscribed);
        }

        self.router.route_line_to_port(line, pin.port());
        self.router.set_edge_sensitivity(line, edges);
        self.router.disable_event(line);
        // Drop edges latched before the line was ours
        self.router.clear_pending(line);

        // The line is still masked, so no dispatch can observe a claimed
        // slot without its callback.
        self.table.arm(line, handler, context);
        self.router.unmask_line(line);

        debug!(
            "{}: subscribed on {} (rising: {}, falling: {})",
            pin, line, edges.rising, edges.falling
        );
        Ok(())
    }

    /// Detach whatever `pin` subscribed.
    ///
    /// Does nothing if the pin's port does not hold the line, so teardown
    /// paths may call it unconditionally. Concurrent calls for the same pin
    /// release the line once.
    pub fn unsubscribe(&self, pin: Pin) {
        let Ok(line) = pin.line() else {
            return;
        };

        if !self.table.begin_release(line, pin.port()) {
            return;
        }

        self.release(line);
        debug!("{}: released {}", pin, line);
    }

    /// Whether `pin` currently holds its line
    pub fn is_subscribed(&self, pin: Pin) -> bool {
        pin.line()
            .map(|line| self.table.is_owned_by(line, pin.port()))
            .unwrap_or(false)
    }

    /// Release protocol, run only by the caller that won
    /// [`SubscriptionTable::begin_release`]. Once the owner is cleared no
    /// callback of the old subscription can still be started.
    fn release(&self, line: Line) {
        self.router.mask_line(line);
        // An edge may have latched just before the mask took effect
        self.router.clear_pending(line);
        self.table.disarm(line);
        self.table.finish_release(line);
    }
}
