//! Host model of the EXTI peripheral
//!
//! [`SimRouter`] keeps the interrupt controller's registers in atomics and
//! latches pending flags the way the hardware does: an edge on a routed pin
//! sets the line's pending bit if its trigger is enabled, whether or not the
//! line is masked. Every router call is also appended to a bounded journal
//! so tests can check the order of register operations.

use core::cell::RefCell;
use core::sync::atomic::{AtomicU32, AtomicU8, Ordering};

use critical_section::Mutex;
use gpio_core::{Edge, EdgeSensitivity, Line, LineRouter, Pin, PortId, Vector, LINE_COUNT};

use crate::driver::Exti;

/// Number of router operations the journal retains
pub const JOURNAL_CAPACITY: usize = 64;

/// Owner value of an unrouted line. Routed lines store `port index + 1`.
const UNROUTED: u8 = 0;

/// A router call recorded by [`SimRouter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterOp {
    Route(Line, PortId),
    Edges(Line, EdgeSensitivity),
    Mask(Line),
    Unmask(Line),
    ClearPending(Line),
    DisableEvent(Line),
}

/// Simulated EXTI and line multiplexer registers
pub struct SimRouter {
    imr: AtomicU32,
    emr: AtomicU32,
    rtsr: AtomicU32,
    ftsr: AtomicU32,
    pr: AtomicU32,
    routes: [AtomicU8; LINE_COUNT],
    journal: Mutex<RefCell<heapless::Vec<RouterOp, JOURNAL_CAPACITY>>>,
}

impl SimRouter {
    #[allow(clippy::declare_interior_mutable_const)]
    const UNROUTED_LINE: AtomicU8 = AtomicU8::new(UNROUTED);

    /// Create a controller in its reset state: every line masked, no
    /// triggers, nothing pending. The event mask resets to all-ones so that
    /// event disabling is observable.
    pub const fn new() -> Self {
        Self {
            imr: AtomicU32::new(0),
            emr: AtomicU32::new(u32::MAX),
            rtsr: AtomicU32::new(0),
            ftsr: AtomicU32::new(0),
            pr: AtomicU32::new(0),
            routes: [Self::UNROUTED_LINE; LINE_COUNT],
            journal: Mutex::new(RefCell::new(heapless::Vec::new())),
        }
    }

    fn record(&self, op: RouterOp) {
        critical_section::with(|cs| {
            // Oldest entries are kept; a full journal drops new ones
            let _ = self.journal.borrow_ref_mut(cs).push(op);
        });
    }

    /// Apply a signal transition on `pin`.
    ///
    /// Returns `true` if the transition latched the pending flag of the
    /// pin's line.
    pub fn edge(&self, pin: Pin, edge: Edge) -> bool {
        let Ok(line) = pin.line() else {
            return false;
        };
        if self.route(line) != Some(pin.port()) {
            return false;
        }
        let triggers = match edge {
            Edge::Rising => &self.rtsr,
            Edge::Falling => &self.ftsr,
        };
        if triggers.load(Ordering::Acquire) & line.mask() == 0 {
            return false;
        }
        self.pr.fetch_or(line.mask(), Ordering::AcqRel);
        true
    }

    /// Latch the pending flag of `line` directly
    pub fn latch(&self, line: Line) {
        self.pr.fetch_or(line.mask(), Ordering::AcqRel);
    }

    /// Port `line` is routed to
    pub fn route(&self, line: Line) -> Option<PortId> {
        match self.routes[line.index()].load(Ordering::Acquire) {
            UNROUTED => None,
            raw => PortId::new(raw - 1).ok(),
        }
    }

    /// Vectors the interrupt controller would currently raise, in vector
    /// table order
    pub fn raised_vectors(&self) -> heapless::Vec<Vector, 7> {
        let active = self.pending() & self.interrupt_mask();
        Vector::ALL
            .into_iter()
            .filter(|vector| vector.lines().any(|line| active & line.mask() != 0))
            .collect()
    }

    pub fn interrupt_mask(&self) -> u32 {
        self.imr.load(Ordering::Acquire)
    }

    pub fn event_mask(&self) -> u32 {
        self.emr.load(Ordering::Acquire)
    }

    pub fn rising_triggers(&self) -> u32 {
        self.rtsr.load(Ordering::Acquire)
    }

    pub fn falling_triggers(&self) -> u32 {
        self.ftsr.load(Ordering::Acquire)
    }

    pub fn pending(&self) -> u32 {
        self.pr.load(Ordering::Acquire)
    }

    /// Snapshot of the recorded router operations, oldest first
    pub fn journal(&self) -> heapless::Vec<RouterOp, JOURNAL_CAPACITY> {
        critical_section::with(|cs| self.journal.borrow_ref(cs).clone())
    }

    pub fn clear_journal(&self) {
        critical_section::with(|cs| self.journal.borrow_ref_mut(cs).clear());
    }
}

impl Default for SimRouter {
    fn default() -> Self {
        Self::new()
    }
}

fn set_bit(register: &AtomicU32, line: Line, enabled: bool) {
    if enabled {
        register.fetch_or(line.mask(), Ordering::AcqRel);
    } else {
        register.fetch_and(!line.mask(), Ordering::AcqRel);
    }
}

impl LineRouter for SimRouter {
    fn route_line_to_port(&self, line: Line, port: PortId) {
        self.record(RouterOp::Route(line, port));
        self.routes[line.index()].store(port.index() + 1, Ordering::Release);
    }

    fn set_edge_sensitivity(&self, line: Line, edges: EdgeSensitivity) {
        self.record(RouterOp::Edges(line, edges));
        set_bit(&self.rtsr, line, edges.rising);
        set_bit(&self.ftsr, line, edges.falling);
    }

    fn mask_line(&self, line: Line) {
        self.record(RouterOp::Mask(line));
        set_bit(&self.imr, line, false);
    }

    fn unmask_line(&self, line: Line) {
        self.record(RouterOp::Unmask(line));
        set_bit(&self.imr, line, true);
    }

    fn clear_pending(&self, line: Line) {
        self.record(RouterOp::ClearPending(line));
        self.pr.fetch_and(!line.mask(), Ordering::AcqRel);
    }

    fn is_pending(&self, line: Line) -> bool {
        self.pending() & line.mask() != 0
    }

    fn disable_event(&self, line: Line) {
        self.record(RouterOp::DisableEvent(line));
        set_bit(&self.emr, line, false);
    }
}

impl Exti<SimRouter> {
    /// Run the handler of every raised vector once, the way the interrupt
    /// controller would enter them. Returns the number of callbacks invoked.
    pub fn service_raised(&self) -> usize {
        self.router()
            .raised_vectors()
            .into_iter()
            .map(|vector| self.on_vector(vector))
            .sum()
    }
}
