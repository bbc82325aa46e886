//! Subscription table
//!
//! Sixteen statically allocated slots, one per EXTI line. The `owner` field
//! of each slot is the only synchronization point between subscribers: it is
//! taken with a compare-and-set, moved to a releasing state with another one
//! and only then given back. The callback fields are written only by the
//! holder of the slot and are cleared before the owner is released.
//!
//! Handler and context are separate atomics. A per-slot sequence number,
//! odd while they are being written, lets the interrupt side read them as
//! a pair on any number of cores.

use core::ptr;
use core::sync::atomic::{fence, AtomicPtr, AtomicU32, AtomicU8, Ordering};

use gpio_core::{Line, PortId, LINE_COUNT};

use crate::callback::{Callback, Context, Handler};

/// Owner value of a free slot. Owned slots store `port index + 1`.
const FREE: u8 = 0;

/// Owner value while a release is tearing the line down
const RELEASING: u8 = u8::MAX;

const fn encode_owner(port: PortId) -> u8 {
    port.index() + 1
}

fn decode_owner(raw: u8) -> Option<PortId> {
    match raw {
        FREE | RELEASING => None,
        raw => PortId::new(raw - 1).ok(),
    }
}

/// A single line's subscription.
///
/// `handler` holds either null or a valid [`Handler`] cast to `*mut ()`;
/// [`Slot::arm`] is the only place that stores a non-null value.
struct Slot {
    owner: AtomicU8,
    sequence: AtomicU32,
    handler: AtomicPtr<()>,
    context: AtomicPtr<()>,
}

impl Slot {
    #[allow(clippy::declare_interior_mutable_const)]
    const EMPTY: Self = Self {
        owner: AtomicU8::new(FREE),
        sequence: AtomicU32::new(0),
        handler: AtomicPtr::new(ptr::null_mut()),
        context: AtomicPtr::new(ptr::null_mut()),
    };

    /// Replace handler and context. Callers hold the slot, so writers never
    /// overlap.
    fn store(&self, handler: *mut (), context: *mut ()) {
        let sequence = self.sequence.load(Ordering::Relaxed);
        self.sequence.store(sequence.wrapping_add(1), Ordering::Relaxed);
        fence(Ordering::Release);
        self.context.store(context, Ordering::Relaxed);
        self.handler.store(handler, Ordering::Relaxed);
        self.sequence.store(sequence.wrapping_add(2), Ordering::Release);
    }

    fn arm(&self, handler: Option<Handler>, context: Context) {
        let raw = handler.map_or(ptr::null_mut(), |handler| handler as *mut ());
        self.store(raw, context.as_ptr());
    }

    fn disarm(&self) {
        self.store(ptr::null_mut(), ptr::null_mut());
    }

    /// Handler and context written by the same `store`, or `None` while a
    /// store is in progress.
    fn callback(&self) -> Option<Callback> {
        let before = self.sequence.load(Ordering::Acquire);
        if before % 2 == 1 {
            return None;
        }
        let raw = self.handler.load(Ordering::Relaxed);
        let context = self.context.load(Ordering::Relaxed);
        fence(Ordering::Acquire);
        if self.sequence.load(Ordering::Relaxed) != before || raw.is_null() {
            return None;
        }
        // SAFETY: `arm` only stores null or a valid `Handler` pointer.
        let handler: Handler = unsafe { core::mem::transmute::<*mut (), Handler>(raw) };
        Some(Callback::new(handler, Context::from_ptr(context)))
    }
}

/// Process-wide table of line subscriptions.
///
/// Only claim, release and read operations are exposed; the table is meant
/// to live in a `static` shared between threads and interrupt handlers.
pub struct SubscriptionTable {
    slots: [Slot; LINE_COUNT],
}

impl SubscriptionTable {
    /// Create a table with every line free
    pub const fn new() -> Self {
        Self {
            slots: [Slot::EMPTY; LINE_COUNT],
        }
    }

    fn slot(&self, line: Line) -> &Slot {
        &self.slots[line.index()]
    }

    /// Atomically take `line` for `owner`.
    ///
    /// Returns `false` if any port already holds the line, including `owner`
    /// itself.
    pub fn claim(&self, line: Line, owner: PortId) -> bool {
        self.slot(line)
            .owner
            .compare_exchange(FREE, encode_owner(owner), Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Port currently holding `line`
    pub fn owner(&self, line: Line) -> Option<PortId> {
        decode_owner(self.slot(line).owner.load(Ordering::Acquire))
    }

    /// Whether `port` currently holds `line`
    pub fn is_owned_by(&self, line: Line, port: PortId) -> bool {
        self.slot(line).owner.load(Ordering::Acquire) == encode_owner(port)
    }

    /// Callback armed on `line`, if any
    pub fn callback(&self, line: Line) -> Option<Callback> {
        self.slot(line).callback()
    }

    /// Whether `line` holds a callback
    pub fn is_armed(&self, line: Line) -> bool {
        !self.slot(line).handler.load(Ordering::Acquire).is_null()
    }

    /// Number of claimed lines
    pub fn claimed(&self) -> usize {
        Line::all().filter(|&line| self.owner(line).is_some()).count()
    }

    /// Store the callback of a claimed line
    pub(crate) fn arm(&self, line: Line, handler: Option<Handler>, context: Context) {
        debug_assert!(self.owner(line).is_some(), "arming an unclaimed line");
        self.slot(line).arm(handler, context);
    }

    /// Drop the callback of a claimed line
    pub(crate) fn disarm(&self, line: Line) {
        self.slot(line).disarm();
    }

    /// Start releasing `line` if `owner` holds it.
    ///
    /// Exactly one caller wins; the line stays unclaimable until
    /// [`finish_release`](Self::finish_release).
    pub(crate) fn begin_release(&self, line: Line, owner: PortId) -> bool {
        self.slot(line)
            .owner
            .compare_exchange(encode_owner(owner), RELEASING, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Give back a line whose release was started by this caller
    pub(crate) fn finish_release(&self, line: Line) {
        let slot = self.slot(line);
        debug_assert_eq!(slot.owner.load(Ordering::Relaxed), RELEASING);
        debug_assert!(slot.handler.load(Ordering::Relaxed).is_null(), "freeing an armed line");
        slot.owner.store(FREE, Ordering::Release);
    }
}

impl Default for SubscriptionTable {
    fn default() -> Self {
        Self::new()
    }
}
