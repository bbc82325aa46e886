use std::boxed::Box;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::vec::Vec;

use crate::callback::Context;

mod vectors;

/// Callback target shared by the scenario tests
#[derive(Default)]
struct Probe {
    tag: u8,
    hits: AtomicUsize,
    order: Option<&'static Mutex<Vec<u8>>>,
}

impl Probe {
    fn leak(tag: u8) -> &'static Probe {
        Box::leak(Box::new(Probe {
            tag,
            ..Probe::default()
        }))
    }

    fn leak_ordered(tag: u8, order: &'static Mutex<Vec<u8>>) -> &'static Probe {
        Box::leak(Box::new(Probe {
            tag,
            hits: AtomicUsize::new(0),
            order: Some(order),
        }))
    }

    fn context(&'static self) -> Context {
        Context::from_static(self)
    }

    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

fn record(context: Context) {
    // SAFETY: every test subscribes `record` with a context built from a
    // leaked `Probe`.
    let probe: &Probe = unsafe { context.as_ref() };
    probe.hits.fetch_add(1, Ordering::SeqCst);
    if let Some(order) = probe.order {
        order.lock().unwrap().push(probe.tag);
    }
}

fn order_log() -> &'static Mutex<Vec<u8>> {
    Box::leak(Box::new(Mutex::new(Vec::new())))
}
