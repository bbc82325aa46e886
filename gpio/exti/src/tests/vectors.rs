use std::sync::atomic::{AtomicUsize, Ordering};

use gpio_core::{pin, Edge, EdgeSensitivity};

use crate::callback::Context;
use crate::driver::Exti;
use crate::sim::SimRouter;

static EXTI: Exti<SimRouter> = Exti::new(SimRouter::new());
static HITS: AtomicUsize = AtomicUsize::new(0);

fn count(_: Context) {
    HITS.fetch_add(1, Ordering::SeqCst);
}

mod handlers {
    crate::exti_vectors!(cmsis super::EXTI);
}

#[test]
fn bound_handlers_dispatch_their_lines() {
    EXTI.subscribe(pin!(A, 0), EdgeSensitivity::RISING, Some(count), Context::NULL)
        .unwrap();
    EXTI.subscribe(pin!(B, 13), EdgeSensitivity::FALLING, Some(count), Context::NULL)
        .unwrap();

    assert!(EXTI.router().edge(pin!(A, 0), Edge::Rising));
    handlers::EXTI0_IRQHandler();
    assert_eq!(HITS.load(Ordering::SeqCst), 1);

    // Wrong vector: line 13 is only checked by the 10..=15 handler
    assert!(EXTI.router().edge(pin!(B, 13), Edge::Falling));
    handlers::EXTI9_5_IRQHandler();
    assert_eq!(HITS.load(Ordering::SeqCst), 1);
    handlers::EXTI15_10_IRQHandler();
    assert_eq!(HITS.load(Ordering::SeqCst), 2);

    for handler in [
        handlers::EXTI1_IRQHandler,
        handlers::EXTI2_IRQHandler,
        handlers::EXTI3_IRQHandler,
        handlers::EXTI4_IRQHandler,
    ] {
        handler();
    }
    assert_eq!(HITS.load(Ordering::SeqCst), 2);

    EXTI.unsubscribe(pin!(A, 0));
    EXTI.unsubscribe(pin!(B, 13));
}
