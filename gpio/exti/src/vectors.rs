//! Interrupt vector bindings

/// Bind the EXTI interrupt vectors to a `static` [`Exti`](crate::Exti).
///
/// Emits one `extern "C"` handler per vector, each servicing the lines the
/// vector covers. By default the handlers carry the interrupt names used by
/// device crates and `cortex-m-rt` (`EXTI0`, ..., `EXTI9_5`, `EXTI15_10`).
/// Prefix the argument with `cmsis` to emit CMSIS names instead
/// (`EXTI0_IRQHandler`, ...), for vector tables built by C startup code.
///
/// ```ignore
/// static EXTI: Stm32Exti = Stm32Exti::new(Stm32Router::new(Stm32Config::STM32F4));
/// gpio_exti::exti_vectors!(EXTI);
/// ```
#[macro_export]
macro_rules! exti_vectors {
    (@bind $exti:expr; $($name:ident => $vector:ident),+ $(,)?) => {
        $(
            #[no_mangle]
            #[allow(non_snake_case)]
            pub extern "C" fn $name() {
                let _ = $exti.on_vector($crate::Vector::$vector);
            }
        )+
    };
    (cmsis $exti:expr) => {
        $crate::exti_vectors!(@bind $exti;
            EXTI0_IRQHandler => Exti0,
            EXTI1_IRQHandler => Exti1,
            EXTI2_IRQHandler => Exti2,
            EXTI3_IRQHandler => Exti3,
            EXTI4_IRQHandler => Exti4,
            EXTI9_5_IRQHandler => Exti9_5,
            EXTI15_10_IRQHandler => Exti15_10,
        );
    };
    ($exti:expr) => {
        $crate::exti_vectors!(@bind $exti;
            EXTI0 => Exti0,
            EXTI1 => Exti1,
            EXTI2 => Exti2,
            EXTI3 => Exti3,
            EXTI4 => Exti4,
            EXTI9_5 => Exti9_5,
            EXTI15_10 => Exti15_10,
        );
    };
}
