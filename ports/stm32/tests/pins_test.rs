//! GPIO register programming through `Stm32Pins`

mod common;

use common::FakeDevice;
use gpio_core::{
    pin, AlternateFunction, ClockGate, GpioError, Mode, OutputType, Pin, PinConfigurator,
    PortId, Pull, Speed,
};
use gpio_port_stm32::config::gpio_offsets::{AFRH, AFRL, MODER, OSPEEDR, OTYPER, PUPDR};
use gpio_port_stm32::{ExtiLayout, Stm32Clocks, Stm32Pins};

fn pins(device: &FakeDevice) -> Stm32Pins {
    unsafe { Stm32Pins::new(device.config) }
}

#[test]
fn test_alternate_function_pin() {
    let device = FakeDevice::new(ExtiLayout::CLASSIC);
    let af7 = AlternateFunction::new(7).unwrap();

    pins(&device)
        .configure(
            pin!(B, 9),
            Mode::Alternate(OutputType::OpenDrain),
            Pull::Up,
            Speed::High,
            af7,
        )
        .unwrap();

    let port = PortId::B.index() as usize;
    assert_eq!(device.gpio(port, AFRL), 0);
    assert_eq!(device.gpio(port, AFRH), 0x7 << 4);
    assert_eq!(device.gpio(port, MODER), 0b10 << 18);
    assert_eq!(device.gpio(port, OSPEEDR), 0b10 << 18);
    assert_eq!(device.gpio(port, OTYPER), 1 << 9);
    assert_eq!(device.gpio(port, PUPDR), 0b01 << 18);
    assert_eq!(device.read(common::PORT_CLOCKS), 1 << 1);
}

#[test]
fn test_input_pin_leaves_output_fields() {
    let device = FakeDevice::new(ExtiLayout::CLASSIC);
    let pins = pins(&device);

    pins.configure(
        pin!(A, 2),
        Mode::Output(OutputType::OpenDrain),
        Pull::None,
        Speed::VeryHigh,
        AlternateFunction::AF0,
    )
    .unwrap();
    pins.configure(
        pin!(A, 2),
        Mode::Input,
        Pull::Down,
        Speed::Low,
        AlternateFunction::AF0,
    )
    .unwrap();

    assert_eq!(device.gpio(0, MODER), 0);
    assert_eq!(device.gpio(0, PUPDR), 0b10 << 4);
    // Input mode does not rewrite the driver fields
    assert_eq!(device.gpio(0, OSPEEDR), 0b11 << 4);
    assert_eq!(device.gpio(0, OTYPER), 1 << 2);
}

#[test]
fn test_neighbouring_pins_keep_fields() {
    let device = FakeDevice::new(ExtiLayout::CLASSIC);
    let pins = pins(&device);

    for index in [0, 1] {
        pins.configure(
            Pin::new(PortId::C, index),
            Mode::Analog,
            Pull::None,
            Speed::Low,
            AlternateFunction::AF0,
        )
        .unwrap();
    }

    assert_eq!(device.gpio(2, MODER), 0b1111);
}

#[test]
fn test_rejects_bad_pins() {
    let device = FakeDevice::new(ExtiLayout::CLASSIC);
    let pins = pins(&device);

    assert_eq!(
        pins.configure(
            Pin::new(PortId::A, 16),
            Mode::Input,
            Pull::None,
            Speed::Low,
            AlternateFunction::AF0,
        ),
        Err(GpioError::InvalidLine)
    );
    // The fake device has four ports
    assert_eq!(
        pins.configure(
            pin!(E, 0),
            Mode::Input,
            Pull::None,
            Speed::Low,
            AlternateFunction::AF0,
        ),
        Err(GpioError::InvalidPort)
    );
    assert_eq!(device.read(common::PORT_CLOCKS), 0);
}

#[test]
fn test_clock_gate() {
    let device = FakeDevice::new(ExtiLayout::CLASSIC);
    let clocks = unsafe { Stm32Clocks::new(device.config) };

    clocks.enable_port(PortId::D).unwrap();
    clocks.enable_port(PortId::A).unwrap();
    clocks.enable_line_mux();

    assert_eq!(device.read(common::PORT_CLOCKS), 0b1001);
    assert_eq!(
        device.read(common::SYSCFG_CLOCK),
        1 << common::SYSCFG_CLOCK_BIT
    );
}
