//! Line mapping tests for gpio-core

use gpio_core::{pin, GpioError, Line, Pin, PortId, Vector, LINE_COUNT};

#[test]
fn test_line_is_pin_index() {
    for index in 0..LINE_COUNT as u8 {
        let line = Pin::new(PortId::D, index).line().unwrap();
        assert_eq!(line.number(), index);
        assert_eq!(line.mask(), 1u32 << index);
    }
}

#[test]
fn test_ports_collide_on_same_line() {
    assert_eq!(pin!(A, 7).line(), pin!(G, 7).line());
    assert_ne!(pin!(A, 7).line(), pin!(A, 8).line());
}

#[test]
fn test_invalid_line() {
    assert_eq!(Pin::new(PortId::A, 16).line(), Err(GpioError::InvalidLine));
    assert_eq!(Line::new(255), Err(GpioError::InvalidLine));
}

#[test]
fn test_shared_vectors() {
    let shared: Vec<Vector> = Vector::ALL.into_iter().filter(|v| v.is_shared()).collect();
    assert_eq!(shared, vec![Vector::Exti9_5, Vector::Exti15_10]);

    let lines: Vec<u8> = Vector::Exti15_10.lines().map(Line::number).collect();
    assert_eq!(lines, vec![10, 11, 12, 13, 14, 15]);
}

#[test]
fn test_vector_index_matches_table() {
    for (position, vector) in Vector::ALL.into_iter().enumerate() {
        assert_eq!(vector.index(), position);
    }
    assert_eq!(Vector::Exti9_5.handler_name(), "EXTI9_5_IRQHandler");
}
