//! Memory-mapped register access

use core::ptr;

/// A 32-bit memory-mapped register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reg(usize);

impl Reg {
    /// Register at `address`.
    ///
    /// # Safety
    ///
    /// `address` must be a valid, 4-byte aligned register (or memory the
    /// caller owns) for as long as the returned value is used.
    pub const unsafe fn at(address: usize) -> Self {
        Reg(address)
    }

    pub const fn address(self) -> usize {
        self.0
    }

    pub fn read(self) -> u32 {
        // SAFETY: validity of the address is the contract of `Reg::at`.
        unsafe { ptr::read_volatile(self.0 as *const u32) }
    }

    pub fn write(self, value: u32) {
        // SAFETY: validity of the address is the contract of `Reg::at`.
        unsafe { ptr::write_volatile(self.0 as *mut u32, value) }
    }

    /// Read-modify-write. Not atomic: callers sharing the register across
    /// contexts wrap it in a critical section.
    pub fn modify(self, f: impl FnOnce(u32) -> u32) {
        self.write(f(self.read()))
    }

    pub fn set_bits(self, mask: u32) {
        self.modify(|value| value | mask);
    }

    pub fn clear_bits(self, mask: u32) {
        self.modify(|value| value & !mask);
    }
}

/// Replace the `width`-bit field of slot `position` in a register value.
///
/// Slot `n` occupies bits `n * width .. (n + 1) * width`.
pub const fn with_field(register: u32, position: u32, width: u32, value: u32) -> u32 {
    let field = (1 << width) - 1;
    let shift = position * width;
    (register & !(field << shift)) | ((value & field) << shift)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_field() {
        assert_eq!(with_field(0xFFFF_FFFF, 0, 2, 0b01), 0xFFFF_FFFD);
        assert_eq!(with_field(0, 15, 2, 0b11), 0xC000_0000);
        assert_eq!(with_field(0x0000_00F0, 1, 4, 0x3), 0x0000_0030);
        assert_eq!(with_field(0, 3, 1, 1), 0b1000);
        // Value wider than the field is truncated
        assert_eq!(with_field(0, 0, 4, 0x1F), 0xF);
    }

    #[test]
    fn test_register_access() {
        let mut cell: u32 = 0;
        let reg = unsafe { Reg::at(&mut cell as *mut u32 as usize) };
        reg.write(0x10);
        reg.set_bits(0x3);
        reg.clear_bits(0x10);
        assert_eq!(reg.read(), 0x3);
    }
}
