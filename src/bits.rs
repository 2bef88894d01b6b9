/// True if bit `index` of `value` is set, counting from the least significant bit.
pub fn is_bit_set(value: u8, index: u8) -> bool {
    debug_assert!(index < 8, "bit index {} out of range", index);
    (value >> index) & 0x01 == 1
}

/// Bits 0-3.
pub fn lower_nibble(value: u8) -> u8 {
    value & 0x0F
}

/// Bits 4-7, shifted down.
pub fn upper_nibble(value: u8) -> u8 {
    value >> 4
}
