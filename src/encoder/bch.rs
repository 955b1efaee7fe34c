//! BCH codes protecting format and version information
//!
//! Both fields are short binary BCH codes: the payload, read as a polynomial
//! over GF(2), is shifted up by the generator's degree and reduced modulo the
//! generator. The remainder is appended as the check bits.

/// Format information generator, x^10 + x^8 + x^5 + x^4 + x^2 + x + 1 (BCH(15,5))
pub const FORMAT_INFO_POLY: u32 = 0x537;

/// XOR mask applied to the 15-bit format codeword so it is never all zero
pub const FORMAT_INFO_MASK: u32 = 0x5412;

/// Version information generator, x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1 (BCH(18,6))
pub const VERSION_INFO_POLY: u32 = 0x1F25;

/// Bit length of `value` (position of the highest set bit + 1)
fn bit_length(value: u32) -> u32 {
    u32::BITS - value.leading_zeros()
}

/// Remainder of `value * x^deg(poly)` divided by `poly` over GF(2)
///
/// `poly` must be non-zero and `value` small enough that the shift fits in 32
/// bits (true for every QR field).
pub fn calculate_bch(value: u32, poly: u32) -> u32 {
    debug_assert!(poly != 0, "BCH generator must be non-zero");
    let poly_len = bit_length(poly);
    let mut dividend = value << (poly_len - 1);
    while bit_length(dividend) >= poly_len {
        dividend ^= poly << (bit_length(dividend) - poly_len);
    }
    dividend
}
