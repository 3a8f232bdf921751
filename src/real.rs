//! Hex-integer and IEEE-754 double parsing/construction shared by the atom
//! dispatcher and the typed numeric accessors.
//!
//! A "real" on the wire is `[-]<hex>[p[-]<hex>]`: a significand, and an
//! optional biased exponent. Whether a given real is presented to callers as
//! an integer or a `DOUBLE` atom depends only on whether the significand fits
//! losslessly at that exponent; see [`fits_as_integer`].

use crate::digits::{hex_value, is_hex};
use crate::error::{Error, Result};

/// Parses a canonical hex run: no leading zero unless the run is the literal
/// digit `0`, lowercase digits only.
///
/// Returns `(value, overflow_bits)`. `value` holds the low 64 bits parsed
/// before the significand would have overflowed; `overflow_bits` is the
/// number of hex digits parsed beyond that point, each worth 4 bits of
/// magnitude the caller must account for (typically by adding it to an
/// exponent). `overflow_bits` is `0` when the whole run fit in 64 bits.
pub(crate) fn parse_hex(data: &mut &[u8]) -> Result<(u64, u32)> {
    let (&first, rest) = data.split_first().ok_or(Error::InvalidHexDigit)?;
    if first == b'0' {
        if rest.first().is_some_and(|&b| is_hex(b)) {
            return Err(Error::LeadingZero);
        }
        *data = rest;
        return Ok((0, 0));
    }
    if !is_hex(first) {
        return Err(Error::InvalidHexDigit);
    }

    let mut value = hex_value(first) as u64;
    let mut rest = rest;
    loop {
        let Some((&b, next_rest)) = rest.split_first() else {
            break;
        };
        if !is_hex(b) {
            break;
        }
        if value >> 60 != 0 {
            // The high nibble is set, so shifting left by 4 would push a set
            // bit off the top. Stop accumulating into `value` and just count
            // the remaining digits.
            let mut overflow_bits = 0u32;
            let mut cur = rest;
            while let Some((&b2, r2)) = cur.split_first() {
                if !is_hex(b2) {
                    break;
                }
                overflow_bits += 4;
                cur = r2;
            }
            *data = cur;
            return Ok((value, overflow_bits));
        }
        value = (value << 4) | hex_value(b) as u64;
        rest = next_rest;
    }
    *data = rest;
    Ok((value, 0))
}

/// Parses `[-]<hex>` as a biased exponent, folding in bits of significand
/// overflow the caller already accumulated. Clamps to `i32::MIN`/`i32::MAX`
/// on overflow rather than wrapping, matching the reference parser's
/// saturate-to-infinity behavior for absurdly large exponents.
pub(crate) fn parse_exponent(data: &mut &[u8], sig_overflow: u32) -> Result<i32> {
    let negate = matches!(data.first(), Some(b'-'));
    if negate {
        *data = &data[1..];
    }
    let (magnitude, exp_overflow) = parse_hex(data)?;
    let biased = magnitude.saturating_add(sig_overflow as u64);
    if exp_overflow != 0 || biased > i32::MAX as u64 {
        return Ok(if negate { i32::MIN } else { i32::MAX });
    }
    let biased = biased as i32;
    Ok(if negate { -biased } else { biased })
}

/// Parses a real number's body: `[-]<hex>[p[-]<hex>]`, or the literal `inf`.
/// `allow_negative` gates the leading `-`; callers that have already
/// committed to a non-negative context (e.g. a plain digit lookahead) pass
/// `false` and handle negation themselves.
///
/// Returns `(negate, significand, exponent)`, unevaluated: the caller decides
/// whether this becomes an integer atom or a `DOUBLE` atom via
/// [`fits_as_integer`] and [`build_double`].
pub(crate) fn parse_real(data: &mut &[u8], allow_negative: bool) -> Result<(bool, u64, i32)> {
    let negate = allow_negative && matches!(data.first(), Some(b'-'));
    if negate {
        *data = &data[1..];
    }

    if data.starts_with(b"inf") {
        *data = &data[3..];
        return Ok((negate, 1, i32::MAX));
    }

    let (sig, overflow) = parse_hex(data)?;

    if matches!(data.first(), Some(b'p')) {
        *data = &data[1..];
        if sig & 1 == 0 {
            return Err(Error::NonCanonicalSignificand);
        }
        let exp = parse_exponent(data, overflow)?;
        Ok((negate, sig, exp))
    } else {
        if overflow != 0 {
            return Err(Error::ExponentOverflow);
        }
        if sig == 0 {
            if negate {
                return Err(Error::NegativeZero);
            }
        } else if sig & 0xff == 0 {
            return Err(Error::NonCanonicalReal);
        }
        Ok((negate, sig, 0))
    }
}

/// A real with this significand and exponent represents an exact integer
/// (`significand << exponent` does not overflow and has no fractional part)
/// rather than a value that must be carried as a `DOUBLE`.
pub(crate) fn fits_as_integer(significand: u64, exponent: i32) -> bool {
    exponent >= 0 && (exponent as u32) <= significand.leading_zeros()
}

/// Builds the IEEE-754 `f64` for `(-1)^negate * significand * 2^exponent`,
/// rounding to nearest and flushing to zero/infinity on subnormal/overflow
/// ranges, mirroring the reference implementation's bit-52 rounding rule
/// (round up when bit 11 of the left-justified significand is set, with no
/// special handling for the rare case that carries into the exponent).
pub(crate) fn build_double(negate: bool, significand: u64, exponent: i32) -> f64 {
    if significand == 0 {
        return if negate { -0.0 } else { 0.0 };
    }

    let clz = significand.leading_zeros();
    // Discards the implicit leading 1 bit, left-justifying the remaining
    // fractional bits. `clz == 63` means the significand is exactly `1`
    // (no fractional bits at all), so the shift amount would be 64.
    let shifted = if clz == 63 {
        0
    } else {
        significand << (clz + 1)
    };
    let exponent = exponent.saturating_add(63 - clz as i32);

    let rounded = if shifted & (1u64 << 11) != 0 {
        shifted.wrapping_add(1u64 << 11)
    } else {
        shifted
    };

    let (mantissa, biased_exp) = if exponent < -1022 {
        (0u64, 0u64)
    } else if exponent > 1023 {
        (0u64, 0x7ffu64)
    } else {
        (rounded >> 12, (1023 + exponent) as u64)
    };

    let bits = ((negate as u64) << 63) | (biased_exp << 52) | mantissa;
    f64::from_bits(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> (u64, u32) {
        let mut data = s.as_bytes();
        let result = parse_hex(&mut data).unwrap();
        assert!(data.is_empty(), "leftover input: {:?}", data);
        result
    }

    #[test]
    fn parses_zero_as_single_digit() {
        assert_eq!(hex("0"), (0, 0));
    }

    #[test]
    fn rejects_leading_zero() {
        let mut data = b"01".as_slice();
        assert_eq!(parse_hex(&mut data), Err(Error::LeadingZero));
    }

    #[test]
    fn accumulates_digits_big_endian() {
        assert_eq!(hex("ff"), (0xff, 0));
        assert_eq!(hex("100"), (0x100, 0));
        assert_eq!(hex("ffffffffffffffff"), (0xffff_ffff_ffff_ffff, 0));
    }

    #[test]
    fn counts_overflow_digits() {
        let (value, overflow) = hex("ffffffffffffffff0");
        assert_eq!(value, 0xffff_ffff_ffff_ffff);
        assert_eq!(overflow, 4);
        let (value, overflow) = hex("1000000000000000000");
        assert_eq!(value, 0x1000_0000_0000_0000);
        assert_eq!(overflow, 12);
    }

    #[test]
    fn counts_overflow_digits_on_non_nibble_aligned_overflow() {
        // Regression test: the top nibble here is `0x1`, not `0xf` or `0x0`,
        // so a buggy `shifted < value` overflow check would miss this (the
        // wrapped shift happens to come out *larger* than the pre-shift
        // value) and silently drop the leading bit instead of reporting it
        // as overflow.
        let (value, overflow) = hex("1fffffffffffffff1");
        assert_eq!(value, 0x1fff_ffff_ffff_ffff);
        assert_eq!(overflow, 4);
    }

    #[test]
    fn integer_fits_rule() {
        assert!(fits_as_integer(0, 0));
        assert!(fits_as_integer(1, 63));
        assert!(!fits_as_integer(1, 64));
        assert!(fits_as_integer(0xff, 56));
        assert!(!fits_as_integer(0xff, 57));
        assert!(!fits_as_integer(1, -1));
    }

    #[test]
    fn builds_small_integral_doubles() {
        assert_eq!(build_double(false, 1, 0), 1.0);
        assert_eq!(build_double(true, 1, 0), -1.0);
        assert_eq!(build_double(false, 2, 0), 2.0);
        assert_eq!(build_double(false, 0, 0), 0.0);
        assert!(build_double(true, 0, 0).is_sign_negative());
    }

    #[test]
    fn builds_fractional_doubles() {
        // 0x18 * 2^-4 = 1.5
        assert_eq!(build_double(false, 0x18, -4), 1.5);
    }

    #[test]
    fn flushes_to_infinity_on_overflow() {
        assert_eq!(build_double(false, 1, i32::MAX), f64::INFINITY);
        assert_eq!(build_double(true, 1, i32::MAX), f64::NEG_INFINITY);
    }

    #[test]
    fn flushes_to_zero_on_underflow() {
        assert_eq!(build_double(false, 1, i32::MIN), 0.0);
    }

    #[test]
    fn exponent_clamps_on_overflow() {
        let mut data = b"-fffffffff".as_slice();
        let exp = parse_exponent(&mut data, 0).unwrap();
        assert_eq!(exp, i32::MIN);
    }
}
