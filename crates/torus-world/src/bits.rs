//! Packed cell buffer primitives.
//!
//! Cell `n` lives in byte `n / 8` at bit `n % 8`. Hosts decode this layout
//! directly, so it must not change.

/// Number of bytes needed to hold `cells` bits
pub fn packed_len(cells: usize) -> usize {
    cells.div_ceil(8)
}

#[inline]
pub fn get(buf: &[u8], idx: usize) -> bool {
    buf[idx / 8] & (1 << (idx % 8)) != 0
}

#[inline]
pub fn set(buf: &mut [u8], idx: usize, alive: bool) {
    let mask = 1 << (idx % 8);
    if alive {
        buf[idx / 8] |= mask;
    } else {
        buf[idx / 8] &= !mask;
    }
}

/// Number of set bits in the buffer
pub fn count_alive(buf: &[u8]) -> usize {
    buf.iter().map(|byte| byte.count_ones() as usize).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_len() {
        assert_eq!(packed_len(1), 1);
        assert_eq!(packed_len(8), 1);
        assert_eq!(packed_len(9), 2);
        assert_eq!(packed_len(64 * 64), 512);
        assert_eq!(packed_len(3 * 3), 2);
    }

    #[test]
    fn test_bit_layout() {
        let mut buf = vec![0u8; 2];
        set(&mut buf, 0, true);
        set(&mut buf, 9, true);
        assert_eq!(buf, vec![0b0000_0001, 0b0000_0010]);

        set(&mut buf, 7, true);
        assert_eq!(buf[0], 0b1000_0001);
        assert!(get(&buf, 7));
        assert!(!get(&buf, 6));

        set(&mut buf, 0, false);
        assert_eq!(buf[0], 0b1000_0000);
        assert_eq!(count_alive(&buf), 2);
    }
}
