#[cfg(test)]
mod tests {
    use lz78_core::code::{bit_length, CodeSpace, EMPTY_CODE, MAX_CODE, MAX_CODE_BITS, START_CODE, STOP_CODE};

    // ## 1️⃣ Sentinels

    #[test]
    fn sentinels_sit_below_assignable_codes() {
        assert!(STOP_CODE < START_CODE);
        assert!(EMPTY_CODE < START_CODE);
        assert_ne!(STOP_CODE, EMPTY_CODE);
        assert_eq!(MAX_CODE, u16::MAX);
    }

    #[test]
    fn widest_code_fits_declared_width() {
        assert_eq!(bit_length(MAX_CODE - 1), MAX_CODE_BITS);
    }

    // ## 2️⃣ bit_length

    #[test]
    fn bit_length_small_values() {
        assert_eq!(bit_length(0), 0);
        assert_eq!(bit_length(1), 1);
        assert_eq!(bit_length(2), 2);
        assert_eq!(bit_length(3), 2);
        assert_eq!(bit_length(4), 3);
        assert_eq!(bit_length(255), 8);
        assert_eq!(bit_length(256), 9);
        assert_eq!(bit_length(u16::MAX), 16);
    }

    #[test]
    fn bit_length_matches_ceil_log2_plus_one() {
        for n in 1u32..=u16::MAX as u32 {
            let expected = 32 - n.leading_zeros();
            assert_eq!(bit_length(n as u16), expected, "n = {n}");
        }
    }

    // ## 3️⃣ CodeSpace

    #[test]
    fn code_space_starts_at_start_code() {
        let space = CodeSpace::new();
        assert_eq!(space.next(), START_CODE);
        assert_eq!(space.width(), 2);
        assert_eq!(space.assigned(), 0);
    }

    #[test]
    fn width_grows_with_next_code() {
        let mut space = CodeSpace::new();
        let mut widths = Vec::new();
        for _ in 0..7 {
            widths.push(space.width());
            assert!(!space.advance());
        }
        // next = 2, 3, 4, 5, 6, 7, 8
        assert_eq!(widths, vec![2, 2, 3, 3, 3, 3, 4]);
        assert_eq!(space.width(), 4);
    }

    #[test]
    fn width_is_monotonic_between_resets() {
        let mut space = CodeSpace::new();
        let mut last = space.width();
        loop {
            let reset = space.advance();
            if reset {
                break;
            }
            assert!(space.width() >= last);
            assert!(space.width() <= MAX_CODE_BITS);
            last = space.width();
        }
        assert_eq!(last, MAX_CODE_BITS);
    }

    #[test]
    fn reset_after_exactly_max_minus_start_codes() {
        let mut space = CodeSpace::new();
        let mut minted = 0usize;
        loop {
            minted += 1;
            if space.advance() {
                break;
            }
        }
        assert_eq!(minted, (MAX_CODE - START_CODE) as usize);
        assert_eq!(space.next(), START_CODE);
        assert_eq!(space.width(), 2);
    }

    #[test]
    fn last_assignable_code_is_max_minus_one() {
        let mut space = CodeSpace::new();
        let mut last = space.next();
        while !space.advance() {
            last = space.next();
        }
        assert_eq!(last, MAX_CODE - 1);
    }
}
