#[cfg(test)]
mod tests {
    use lz78_core::code::{EMPTY_CODE, START_CODE, STOP_CODE};
    use lz78_core::word::WordTable;

    fn word(table: &WordTable, code: u16) -> Option<Vec<u8>> {
        let mut scratch = Vec::new();
        table.materialize(code, &mut scratch).map(<[u8]>::to_vec)
    }

    #[test]
    fn new_table_holds_empty_word_only() {
        let table = WordTable::new();
        assert!(table.is_empty());
        assert_eq!(table.next_code(), START_CODE);
        assert!(table.contains(EMPTY_CODE));
        assert!(!table.contains(STOP_CODE));
        assert!(!table.contains(START_CODE));
        assert_eq!(word(&table, EMPTY_CODE), Some(Vec::new()));
    }

    #[test]
    fn append_extends_existing_words() {
        let mut table = WordTable::new();
        let a = table.append(EMPTY_CODE, b'a').unwrap();
        let ab = table.append(a, b'b').unwrap();
        let abc = table.append(ab, b'c').unwrap();
        let b = table.append(EMPTY_CODE, b'b').unwrap();

        assert_eq!((a, ab, abc, b), (2, 3, 4, 5));
        assert_eq!(word(&table, a).unwrap(), b"a");
        assert_eq!(word(&table, ab).unwrap(), b"ab");
        assert_eq!(word(&table, abc).unwrap(), b"abc");
        assert_eq!(word(&table, b).unwrap(), b"b");
        assert_eq!(table.word_len(abc), Some(3));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn older_words_unchanged_by_later_appends() {
        let mut table = WordTable::new();
        let x = table.append(EMPTY_CODE, b'x').unwrap();
        let before = word(&table, x);
        for i in 0..100u8 {
            table.append(x, i).unwrap();
        }
        assert_eq!(word(&table, x), before);
    }

    #[test]
    fn same_word_learned_twice_gets_two_codes() {
        let mut table = WordTable::new();
        let first = table.append(EMPTY_CODE, b'q').unwrap();
        let second = table.append(EMPTY_CODE, b'q').unwrap();
        assert_ne!(first, second);
        assert_eq!(word(&table, first), word(&table, second));
    }

    #[test]
    fn unknown_codes_rejected() {
        let mut table = WordTable::new();
        assert_eq!(table.append(STOP_CODE, b'a'), None);
        assert_eq!(table.append(START_CODE, b'a'), None);
        assert_eq!(table.append(900, b'a'), None);
        assert!(word(&table, 900).is_none());
        assert!(word(&table, STOP_CODE).is_none());
        // Nothing was appended by the failed calls.
        assert!(table.is_empty());
    }

    #[test]
    fn reset_forgets_learned_words() {
        let mut table = WordTable::new();
        let a = table.append(EMPTY_CODE, b'a').unwrap();
        table.append(a, b'a').unwrap();
        table.reset();

        assert!(table.is_empty());
        assert_eq!(table.next_code(), START_CODE);
        assert!(!table.contains(a));
        assert!(table.contains(EMPTY_CODE));
    }

    #[test]
    fn long_chain_materializes_in_order() {
        let mut table = WordTable::new();
        let mut code = EMPTY_CODE;
        let expected: Vec<u8> = (0..5000u32).map(|i| (i * 31 % 251) as u8).collect();
        for &sym in &expected {
            code = table.append(code, sym).unwrap();
        }
        assert_eq!(word(&table, code).unwrap(), expected);
    }

    #[test]
    fn every_appended_code_materializes_across_reset() {
        let mut table = WordTable::new();
        let mut scratch = Vec::new();
        for round in 0..2u8 {
            let mut code = EMPTY_CODE;
            for i in 0..300u16 {
                let new_code = table.append(code, round ^ i as u8).unwrap();
                let word = table.materialize(new_code, &mut scratch).unwrap();
                assert_eq!(word.len(), i as usize + 1);
                assert_eq!(word.last(), Some(&(round ^ i as u8)));
                code = new_code;
            }
            table.reset();
        }
    }
}
