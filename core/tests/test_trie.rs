#[cfg(test)]
mod tests {
    use lz78_core::code::{CodeSpace, EMPTY_CODE, MAX_CODE, START_CODE};
    use lz78_core::constants::ALPHABET;
    use lz78_core::trie::Trie;

    #[test]
    fn new_trie_has_only_root() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.code(trie.root()), EMPTY_CODE);
        for sym in 0..ALPHABET {
            assert!(trie.step(trie.root(), sym as u8).is_none());
        }
    }

    #[test]
    fn insert_then_step() {
        let mut trie = Trie::new();
        let root = trie.root();
        let a = trie.insert(root, b'a', START_CODE);
        let ab = trie.insert(a, b'b', START_CODE + 1);

        assert_eq!(trie.step(root, b'a'), Some(a));
        assert_eq!(trie.step(a, b'b'), Some(ab));
        assert_eq!(trie.code(a), START_CODE);
        assert_eq!(trie.code(ab), START_CODE + 1);

        // Same symbol under a different parent is a different sequence.
        assert!(trie.step(root, b'b').is_none());
        assert!(trie.step(ab, b'b').is_none());
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn symbol_zero_and_max_are_distinct_links() {
        let mut trie = Trie::new();
        let root = trie.root();
        let lo = trie.insert(root, 0x00, 2);
        let hi = trie.insert(root, 0xFF, 3);
        assert_ne!(lo, hi);
        assert_eq!(trie.step(root, 0x00), Some(lo));
        assert_eq!(trie.step(root, 0xFF), Some(hi));
    }

    #[test]
    fn reset_drops_everything_but_root() {
        let mut trie = Trie::new();
        let root = trie.root();
        let x = trie.insert(root, b'x', 2);
        trie.insert(x, b'y', 3);
        trie.reset();

        assert!(trie.is_empty());
        assert!(trie.step(root, b'x').is_none());
        assert_eq!(trie.code(trie.root()), EMPTY_CODE);

        // Relearning after reset is allowed.
        let x2 = trie.insert(root, b'x', 2);
        assert_eq!(trie.step(root, b'x'), Some(x2));
    }

    #[test]
    fn fills_to_reset_point() {
        // Learn one ever-longer chain, one code per link, until the space wraps.
        let mut trie = Trie::new();
        let mut space = CodeSpace::new();
        let mut node = trie.root();
        let mut learned = 0usize;
        loop {
            node = trie.insert(node, (learned % ALPHABET) as u8, space.next());
            learned += 1;
            if space.advance() {
                break;
            }
        }
        assert_eq!(learned, (MAX_CODE - START_CODE) as usize);
        assert_eq!(trie.len(), learned + 1);
        assert_eq!(trie.code(node), MAX_CODE - 1);
        trie.reset();
        assert!(trie.is_empty());
    }
}
