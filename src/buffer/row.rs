//! Row: one line of text plus its tab-expanded render.

/// A single line of the document.
///
/// `render` is derived from `chars` and rebuilt by every mutating method;
/// there is no way to edit it directly, so the two cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    chars: Vec<u8>,
    render: Vec<u8>,
    tab_stop: usize,
}

impl Row {
    /// Create a row from raw bytes.
    pub fn new(chars: impl Into<Vec<u8>>, tab_stop: usize) -> Self {
        let chars = chars.into();
        let tab_stop = tab_stop.max(1);
        let render = render_chars(&chars, tab_stop);
        Self {
            chars,
            render,
            tab_stop,
        }
    }

    /// Raw bytes of the line.
    #[inline]
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Number of raw bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.chars.len()
    }

    /// Tab-expanded bytes as they appear on screen.
    #[inline]
    pub fn render(&self) -> &[u8] {
        &self.render
    }

    /// Number of rendered columns.
    #[inline]
    pub fn rsize(&self) -> usize {
        self.render.len()
    }

    /// Insert a byte at `at`; positions past the end append.
    pub fn insert_char(&mut self, at: usize, ch: u8) {
        let at = at.min(self.chars.len());
        self.chars.insert(at, ch);
        self.update();
    }

    /// Remove the byte at `at`. Returns `false` if `at` is out of range.
    pub fn delete_char(&mut self, at: usize) -> bool {
        if at >= self.chars.len() {
            return false;
        }
        self.chars.remove(at);
        self.update();
        true
    }

    /// Append bytes to the end of the line.
    pub fn append(&mut self, bytes: &[u8]) {
        self.chars.extend_from_slice(bytes);
        self.update();
    }

    /// Cut the line at `at`, returning everything from `at` onward.
    pub fn split_off(&mut self, at: usize) -> Vec<u8> {
        let at = at.min(self.chars.len());
        let tail = self.chars.split_off(at);
        self.update();
        tail
    }

    /// Convert a byte index into a render column.
    pub fn cx_to_rx(&self, cx: usize) -> usize {
        let tab_stop = self.tab_stop;
        self.chars
            .iter()
            .take(cx)
            .fold(0, |rx, &ch| {
                if ch == b'\t' {
                    rx + tab_stop - rx % tab_stop
                } else {
                    rx + 1
                }
            })
    }

    fn update(&mut self) {
        self.render = render_chars(&self.chars, self.tab_stop);
    }
}

/// Expand tabs to spaces up to the next multiple of `tab_stop`.
pub fn render_chars(chars: &[u8], tab_stop: usize) -> Vec<u8> {
    let tab_stop = tab_stop.max(1);
    let tabs = chars.iter().filter(|&&ch| ch == b'\t').count();
    let mut render = Vec::with_capacity(chars.len() + tabs * (tab_stop - 1));
    for &ch in chars {
        if ch == b'\t' {
            render.push(b' ');
            while render.len() % tab_stop != 0 {
                render.push(b' ');
            }
        } else {
            render.push(ch);
        }
    }
    render
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tab_expansion() {
        let row = Row::new(b"ab\tc".to_vec(), 8);
        assert_eq!(row.render(), b"ab      c");
        assert_eq!(row.rsize(), 9);
        assert_eq!(row.size(), 4);
    }

    #[test]
    fn test_tab_on_boundary_is_full_width() {
        let row = Row::new(b"\t".to_vec(), 8);
        assert_eq!(row.render(), b"        ");
        let row = Row::new(b"12345678\tx".to_vec(), 8);
        assert_eq!(row.rsize(), 17);
    }

    #[test]
    fn test_cx_to_rx() {
        let row = Row::new(b"a\tb\tc".to_vec(), 4);
        assert_eq!(row.cx_to_rx(0), 0);
        assert_eq!(row.cx_to_rx(1), 1);
        assert_eq!(row.cx_to_rx(2), 4);
        assert_eq!(row.cx_to_rx(3), 5);
        assert_eq!(row.cx_to_rx(4), 8);
        // Past the end stops at the full width.
        assert_eq!(row.cx_to_rx(99), 9);
    }

    #[test]
    fn test_insert_clamps_to_end() {
        let mut row = Row::new(b"ab".to_vec(), 8);
        row.insert_char(50, b'c');
        assert_eq!(row.chars(), b"abc");
        row.insert_char(0, b'\t');
        assert_eq!(row.render(), b"        abc");
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut row = Row::new(b"ab".to_vec(), 8);
        assert!(!row.delete_char(2));
        assert!(row.delete_char(0));
        assert_eq!(row.chars(), b"b");
    }

    #[test]
    fn test_split_and_append() {
        let mut row = Row::new(b"hello\tworld".to_vec(), 8);
        let tail = row.split_off(5);
        assert_eq!(row.chars(), b"hello");
        assert_eq!(tail, b"\tworld");
        row.append(&tail);
        assert_eq!(row.render(), b"hello   world");
    }

    fn edit_strategy() -> impl Strategy<Value = (bool, usize, u8)> {
        (
            any::<bool>(),
            0usize..40,
            prop_oneof![Just(b'\t'), Just(b' '), b'a'..=b'z'],
        )
    }

    proptest! {
        #[test]
        fn test_render_never_drifts(
            initial in proptest::collection::vec(prop_oneof![Just(b'\t'), b'a'..=b'z'], 0..20),
            edits in proptest::collection::vec(edit_strategy(), 0..60),
            tab_stop in 1usize..10,
        ) {
            let mut row = Row::new(initial, tab_stop);
            for (insert, at, ch) in edits {
                if insert {
                    row.insert_char(at, ch);
                } else {
                    row.delete_char(at);
                }
                let expected = render_chars(row.chars(), tab_stop);
                prop_assert_eq!(row.render(), expected.as_slice());
            }
        }

        #[test]
        fn test_cx_to_rx_monotone(
            chars in proptest::collection::vec(prop_oneof![Just(b'\t'), b'a'..=b'z'], 0..30),
        ) {
            let row = Row::new(chars, 8);
            let mut last = 0;
            for cx in 0..=row.size() {
                let rx = row.cx_to_rx(cx);
                prop_assert!(rx >= last);
                last = rx;
            }
            prop_assert_eq!(row.cx_to_rx(row.size()), row.rsize());
        }

        #[test]
        fn test_cx_to_rx_identity_without_tabs(
            chars in proptest::collection::vec(b'a'..=b'z', 0..30),
        ) {
            let row = Row::new(chars, 8);
            for cx in 0..=row.size() {
                prop_assert_eq!(row.cx_to_rx(cx), cx);
            }
        }
    }
}
