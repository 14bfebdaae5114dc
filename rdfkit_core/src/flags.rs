/*!
The node flag bitset.
*/

bitflags::bitflags! {
    /// Flags recorded on a node's primary lexical form. `HAS_DATATYPE` and
    /// `HAS_LANGUAGE` are mutually exclusive; a constructor that would set
    /// both instead fails (see [`crate::node::new_typed_literal`]).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct NodeFlags: u8 {
        /// The lexical form contains at least one U+000A newline.
        const HAS_NEWLINE = 0b0001;
        /// The lexical form contains at least one U+0022 double quote.
        const HAS_QUOTE = 0b0010;
        /// The node carries a datatype meta child.
        const HAS_DATATYPE = 0b0100;
        /// The node carries a language-tag meta child.
        const HAS_LANGUAGE = 0b1000;
    }
}

/// Scans `s` once, returning the `HAS_NEWLINE`/`HAS_QUOTE` flags implied by
/// its content.
pub fn scan(s: &str) -> NodeFlags {
    let mut flags = NodeFlags::empty();
    for c in s.chars() {
        match c {
            '\n' => flags |= NodeFlags::HAS_NEWLINE,
            '"' => flags |= NodeFlags::HAS_QUOTE,
            _ => {}
        }
        if flags.contains(NodeFlags::HAS_NEWLINE | NodeFlags::HAS_QUOTE) {
            break;
        }
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s6_flag_scan() {
        let flags = scan("hello\n\"world\"");
        assert!(flags.contains(NodeFlags::HAS_NEWLINE));
        assert!(flags.contains(NodeFlags::HAS_QUOTE));
    }

    #[test]
    fn plain_text_has_no_flags() {
        assert_eq!(scan("hello world"), NodeFlags::empty());
    }
}
