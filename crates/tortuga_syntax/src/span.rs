//! Byte spans over source text.
//!
//! Both ends are inclusive: `end` is the offset of the token's last byte,
//! so a one-byte token has `start == end`.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteIndex(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: ByteIndex,
    pub end: ByteIndex,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            start: ByteIndex(start),
            end: ByteIndex(end),
        }
    }

    pub fn len(self) -> u32 {
        self.end.0 - self.start.0 + 1
    }

    pub fn merge(self, other: Span) -> Span {
        let s = self.start.0.min(other.start.0);
        let e = self.end.0.max(other.end.0);
        Span::new(s, e)
    }

    /// The exact text this span covers in `source`.
    pub fn slice(self, source: &str) -> &str {
        &source[self.start.0 as usize..=self.end.0 as usize]
    }
}
