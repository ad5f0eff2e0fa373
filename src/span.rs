//! 字节区间视图与比较
//!
//! `ByteSpan` 只借用底层字节（mmap 区域或搜索键），不做任何拷贝。
//! 比较与前缀判断都直接在区间上逐字节进行，每个字节先经过 `Fold` 变换。

use std::cmp::Ordering;
use std::fmt;

use crate::common::Fold;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct ByteSpan<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteSpan<'a> {
    pub const EMPTY: ByteSpan<'static> = ByteSpan { bytes: &[] };

    pub fn new(bytes: &'a [u8]) -> Self { Self { bytes } }

    pub fn as_bytes(&self) -> &'a [u8] { self.bytes }
    pub fn len(&self)      -> usize    { self.bytes.len() }
    pub fn is_empty(&self) -> bool     { self.bytes.is_empty() }

    /// 字典序比较（按变换后的字节）
    ///
    /// 先以第一个不同字节定序；一方先耗尽时，较短的一方在前。
    pub fn compare(&self, that: &ByteSpan<'_>, fold: Fold) -> Ordering {
        for (&a, &b) in self.bytes.iter().zip(that.bytes) {
            let (a, b) = (fold.apply(a), fold.apply(b));
            if a != b {
                return a.cmp(&b);
            }
        }
        self.bytes.len().cmp(&that.bytes.len())
    }

    /// `self` 是否为 `that` 的前缀（按变换后的字节）
    pub fn is_prefix_of(&self, that: &ByteSpan<'_>, fold: Fold) -> bool {
        if self.bytes.len() > that.bytes.len() {
            return false;
        }
        self.bytes.iter()
            .zip(that.bytes)
            .all(|(&a, &b)| fold.apply(a) == fold.apply(b))
    }

    /// 用于错误信息的文本形式（非 UTF-8 字节替换为 U+FFFD）
    pub fn to_lossy_string(&self) -> String {
        String::from_utf8_lossy(self.bytes).into_owned()
    }
}

impl<'a> From<&'a [u8]> for ByteSpan<'a> {
    fn from(bytes: &'a [u8]) -> Self { Self::new(bytes) }
}

impl<'a> From<&'a str> for ByteSpan<'a> {
    fn from(s: &'a str) -> Self { Self::new(s.as_bytes()) }
}

impl fmt::Debug for ByteSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_lossy_string())
    }
}

impl fmt::Display for ByteSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.bytes))
    }
}
