//! 行/列边界扫描（无索引）
//!
//! 给定缓冲区内任意字节位置，向两侧扫描分隔符，得到所在行的起止位置以及
//! 每一列的起始偏移。代价与行长成正比，与行数无关。
//!
//! ```text
//!          lb                  pos                     ub
//!           │  ◄── find_row_begin │ find_row_end ──►    │
//!   ... \n  k1 \t v1 \t v2 ........... v3 \n  ...
//!           ▲      ▲      ▲                 ▲
//!         b[0]   b[1]   b[2]            end (b[3] = end + 1)
//! ```
//!
//! 列 i（从 1 开始）覆盖 `[b[i-1], b[i] - 1)`，不含其后的分隔符。

use std::collections::VecDeque;

use memchr::memchr2_iter;

use crate::common::{BsqError, Result, Separators};
use crate::span::ByteSpan;

// ── RowBounds ─────────────────────────────────────────────────────────────────

/// 一行的字节范围：`start` 含，`end` 不含（指向行分隔符或缓冲区末尾）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBounds {
    pub start: usize,
    pub end:   usize,
}

impl RowBounds {
    pub fn bytes<'a>(&self, buf: &'a [u8]) -> &'a [u8] { &buf[self.start..self.end] }

    /// 下一行的起始偏移；最后一行没有换行符时会超出缓冲区 1 字节
    pub fn next_start(&self) -> usize { self.end + 1 }
}

// ── ColumnBoundaries ──────────────────────────────────────────────────────────

/// 当前行各列起始偏移 + 尾哨兵（`end + 1`），每扫描一行前清空复用
#[derive(Debug, Default, Clone)]
pub struct ColumnBoundaries {
    starts: VecDeque<usize>,
}

impl ColumnBoundaries {
    pub fn new() -> Self { Self::default() }

    pub fn clear(&mut self) { self.starts.clear(); }

    /// 列数 + 1（含哨兵）
    pub fn len(&self)      -> usize { self.starts.len() }
    pub fn is_empty(&self) -> bool  { self.starts.is_empty() }

    pub fn num_columns(&self) -> usize { self.starts.len().saturating_sub(1) }

    /// 按从左到右顺序的全部边界（含哨兵）
    pub fn starts(&mut self) -> &[usize] { self.starts.make_contiguous() }

    /// 取第 `index` 列（从 1 开始）
    ///
    /// 列数不足说明输入文件不符合约定的布局，返回结构错误。
    pub fn column<'a>(
        &self,
        buf:   &'a [u8],
        row:   RowBounds,
        index: usize,
    ) -> Result<ByteSpan<'a>> {
        if index == 0 || self.starts.len() < index + 1 {
            return Err(BsqError::NotEnoughColumns {
                required: index,
                found:    self.num_columns(),
                row:      String::from_utf8_lossy(row.bytes(buf)).into_owned(),
            });
        }
        let first = self.starts[index - 1];
        let last  = self.starts[index] - 1;
        Ok(ByteSpan::new(&buf[first..last]))
    }
}

// ── 扫描 ──────────────────────────────────────────────────────────────────────

/// 从 `pos` 向前扫描 `buf[lb..pos]`，返回行首偏移
///
/// 遇到的列分隔符按从左到右的顺序插入 `cols` 前端，最后插入行首。
pub fn find_row_begin(
    buf:  &[u8],
    pos:  usize,
    lb:   usize,
    seps: Separators,
    cols: &mut ColumnBoundaries,
) -> usize {
    let mut first = lb;
    for i in memchr2_iter(seps.col, seps.row, &buf[lb..pos]).rev() {
        let at = lb + i;
        if buf[at] == seps.row {
            first = at + 1;
            break;
        }
        cols.starts.push_front(at + 1);
    }
    cols.starts.push_front(first);
    first
}

/// 从 `pos` 向后扫描 `buf[pos..ub]`，返回行尾偏移（行分隔符位置或 `ub`）
///
/// 列分隔符追加到 `cols` 末尾，最后追加哨兵 `end + 1`。
pub fn find_row_end(
    buf:  &[u8],
    pos:  usize,
    ub:   usize,
    seps: Separators,
    cols: &mut ColumnBoundaries,
) -> usize {
    let mut last = ub;
    for i in memchr2_iter(seps.col, seps.row, &buf[pos..ub]) {
        let at = pos + i;
        if buf[at] == seps.row {
            last = at;
            break;
        }
        cols.starts.push_back(at + 1);
    }
    cols.starts.push_back(last + 1);
    last
}

/// 找出包含 `pos` 的行（`lb <= pos < ub`，且 `lb` 为某行行首）
pub fn scan_row(
    buf:  &[u8],
    pos:  usize,
    lb:   usize,
    ub:   usize,
    seps: Separators,
    cols: &mut ColumnBoundaries,
) -> RowBounds {
    debug_assert!(lb <= pos && pos < ub && ub <= buf.len());
    cols.clear();
    let start = find_row_begin(buf, pos, lb, seps, cols);
    let end   = find_row_end(buf, pos, ub, seps, cols);
    RowBounds { start, end }
}

/// 已知 `start` 是行首时只需向后扫描
pub fn scan_row_from_start(
    buf:   &[u8],
    start: usize,
    ub:    usize,
    seps:  Separators,
    cols:  &mut ColumnBoundaries,
) -> RowBounds {
    debug_assert!(start <= ub && ub <= buf.len());
    cols.clear();
    cols.starts.push_back(start);
    let end = find_row_end(buf, start, ub, seps, cols);
    RowBounds { start, end }
}
