//! 变长行上的下界二分查找
//!
//! 二分的对象是字节偏移而非行号：pivot 可能落在某行中间，由
//! `row::scan_row` 还原出整行后再比较 key 列。
//!
//! 收缩规则是不对称的：
//! - key 列 >= 搜索键：`ub = row.start`，本行行首不会被排除
//! - key 列 <  搜索键：`lb = row.end + 1`，整行被跳过
//!
//! 复杂度 O(M · log2 N)，M 为平均行长，N 为行数。

use std::cmp::Ordering;

use tracing::trace;

use crate::common::{Result, SearchConfig};
use crate::row::{scan_row, ColumnBoundaries};
use crate::span::ByteSpan;

/// 返回第一个 key 列 >= `key` 的行的起始偏移；不存在时返回 `buf.len()`
pub fn lower_bound(
    buf:    &[u8],
    key:    ByteSpan<'_>,
    config: &SearchConfig,
    cols:   &mut ColumnBoundaries,
) -> Result<usize> {
    let mut lb = 0usize;
    let mut ub = buf.len();

    while lb < ub {
        let pos    = lb + (ub - lb) / 2;
        let row    = scan_row(buf, pos, lb, ub, config.seps, cols);
        let column = cols.column(buf, row, config.key_column)?;
        trace!(
            pos, lb, ub,
            row    = %ByteSpan::new(row.bytes(buf)),
            column = %column,
            "probe"
        );

        if key.compare(&column, config.fold) != Ordering::Greater {
            ub = row.start;
        } else {
            lb = row.next_start();
        }
    }

    Ok(lb.min(buf.len()))
}
