//! 有序性校验：线性扫描，key 列必须单调不减
//!
//! 发现第一处逆序即失败，不继续统计其余逆序。

use std::cmp::Ordering;

use crate::common::{BsqError, Result, SearchConfig};
use crate::row::{scan_row_from_start, ColumnBoundaries};
use crate::span::ByteSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckReport {
    /// 已校验的行数
    pub rows: u64,
}

pub fn check_sorted(
    buf:    &[u8],
    config: &SearchConfig,
    cols:   &mut ColumnBoundaries,
) -> Result<CheckReport> {
    let ub       = buf.len();
    let mut lb   = 0usize;
    let mut rows = 0u64;
    // 初始为空键，不会误判第一行
    let mut prev: ByteSpan<'_> = ByteSpan::EMPTY;

    while lb < ub {
        let row    = scan_row_from_start(buf, lb, ub, config.seps, cols);
        let column = cols.column(buf, row, config.key_column)?;
        rows += 1;
        if column.compare(&prev, config.fold) == Ordering::Less {
            return Err(BsqError::Unordered {
                row_number: rows,
                row:        String::from_utf8_lossy(row.bytes(buf)).into_owned(),
            });
        }
        prev = column;
        lb   = row.next_start();
    }
    Ok(CheckReport { rows })
}
