//! 从下界位置向后逐行输出匹配行

use std::cmp::Ordering;
use std::io::Write;

use crate::common::{BsqError, MatchMode, Result, SearchConfig};
use crate::row::{scan_row_from_start, ColumnBoundaries};
use crate::span::ByteSpan;

/// `key` 与某行 key 列是否匹配
pub fn is_match(key: &ByteSpan<'_>, column: &ByteSpan<'_>, config: &SearchConfig) -> bool {
    match config.mode {
        MatchMode::Exact  => key.compare(column, config.fold) == Ordering::Equal,
        MatchMode::Prefix => key.is_prefix_of(column, config.fold),
    }
}

/// 自 `from`（必须是行首）起输出连续的匹配行，遇到第一行不匹配即停止
///
/// 每行写出行内容 + 行分隔符；返回输出的行数。
pub fn emit_matches<W: Write>(
    buf:    &[u8],
    from:   usize,
    key:    ByteSpan<'_>,
    config: &SearchConfig,
    cols:   &mut ColumnBoundaries,
    out:    &mut W,
) -> Result<usize> {
    let ub      = buf.len();
    let mut lb  = from;
    let mut hit = 0usize;

    while lb < ub {
        let row    = scan_row_from_start(buf, lb, ub, config.seps, cols);
        let column = cols.column(buf, row, config.key_column)?;
        if !is_match(&key, &column, config) {
            break;
        }
        out.write_all(row.bytes(buf)).map_err(BsqError::Output)?;
        out.write_all(&[config.seps.row]).map_err(BsqError::Output)?;
        hit += 1;
        lb = row.next_start();
    }
    Ok(hit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(buf: &[u8], from: usize, key: &str, cfg: &SearchConfig) -> (usize, Vec<u8>) {
        let mut cols = ColumnBoundaries::new();
        let mut out  = Vec::new();
        let n = emit_matches(buf, from, ByteSpan::from(key), cfg, &mut cols, &mut out).unwrap();
        (n, out)
    }

    #[test]
    fn exact_vs_prefix() {
        let buf = b"ab\t1\nabc\t2\nabd\t3\nb\t4\n";
        let (n, out) = emit(buf, 0, "ab", &SearchConfig::new().exact());
        assert_eq!(n, 1);
        assert_eq!(out, b"ab\t1\n");

        let (n, out) = emit(buf, 0, "ab", &SearchConfig::new());
        assert_eq!(n, 3);
        assert_eq!(out, b"ab\t1\nabc\t2\nabd\t3\n");
    }

    #[test]
    fn stops_at_first_mismatch() {
        let buf = b"a\nb\na\n";
        let (n, out) = emit(buf, 0, "a", &SearchConfig::new());
        assert_eq!(n, 1);
        assert_eq!(out, b"a\n");
    }

    #[test]
    fn appends_row_separator_to_last_row() {
        let buf = b"k\tv";
        let (n, out) = emit(buf, 0, "k", &SearchConfig::new());
        assert_eq!(n, 1);
        assert_eq!(out, b"k\tv\n");
    }

    #[test]
    fn folded_match() {
        let buf = b"HELLO\tx\n";
        assert_eq!(emit(buf, 0, "hello", &SearchConfig::new().exact()).0, 0);
        assert_eq!(emit(buf, 0, "hello", &SearchConfig::new().exact().folded()).0, 1);
        assert_eq!(emit(buf, 0, "hel", &SearchConfig::new().folded()).0, 1);
    }

    #[test]
    fn from_end_emits_nothing() {
        let buf = b"a\n";
        assert_eq!(emit(buf, buf.len(), "", &SearchConfig::new()), (0, vec![]));
    }

    #[test]
    fn uses_configured_row_separator() {
        let buf = b"a,1\0a,2\0b,3\0";
        let cfg = SearchConfig::new().with_col_sep(b',').with_row_sep(0);
        let (n, out) = emit(buf, 0, "a", &cfg);
        assert_eq!(n, 2);
        assert_eq!(out, b"a,1\0a,2\0");
    }
}
