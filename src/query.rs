//! 查询入口：把配置和映射缓冲区绑在一起
//!
//! 每个搜索键独立执行「二分下界 → 向后输出匹配行」，按输入顺序串行处理。
//! 缓冲区只读，唯一可变状态是复用的列边界序列。

use std::io::Write;

use tracing::debug;

use crate::check::{check_sorted, CheckReport};
use crate::common::{Result, SearchConfig};
use crate::emit::emit_matches;
use crate::row::ColumnBoundaries;
use crate::search::lower_bound;
use crate::span::ByteSpan;

pub struct Searcher<'a> {
    buf:    &'a [u8],
    config: SearchConfig,
    cols:   ColumnBoundaries,
}

impl<'a> Searcher<'a> {
    /// 校验配置后构造
    pub fn new(buf: &'a [u8], config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { buf, config, cols: ColumnBoundaries::new() })
    }

    pub fn config(&self) -> &SearchConfig { &self.config }

    /// 第一个 key 列 >= `key` 的行首偏移（无则为缓冲区长度）
    pub fn lower_bound(&mut self, key: &[u8]) -> Result<usize> {
        lower_bound(self.buf, ByteSpan::new(key), &self.config, &mut self.cols)
    }

    /// 查找一个键并把匹配行写入 `out`，返回匹配行数
    pub fn search<W: Write>(&mut self, key: &[u8], out: &mut W) -> Result<usize> {
        if self.buf.is_empty() {
            return Ok(0);
        }
        let key  = ByteSpan::new(key);
        let from = lower_bound(self.buf, key, &self.config, &mut self.cols)?;
        let hit  = emit_matches(self.buf, from, key, &self.config, &mut self.cols, out)?;
        debug!(key = %key, from, hit, "search done");
        Ok(hit)
    }

    /// 依次查找所有键；任何一个键出错即终止
    pub fn search_all<W, I, K>(&mut self, keys: I, out: &mut W) -> Result<usize>
    where
        W: Write,
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        let mut total = 0;
        for key in keys {
            total += self.search(key.as_ref(), out)?;
        }
        Ok(total)
    }

    pub fn check(&mut self) -> Result<CheckReport> {
        let report = check_sorted(self.buf, &self.config, &mut self.cols)?;
        debug!(rows = report.rows, "input is sorted");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::BsqError;

    const BUF: &[u8] = b"b\tX\nd\tY\nf\tZ\n";

    fn run(buf: &[u8], cfg: SearchConfig, key: &str) -> Vec<u8> {
        let mut s   = Searcher::new(buf, cfg).unwrap();
        let mut out = Vec::new();
        s.search(key.as_bytes(), &mut out).unwrap();
        out
    }

    #[test]
    fn exact_lookup() {
        assert_eq!(run(BUF, SearchConfig::new().exact(), "d"), b"d\tY\n");
    }

    #[test]
    fn empty_prefix_matches_everything() {
        assert_eq!(run(BUF, SearchConfig::new(), ""), BUF);
    }

    #[test]
    fn missing_key_prints_nothing() {
        assert!(run(BUF, SearchConfig::new(), "c").is_empty());
        assert!(run(BUF, SearchConfig::new(), "zz").is_empty());
    }

    #[test]
    fn full_column_matches_both_modes_strict_prefix_only_prefix() {
        let buf = b"abc\t1\n";
        assert_eq!(run(buf, SearchConfig::new(), "abc"), b"abc\t1\n");
        assert_eq!(run(buf, SearchConfig::new().exact(), "abc"), b"abc\t1\n");
        assert_eq!(run(buf, SearchConfig::new(), "ab"), b"abc\t1\n");
        assert!(run(buf, SearchConfig::new().exact(), "ab").is_empty());
    }

    #[test]
    fn case_fold_symmetry() {
        let buf = b"ALPHA\t1\nbeta\t2\nGamma\t3\n";
        assert_eq!(run(buf, SearchConfig::new().exact().folded(), "Beta"), b"beta\t2\n");
        assert!(run(buf, SearchConfig::new().exact(), "Beta").is_empty());
        assert_eq!(run(buf, SearchConfig::new().folded(), "gam"), b"Gamma\t3\n");
    }

    #[test]
    fn empty_buffer() {
        let mut s = Searcher::new(b"", SearchConfig::new()).unwrap();
        let mut out = Vec::new();
        assert_eq!(s.search(b"", &mut out).unwrap(), 0);
        assert!(out.is_empty());
        assert_eq!(s.check().unwrap().rows, 0);
    }

    #[test]
    fn search_all_in_input_order() {
        let mut s   = Searcher::new(BUF, SearchConfig::new()).unwrap();
        let mut out = Vec::new();
        let n = s.search_all(["f", "b", "x"], &mut out).unwrap();
        assert_eq!(n, 2);
        assert_eq!(out, b"f\tZ\nb\tX\n");
    }

    #[test]
    fn repeated_query_is_identical() {
        let mut s = Searcher::new(BUF, SearchConfig::new()).unwrap();
        let (mut a, mut b) = (Vec::new(), Vec::new());
        s.search(b"d", &mut a).unwrap();
        s.search(b"d", &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn structural_error_stops_all_keys() {
        let buf = b"a\t1\nb\t2\n";
        let mut s   = Searcher::new(buf, SearchConfig::new().with_key_column(3)).unwrap();
        let mut out = Vec::new();
        let err = s.search_all(["a", "b"], &mut out).unwrap_err();
        assert!(matches!(err, BsqError::NotEnoughColumns { required: 3, .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn invalid_config_rejected() {
        let err = Searcher::new(BUF, SearchConfig::new().with_key_column(0)).err().unwrap();
        assert!(matches!(err, BsqError::Config(_)));
    }

    #[test]
    fn check_mode() {
        let mut ok = Searcher::new(b"a\nb\nc\n", SearchConfig::new()).unwrap();
        assert_eq!(ok.check().unwrap().rows, 3);
        let mut bad = Searcher::new(b"b\na\nc\n", SearchConfig::new()).unwrap();
        assert!(matches!(bad.check(), Err(BsqError::Unordered { row_number: 2, .. })));
    }
}
