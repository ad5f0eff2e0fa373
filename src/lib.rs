//! # mmap-bsearch
//!
//! 在已排序、按分隔符组织的大文本文件上做点查/前缀查询：文件整体 mmap，
//! 直接在原始字节上二分查找，不建任何索引，也不把文件读入进程内存。
//!
//! ## 整体架构
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  bsq (main.rs)   clap 参数 · tracing 初始化 · 退出码        │
//! │     │                                                      │
//! │     ├── source::MappedFile   文件 → 只读 mmap (&[u8])       │
//! │     ├── keys                 搜索键：argv 或 stdin          │
//! │     ▼                                                      │
//! │  query::Searcher  (配置 + 缓冲区 + 复用的列边界序列)         │
//! │     │                                                      │
//! │     ├── search::lower_bound   字节偏移上的下界二分          │
//! │     │        │                                             │
//! │     ├── emit::emit_matches    从下界逐行向后输出匹配行       │
//! │     │        │                                             │
//! │     └── check::check_sorted   线性校验 key 列单调不减       │
//! │              │                                             │
//! │     row    ──┤  行首/行尾/列起点扫描 + 第 N 列提取          │
//! │     span   ──┘  ByteSpan：按 Fold 变换的字典序比较/前缀判断  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 示例
//!
//! ```
//! use mmap_bsearch::common::SearchConfig;
//! use mmap_bsearch::query::Searcher;
//!
//! let data = b"b\tX\nd\tY\nf\tZ\n";
//! let mut s = Searcher::new(data, SearchConfig::new().exact()).unwrap();
//! let mut out = Vec::new();
//! s.search(b"d", &mut out).unwrap();
//! assert_eq!(out, b"d\tY\n");
//! ```

// ── 核心：扫描 / 比较 / 查找 ───────────────────────────────────────────────────
pub mod common;
pub mod span;
pub mod row;
pub mod search;
pub mod emit;
pub mod check;
pub mod query;

// ── 外围：输入文件与搜索键 ─────────────────────────────────────────────────────
pub mod source;
pub mod keys;
