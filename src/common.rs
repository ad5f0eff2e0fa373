//! 全局基础类型、查询配置与错误定义

use std::path::PathBuf;
use thiserror::Error;

// ── 默认值 ────────────────────────────────────────────────────────────────────

pub const DEFAULT_COL_SEP: u8 = b'\t';
pub const DEFAULT_ROW_SEP: u8 = b'\n';

// ── 枚举 ──────────────────────────────────────────────────────────────────────

/// key 列与搜索键的匹配方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// 搜索键是 key 列的前缀即匹配
    #[default]
    Prefix,
    /// key 列与搜索键逐字节相等
    Exact,
}

/// 比较前对每个字节施加的变换
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fold {
    /// 原样比较
    #[default]
    None,
    /// ASCII 转大写后比较（与 `sort -f` 的排序一致）
    Upper,
}

impl Fold {
    #[inline]
    pub fn apply(self, b: u8) -> u8 {
        match self {
            Self::None  => b,
            Self::Upper => b.to_ascii_uppercase(),
        }
    }
}

// ── 分隔符 ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    pub col: u8,
    pub row: u8,
}

impl Default for Separators {
    fn default() -> Self {
        Self { col: DEFAULT_COL_SEP, row: DEFAULT_ROW_SEP }
    }
}

// ── 查询配置 ──────────────────────────────────────────────────────────────────

/// 一次运行的只读配置；构造后经 `validate` 校验，再交给 `Searcher`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub seps:       Separators,
    /// key 列序号，从 1 开始
    pub key_column: usize,
    pub mode:       MatchMode,
    pub fold:       Fold,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            seps:       Separators::default(),
            key_column: 1,
            mode:       MatchMode::Prefix,
            fold:       Fold::None,
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self { Self::default() }

    pub fn with_col_sep(mut self, sep: u8) -> Self {
        self.seps.col = sep; self
    }
    pub fn with_row_sep(mut self, sep: u8) -> Self {
        self.seps.row = sep; self
    }
    pub fn with_key_column(mut self, n: usize) -> Self {
        self.key_column = n; self
    }
    pub fn exact(mut self) -> Self {
        self.mode = MatchMode::Exact; self
    }
    pub fn folded(mut self) -> Self {
        self.fold = Fold::Upper; self
    }

    pub fn validate(&self) -> Result<()> {
        if self.key_column == 0 {
            return Err(BsqError::Config("key column index must be >= 1".into()));
        }
        if self.seps.col == self.seps.row {
            return Err(BsqError::Config(format!(
                "column and row separators must differ (both are {:?})",
                self.seps.col as char,
            )));
        }
        Ok(())
    }
}

// ── 错误 ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum BsqError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("mmap failed: {}: {source}", .path.display())]
    Map {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read search keys: {0}")]
    Input(#[source] std::io::Error),
    #[error("not enough columns (need {required}, found {found}):\n{row}")]
    NotEnoughColumns { required: usize, found: usize, row: String },
    #[error("unordered at row {row_number}:\n{row}")]
    Unordered { row_number: u64, row: String },
    #[error("output error: {0}")]
    Output(#[source] std::io::Error),
}

impl BsqError {
    /// 下游关闭了管道（如 `bsq ... | head`），应安静退出
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Output(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, BsqError>;
