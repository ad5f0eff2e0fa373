//! 输入文件的只读映射
//!
//! 核心查询逻辑只看到 `&[u8]`；打开文件、mmap、解除映射都在这里完成。
//! 长度为 0 的文件不调用 mmap，直接视为空缓冲区。

use std::fs::File;
use std::path::{Path, PathBuf};

use memmap2::{Mmap, MmapOptions};
use tracing::debug;

use crate::common::{BsqError, Result};

/// 预期的访问模式（仅 unix 下作为 madvise 提示，失败时忽略）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPattern {
    /// 二分查找：随机跳读
    Random,
    /// 有序性校验：顺序扫描
    Sequential,
}

pub struct MappedFile {
    path: PathBuf,
    /// `None` 表示空文件
    mmap: Option<Mmap>,
}

impl MappedFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)
            .map_err(|source| BsqError::Open { path: path.clone(), source })?;
        let len = file.metadata()
            .map_err(|source| BsqError::Open { path: path.clone(), source })?
            .len();

        let mmap = if len == 0 {
            None
        } else {
            // SAFETY: 映射只读；运行期间假定文件不被修改或截断
            let m = unsafe { MmapOptions::new().map(&file) }
                .map_err(|source| BsqError::Map { path: path.clone(), source })?;
            Some(m)
        };
        debug!(path = %path.display(), len, "mapped input file");
        Ok(Self { path, mmap })
    }

    pub fn path(&self) -> &Path { &self.path }

    pub fn as_bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    pub fn len(&self)      -> usize { self.as_bytes().len() }
    pub fn is_empty(&self) -> bool  { self.as_bytes().is_empty() }

    #[cfg(unix)]
    pub fn advise(&self, pattern: AccessPattern) {
        use memmap2::Advice;
        let Some(m) = &self.mmap else { return };
        let advice = match pattern {
            AccessPattern::Random     => Advice::Random,
            AccessPattern::Sequential => Advice::Sequential,
        };
        if let Err(e) = m.advise(advice) {
            debug!(error = %e, ?pattern, "madvise failed, ignoring");
        }
    }

    #[cfg(not(unix))]
    pub fn advise(&self, _pattern: AccessPattern) {}
}
