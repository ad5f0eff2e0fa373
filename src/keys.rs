//! 搜索键来源：命令行参数，或按行分隔符切分的输入流（默认 stdin）

use std::ffi::OsString;
use std::io::BufRead;

use tracing::warn;

use crate::common::{BsqError, Result};

/// 逐条读取 `reader` 中以 `sep` 分隔的记录
///
/// 末尾分隔符之后不产生空记录；中间的空记录保留（前缀模式下匹配所有行）。
pub fn read_keys<R: BufRead>(reader: R, sep: u8) -> Result<Vec<Vec<u8>>> {
    let keys = reader.split(sep)
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(BsqError::Input)?;
    if keys.is_empty() {
        warn!("no search keys on input");
    }
    Ok(keys)
}

/// 命令行参数转字节串；unix 下保留原始字节
pub fn key_from_arg(arg: OsString) -> Vec<u8> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStringExt;
        arg.into_vec()
    }
    #[cfg(not(unix))]
    {
        arg.to_string_lossy().into_owned().into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_separator() {
        let keys = read_keys(&b"alpha\nbeta\n"[..], b'\n').unwrap();
        assert_eq!(keys, vec![b"alpha".to_vec(), b"beta".to_vec()]);
    }

    #[test]
    fn last_record_without_separator() {
        let keys = read_keys(&b"a\nb"[..], b'\n').unwrap();
        assert_eq!(keys, vec![b"a".to_vec(), b"b".to_vec()]);
    }

    #[test]
    fn keeps_empty_records() {
        let keys = read_keys(&b"a\n\nb\n"[..], b'\n').unwrap();
        assert_eq!(keys.len(), 3);
        assert!(keys[1].is_empty());
    }

    #[test]
    fn custom_separator() {
        let keys = read_keys(&b"x\0y\0"[..], 0).unwrap();
        assert_eq!(keys, vec![b"x".to_vec(), b"y".to_vec()]);
    }

    #[test]
    fn empty_input_yields_no_keys() {
        assert!(read_keys(&b""[..], b'\n').unwrap().is_empty());
    }

    #[test]
    fn arg_bytes_preserved() {
        assert_eq!(key_from_arg(OsString::from("k-1")), b"k-1".to_vec());
    }
}
