//! bsq — 在已排序的分隔符文本文件上做二分查找
//!
//! ```bash
//! # 第 1 列前缀匹配
//! bsq data.tsv key1 key2
//!
//! # 逗号分隔、第 2 列、精确匹配、忽略大小写
//! bsq -t, -k2 -wf data.csv Alice
//!
//! # 搜索键来自 stdin（每行一个）
//! cut -f1 queries.tsv | bsq data.tsv
//!
//! # 只校验文件是否按 key 列有序
//! bsq -c -k2 data.tsv
//! ```

use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mmap_bsearch::common::{BsqError, SearchConfig};
use mmap_bsearch::keys::{key_from_arg, read_keys};
use mmap_bsearch::query::Searcher;
use mmap_bsearch::source::{AccessPattern, MappedFile};

/// 基于 mmap 的有序文本二分查找（无索引）
#[derive(Parser, Debug)]
#[command(name = "bsq")]
#[command(version)]
#[command(about = "Binary search a sorted, delimiter-separated text file via mmap")]
struct Cli {
    /// 列分隔符（单字节，支持 \t \0 \\ 转义）
    #[arg(short = 't', long = "separator", value_name = "CHAR",
          default_value = "\\t", value_parser = parse_byte)]
    col_sep: u8,

    /// 行分隔符（单字节，支持 \n \0 转义）
    #[arg(long = "row-sep", value_name = "CHAR",
          default_value = "\\n", value_parser = parse_byte)]
    row_sep: u8,

    /// key 列序号，从 1 开始
    #[arg(short = 'k', long = "key", value_name = "N", default_value_t = 1,
          value_parser = clap::value_parser!(u64).range(1..))]
    key_column: u64,

    /// 精确匹配（默认前缀匹配）
    #[arg(short = 'w', long = "exact")]
    exact: bool,

    /// 比较前将 ASCII 字母折叠为大写
    #[arg(short = 'f', long = "fold")]
    fold: bool,

    /// 只校验文件是否有序，不做查找
    #[arg(short = 'c', long = "check", conflicts_with = "keys")]
    check: bool,

    /// 日志详细程度（-v debug，-vv trace）
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// 已按 key 列排序的输入文件
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// 搜索键；省略时从 stdin 逐行读取
    #[arg(value_name = "KEY")]
    keys: Vec<OsString>,
}

fn parse_byte(s: &str) -> std::result::Result<u8, String> {
    match s {
        "\\t"  => Ok(b'\t'),
        "\\n"  => Ok(b'\n'),
        "\\r"  => Ok(b'\r'),
        "\\0"  => Ok(0),
        "\\\\" => Ok(b'\\'),
        _ if s.len() == 1 => Ok(s.as_bytes()[0]),
        _ => Err(format!("expected a single byte, got {s:?}")),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();
}

fn build_config(cli: &Cli) -> Result<SearchConfig> {
    let key_column = usize::try_from(cli.key_column)
        .map_err(|_| BsqError::Config(format!("key column {} is too large", cli.key_column)))?;
    let mut config = SearchConfig::new()
        .with_col_sep(cli.col_sep)
        .with_row_sep(cli.row_sep)
        .with_key_column(key_column);
    if cli.exact { config = config.exact(); }
    if cli.fold  { config = config.folded(); }
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;
    let mapped = MappedFile::open(&cli.file)?;
    let mut searcher = Searcher::new(mapped.as_bytes(), config)?;

    if cli.check {
        mapped.advise(AccessPattern::Sequential);
        searcher.check()?;
        return Ok(());
    }

    mapped.advise(AccessPattern::Random);
    let keys: Vec<Vec<u8>> = if cli.keys.is_empty() {
        read_keys(io::stdin().lock(), cli.row_sep)?
    } else {
        cli.keys.into_iter().map(key_from_arg).collect()
    };

    let mut out = BufWriter::new(io::stdout().lock());
    searcher.search_all(&keys, &mut out)?;
    out.flush().map_err(BsqError::Output)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.downcast_ref::<BsqError>().is_some_and(BsqError::is_broken_pipe) => {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
