//! # mmap-bsearch 使用案例
//!
//! 1. 生成一个按第 1 列排序的 TSV 文件
//! 2. mmap 打开
//! 3. 精确查找 / 前缀查找 / 折叠大小写查找
//! 4. 有序性校验（正例 + 反例）

use std::io::Write;

use mmap_bsearch::common::{Result, SearchConfig};
use mmap_bsearch::query::Searcher;
use mmap_bsearch::source::{AccessPattern, MappedFile};

fn show(title: &str, out: &[u8]) {
    println!("    {title}:");
    if out.is_empty() {
        println!("      (无匹配)");
    }
    for line in String::from_utf8_lossy(out).lines() {
        println!("      {line}");
    }
}

fn main() -> Result<()> {
    println!("═══════════════════════════════════════════════════════════");
    println!("   mmap-bsearch 演示                                        ");
    println!("═══════════════════════════════════════════════════════════\n");

    // =========================================================================
    // 1. 生成数据文件
    // =========================================================================
    println!("【1】生成排序后的 cities.tsv ...");
    let path = std::env::temp_dir().join("mmap-bsearch-demo-cities.tsv");
    {
        let mut rows = vec![
            ("Berlin",    "DE", "3645000"),
            ("Bern",      "CH", "134000"),
            ("Bordeaux",  "FR", "257000"),
            ("Lisbon",    "PT", "545000"),
            ("London",    "GB", "8982000"),
            ("Lyon",      "FR", "516000"),
            ("Madrid",    "ES", "3223000"),
            ("Paris",     "FR", "2161000"),
        ];
        rows.sort_by(|a, b| a.0.cmp(b.0));
        let mut f = std::fs::File::create(&path).expect("create demo file");
        for (city, cc, pop) in rows {
            writeln!(f, "{city}\t{cc}\t{pop}").expect("write demo row");
        }
    }
    println!("    path = {}\n", path.display());

    // =========================================================================
    // 2. mmap 打开
    // =========================================================================
    println!("【2】mmap 打开 ...");
    let mapped = MappedFile::open(&path)?;
    mapped.advise(AccessPattern::Random);
    println!("    {} bytes\n", mapped.len());

    // =========================================================================
    // 3. 查找
    // =========================================================================
    println!("【3】查找 ...");
    let mut out = Vec::new();

    let mut exact = Searcher::new(mapped.as_bytes(), SearchConfig::new().exact())?;
    exact.search(b"Lyon", &mut out)?;
    show("精确 \"Lyon\"", &out);

    out.clear();
    let mut prefix = Searcher::new(mapped.as_bytes(), SearchConfig::new())?;
    prefix.search(b"Ber", &mut out)?;
    show("前缀 \"Ber\"", &out);

    out.clear();
    prefix.search_all([&b"L"[..], &b"Zurich"[..]], &mut out)?;
    show("前缀 \"L\" + \"Zurich\"", &out);

    out.clear();
    let mut folded = Searcher::new(mapped.as_bytes(), SearchConfig::new().exact().folded())?;
    folded.search(b"PARIS", &mut out)?;
    show("折叠大小写 \"PARIS\"", &out);
    println!();

    // =========================================================================
    // 4. 有序性校验
    // =========================================================================
    println!("【4】有序性校验 ...");
    let report = prefix.check()?;
    println!("    按第 1 列: ✓ {} 行有序", report.rows);

    let mut by_country = Searcher::new(mapped.as_bytes(), SearchConfig::new().with_key_column(2))?;
    match by_country.check() {
        Ok(_)  => println!("    按第 2 列: ✓ 有序"),
        Err(e) => println!("    按第 2 列: ✗ {e}"),
    }

    let _ = std::fs::remove_file(&path);
    Ok(())
}
