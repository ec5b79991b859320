// ==========================================
// 备件库存管理系统 - 控制台入口
// ==========================================
// 用法:
//   sparepart-inventory import <file> [--db <path>]
//   sparepart-inventory list [--db <path>]
// ==========================================

use anyhow::{anyhow, Context};
use sparepart_inventory::api::InventoryApi;
use sparepart_inventory::config::{ConfigManager, InventoryConfigReader};
use sparepart_inventory::db::open_and_init;
use sparepart_inventory::domain::item::ImportProgress;
use sparepart_inventory::engine::{InventoryView, ViewConfig};
use sparepart_inventory::importer::{StockImporter, StockImporterImpl};
use sparepart_inventory::repository::SqliteStockRepository;
use sparepart_inventory::{logging, APP_NAME, VERSION};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

/// 默认数据库路径（数据目录下，首个运行时自动建库）
fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sparepart-inventory")
        .join("inventory.db")
}

/// 解析 --db 选项，返回 (位置参数, 数据库路径)
fn parse_args(args: &[String]) -> (Vec<&str>, PathBuf) {
    let mut positional = Vec::new();
    let mut db_path = default_db_path();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--db" {
            if let Some(path) = iter.next() {
                db_path = PathBuf::from(path);
            }
        } else {
            positional.push(arg.as_str());
        }
    }
    (positional, db_path)
}

fn print_usage() {
    println!("{} v{}", APP_NAME, VERSION);
    println!();
    println!("Pemakaian:");
    println!("  sparepart-inventory import <file.xlsx|file.csv> [--db <path>]");
    println!("  sparepart-inventory list [--db <path>]");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", APP_NAME);
    tracing::info!("系统版本: {}", VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (positional, db_path) = parse_args(&args);

    let command = match positional.first() {
        Some(c) => *c,
        None => {
            print_usage();
            return Ok(());
        }
    };

    // 打开数据库（父目录不存在时先创建）
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("gagal membuat direktori {}", parent.display()))?;
    }
    let db_path_str = db_path
        .to_str()
        .ok_or_else(|| anyhow!("path database tidak valid"))?;
    tracing::info!("使用数据库: {}", db_path_str);

    let conn = Arc::new(Mutex::new(open_and_init(db_path_str)?));
    let repo = SqliteStockRepository::from_connection(conn.clone());
    let config =
        ConfigManager::from_connection(conn.clone()).map_err(|e| anyhow!(e.to_string()))?;

    match command {
        "import" => {
            let file = positional
                .get(1)
                .ok_or_else(|| anyhow!("sebutkan file yang mau diimpor"))?;

            // 行级进度：每处理完一行刷新一次百分比
            let (tx, mut rx) = watch::channel(ImportProgress::default());
            let printer = tokio::spawn(async move {
                while rx.changed().await.is_ok() {
                    let progress = *rx.borrow();
                    print!(
                        "\rMemproses... {:>3}% ({}/{})",
                        (progress.fraction() * 100.0).round() as u32,
                        progress.processed,
                        progress.total
                    );
                    use std::io::Write;
                    let _ = std::io::stdout().flush();
                }
            });

            let importer = StockImporterImpl::new(repo, config).with_progress(tx);
            let ledger = importer.import_file(file).await?;
            drop(importer);
            let _ = printer.await;
            println!();

            println!("Hasil import:");
            println!("  Berhasil disimpan : {}", ledger.success);
            println!("  Gagal             : {}", ledger.failed);
            println!("  Dilewati (kosong) : {}", ledger.skipped);
            println!("  Waktu             : {} ms", ledger.elapsed.as_millis());
            if !ledger.errors.is_empty() {
                println!("Rincian kegagalan:");
                for err in &ledger.errors {
                    println!("  - {}", err);
                }
            }
        }
        "list" => {
            let limit = config
                .get_list_limit()
                .await
                .map_err(|e| anyhow!(e.to_string()))?;
            let view_config = ViewConfig {
                page_size: config
                    .get_page_size()
                    .await
                    .map_err(|e| anyhow!(e.to_string()))?,
                low_stock_threshold: config
                    .get_low_stock_threshold()
                    .await
                    .map_err(|e| anyhow!(e.to_string()))?,
            };

            let api = InventoryApi::new(repo);
            let items = api.load_working_set(limit).await?;

            let mut view = InventoryView::new(view_config);
            view.set_items(items);

            let stats = view.stats();
            println!("Inventaris Gudang");
            println!("  Total item : {}", stats.total_items);
            println!("  Nilai aset : Rp {:.0}", stats.total_asset);
            println!("  Stok kritis: {}", stats.low_stock);
            println!();
            println!(
                "Halaman 1/{} ({} item terfilter):",
                view.page_count().max(1),
                view.filtered_len()
            );
            for item in view.page_items() {
                println!(
                    "  [{}] {} | {} | {} | stok {} | Rp {:.0}",
                    item.part_no,
                    item.deskripsi,
                    item.merk,
                    item.kategori,
                    item.stok_barang,
                    item.harga_jual
                );
            }
        }
        other => {
            println!("Perintah tidak dikenal: {}", other);
            print_usage();
        }
    }

    Ok(())
}
