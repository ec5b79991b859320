// ==========================================
// 备件库存管理系统 - 批量导入集成测试
// ==========================================
// 覆盖: 台账计账 / 跳过与拒绝 / 运行内与跨运行查重 /
//       备用件号 / 行级进度 / 文件级失败中止
// ==========================================

mod test_helpers;

use sparepart_inventory::config::InventoryConfigReader;
use sparepart_inventory::domain::item::ImportProgress;
use sparepart_inventory::importer::{StockImporter, StockImporterImpl, MSG_PART_NO_EXISTS};
use sparepart_inventory::repository::{SqliteStockRepository, StockRepository};
use sparepart_inventory::{ImportError, Kategori, NewStockItem};
use std::error::Error;
use tokio::sync::watch;

// ==========================================
// MockConfigReader - 测试用配置读取器
// ==========================================
struct MockConfigReader;

#[async_trait::async_trait]
impl InventoryConfigReader for MockConfigReader {
    async fn get_low_stock_threshold(&self) -> Result<u32, Box<dyn Error>> {
        Ok(5)
    }

    async fn get_page_size(&self) -> Result<usize, Box<dyn Error>> {
        Ok(15)
    }

    async fn get_list_limit(&self) -> Result<usize, Box<dyn Error>> {
        Ok(5000)
    }

    async fn get_auto_code_prefix(&self) -> Result<String, Box<dyn Error>> {
        Ok("VR_AUTO".to_string())
    }

    async fn get_default_brand(&self) -> Result<String, Box<dyn Error>> {
        Ok("VR_AUTO".to_string())
    }

    async fn get_default_position(&self) -> Result<String, Box<dyn Error>> {
        Ok("-".to_string())
    }
}

fn build_importer(db_path: &str) -> StockImporterImpl<SqliteStockRepository, MockConfigReader> {
    let repo = SqliteStockRepository::new(db_path).expect("创建Repository失败");
    StockImporterImpl::new(repo, MockConfigReader)
}

// 列顺序: part_no,merk,kategori,deskripsi,posisi,stok_barang,harga_modal,margin

#[tokio::test]
async fn test_mixed_rows_accounting_and_progress() {
    let (_db_file, db_path) = test_helpers::create_test_db().unwrap();

    // 5 行有效 + 2 行无效（缺 deskripsi / 文件内重复件号）
    let csv = test_helpers::create_test_csv(&[
        "PN-1,Yamaha,Oli,Oli mesin 10W-40,A-01,10,45000,20",
        "PN-2,Honda,Kampas,Kampas rem depan,A-02,3,30000,25",
        "PN-3,Aspira,Ban,Ban luar 80/90,B-01,12,150000,15",
        "PN-4,Federal,,Oli gardan,,2,20000,30",
        "PN-5,Yamaha,Mesin,Busi iridium,C-03,6,60000,10",
        "PN-6,Honda,Mesin,,C-04,1,10000,10",
        "PN-1,Lain,Oli,Oli duplikat,A-09,1,5000,5",
    ])
    .unwrap();

    let (tx, rx) = watch::channel(ImportProgress::default());
    let importer = build_importer(&db_path).with_progress(tx);

    let ledger = importer.import_file(csv.path()).await.unwrap();

    // 台账: 所有行都被尝试，单行失败不中止
    assert_eq!(ledger.total_rows, 7);
    assert_eq!(ledger.success, 5);
    assert_eq!(ledger.failed, 2);
    assert_eq!(ledger.skipped, 0);
    assert_eq!(ledger.errors.len(), 2);

    // 进度必须到达 100%
    let final_progress = *rx.borrow();
    assert_eq!(final_progress.processed, 7);
    assert_eq!(final_progress.total, 7);
    assert_eq!(final_progress.fraction(), 1.0);

    // 落库验证
    let repo = SqliteStockRepository::new(&db_path).unwrap();
    let items = repo.list(100).await.unwrap();
    assert_eq!(items.len(), 5);
}

#[tokio::test]
async fn test_missing_deskripsi_cites_display_row_number() {
    let (_db_file, db_path) = test_helpers::create_test_db().unwrap();

    // 第 1 个数据行有效（表格第 2 行），第 2 个数据行缺 deskripsi（表格第 3 行）
    let csv = test_helpers::create_test_csv(&[
        "PN-1,Yamaha,Oli,Oli mesin,A-01,10,45000,20",
        "PN-2,Honda,Kampas,,A-02,3,30000,25",
    ])
    .unwrap();

    let ledger = build_importer(&db_path).import_file(csv.path()).await.unwrap();

    assert_eq!(ledger.failed, 1);
    assert_eq!(ledger.errors[0].row, 3);
    assert_eq!(ledger.errors[0].message, "Nama Barang (Deskripsi) kosong");
    assert_eq!(
        ledger.errors[0].to_string(),
        "Baris 3: Nama Barang (Deskripsi) kosong"
    );
}

#[tokio::test]
async fn test_identity_blank_row_skipped_not_counted() {
    let (_db_file, db_path) = test_helpers::create_test_db().unwrap();

    // 第 2 个数据行 part_no/merk/deskripsi 全空但 posisi/stok 有值:
    // 属于空白填充行，不计成功也不计失败
    let csv = test_helpers::create_test_csv(&[
        "PN-1,Yamaha,Oli,Oli mesin,A-01,10,45000,20",
        ",,,,Z-99,7,,",
        "PN-2,Honda,Kampas,Kampas rem,A-02,3,30000,25",
    ])
    .unwrap();

    let ledger = build_importer(&db_path).import_file(csv.path()).await.unwrap();

    assert_eq!(ledger.total_rows, 3);
    assert_eq!(ledger.success, 2);
    assert_eq!(ledger.failed, 0);
    assert_eq!(ledger.skipped, 1);
}

#[tokio::test]
async fn test_duplicate_part_no_in_file() {
    let (_db_file, db_path) = test_helpers::create_test_db().unwrap();

    let csv = test_helpers::create_test_csv(&[
        "PN-9,Yamaha,Oli,Oli mesin,A-01,10,45000,20",
        "PN-9,Honda,Kampas,Kampas rem,A-02,3,30000,25",
    ])
    .unwrap();

    let ledger = build_importer(&db_path).import_file(csv.path()).await.unwrap();

    // 第一次出现成功，第二次按文件内重复拒绝
    assert_eq!(ledger.success, 1);
    assert_eq!(ledger.failed, 1);
    assert_eq!(ledger.errors[0].row, 3);
    assert_eq!(
        ledger.errors[0].message,
        "Kode 'PN-9' ganda di dalam file Excel ini."
    );
}

#[tokio::test]
async fn test_cross_run_duplicate_rewritten_message() {
    let (_db_file, db_path) = test_helpers::create_test_db().unwrap();

    // 预置一条已有记录（等价于上一次运行的结果）
    let repo = SqliteStockRepository::new(&db_path).unwrap();
    repo.create(NewStockItem {
        part_no: "PN-OLD".to_string(),
        merk: "Yamaha".to_string(),
        kategori: Kategori::Oli,
        deskripsi: "Oli mesin".to_string(),
        posisi: "-".to_string(),
        stok_barang: 4,
        harga_modal: 45_000.0,
        margin: 20.0,
        harga_jual: 54_000.0,
    })
    .await
    .unwrap();

    let csv = test_helpers::create_test_csv(&[
        "PN-OLD,Honda,Kampas,Kampas rem,A-02,3,30000,25",
    ])
    .unwrap();

    let ledger = build_importer(&db_path).import_file(csv.path()).await.unwrap();

    // 存储层唯一约束拦截，提示改写为面向用户的文案
    assert_eq!(ledger.success, 0);
    assert_eq!(ledger.failed, 1);
    assert_eq!(ledger.errors[0].message, MSG_PART_NO_EXISTS);
}

#[tokio::test]
async fn test_fallback_codes_generated_for_missing_part_no() {
    let (_db_file, db_path) = test_helpers::create_test_db().unwrap();

    // 件号为空或 "-" 都应得到备用件号
    let csv = test_helpers::create_test_csv(&[
        ",Yamaha,Oli,Oli mesin,A-01,10,45000,20",
        "-,Honda,Kampas,Kampas rem,A-02,3,30000,25",
    ])
    .unwrap();

    let ledger = build_importer(&db_path).import_file(csv.path()).await.unwrap();
    assert_eq!(ledger.success, 2);

    let repo = SqliteStockRepository::new(&db_path).unwrap();
    let items = repo.list(100).await.unwrap();
    assert_eq!(items.len(), 2);
    for item in &items {
        let digits = item
            .part_no
            .strip_prefix("VR_AUTO_")
            .unwrap_or_else(|| panic!("前缀不符: {}", item.part_no));
        assert_eq!(digits.len(), 6);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
    assert_ne!(items[0].part_no, items[1].part_no);
}

#[tokio::test]
async fn test_numeric_cleaning_and_derived_price_persisted() {
    let (_db_file, db_path) = test_helpers::create_test_db().unwrap();

    // 成本带货币前缀，毛利带百分号，库存非数值 → 归 0
    let csv = test_helpers::create_test_csv(&[
        "PN-7,Yamaha,Oli,Oli mesin,A-01,banyak,Rp10000,25 %",
    ])
    .unwrap();

    let ledger = build_importer(&db_path).import_file(csv.path()).await.unwrap();
    assert_eq!(ledger.success, 1);

    let repo = SqliteStockRepository::new(&db_path).unwrap();
    let items = repo.list(10).await.unwrap();
    let item = &items[0];
    assert_eq!(item.stok_barang, 0);
    assert_eq!(item.harga_modal, 10_000.0);
    assert_eq!(item.margin, 25.0);
    assert_eq!(item.harga_jual, 12_500.0);
}

#[tokio::test]
async fn test_file_level_failure_aborts_before_run() {
    let (_db_file, db_path) = test_helpers::create_test_db().unwrap();

    let result = build_importer(&db_path)
        .import_file("tidak_ada.csv")
        .await;

    assert!(matches!(result, Err(ImportError::FileNotFound(_))));
}
