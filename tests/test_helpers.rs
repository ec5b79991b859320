// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的数据库初始化、测试文件生成等功能
// ==========================================

use std::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;

/// 创建临时测试数据库并初始化 schema
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().unwrap().to_string();

    // 初始化 schema（建表幂等）
    let conn = sparepart_inventory::db::open_and_init(&db_path)?;
    drop(conn);

    Ok((temp_file, db_path))
}

/// 创建临时 CSV 文件（模板表头 + 给定数据行）
pub fn create_test_csv(rows: &[&str]) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut temp_file = tempfile::Builder::new().suffix(".csv").tempfile()?;

    writeln!(
        temp_file,
        "part_no,merk,kategori,deskripsi,posisi,stok_barang,harga_modal,margin"
    )?;
    for row in rows {
        writeln!(temp_file, "{}", row)?;
    }
    temp_file.flush()?;

    Ok(temp_file)
}
