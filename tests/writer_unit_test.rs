//! File-backed tests for the statement writer.

use chrono::Utc;
use surql_seed::model::{Directive, Order, Statement, Table};
use surql_seed::writer::StatementWriter;
use tempfile::TempDir;

#[test]
fn test_statement_writer_creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("seed.surql");

    let mut writer = StatementWriter::create(&file_path).unwrap();
    writer.write_statement(&Directive::Import).unwrap();
    writer
        .write_statement(&Table::new("customer").unwrap())
        .unwrap();
    let stats = writer.finish().unwrap();

    let content = std::fs::read_to_string(&file_path).unwrap();
    assert_eq!(
        content,
        "OPTION IMPORT;\nDEFINE TABLE customer SCHEMALESS PERMISSIONS NONE;\n"
    );
    assert_eq!(stats.statements, 2);
    assert_eq!(stats.bytes, content.len() as u64);
}

#[test]
fn test_statement_writer_truncates_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("seed.surql");
    std::fs::write(&file_path, "stale content\nmore stale content\n").unwrap();

    let mut writer = StatementWriter::create(&file_path).unwrap();
    writer.write_statement(&Directive::Begin).unwrap();
    writer.finish().unwrap();

    let content = std::fs::read_to_string(&file_path).unwrap();
    assert_eq!(content, "BEGIN TRANSACTION;\n");
}

#[test]
fn test_statement_writer_many_statements() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("seed.surql");

    let mut writer = StatementWriter::create(&file_path).unwrap();
    for i in 0..10_000 {
        writer
            .write_statement(&format!("CREATE t:{} RETURN NONE;", i))
            .unwrap();
    }
    writer.finish().unwrap();

    let content = std::fs::read_to_string(&file_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 10_000);
    assert_eq!(lines[0], "CREATE t:0 RETURN NONE;");
    assert_eq!(lines[9_999], "CREATE t:9999 RETURN NONE;");
}

#[test]
fn test_statement_writer_unwritable_path() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("no_such_dir").join("seed.surql");
    assert!(StatementWriter::create(&file_path).is_err());
}

#[test]
fn test_statement_writer_counts_order_lines() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("seed.surql");

    let order = Order::new(0, vec![1, 2], 3, Utc::now(), true);
    assert_eq!(order.line_count(), 2);

    let mut writer = StatementWriter::create(&file_path).unwrap();
    writer.write_statement(&Directive::Begin).unwrap();
    writer.write_statement(&order).unwrap();
    writer.write_statement(&Directive::Commit).unwrap();
    let stats = writer.finish().unwrap();

    let content = std::fs::read_to_string(&file_path).unwrap();
    assert_eq!(stats.statements, 3);
    assert_eq!(stats.lines, 4);
    assert_eq!(content.lines().count() as u64, stats.lines);
    assert_eq!(stats.bytes, content.len() as u64);
}
