use gptable::consts::MAX_GENOTYPE_BITS;
use gptable::error::GpError;
use gptable::optimizer::mutation::random_table;
use gptable::table::persist::{load_table, read_table, save_table, write_table};
use gptable::table::GpTable;
use std::fs;
use std::io::Cursor;

fn render(table: &GpTable) -> String {
    let mut buf = Vec::new();
    write_table(table, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_one_bit_table_exact_output() {
    let table = GpTable::from_buckets(1, vec![vec![0], vec![1]]).unwrap();
    assert_eq!(render(&table), "GTYPE,PTYPE_ID\n0,0\n1,1\n");
}

#[test]
fn test_rows_follow_genotype_order_not_bucket_order() {
    let table = GpTable::from_buckets(2, vec![vec![3, 1], vec![2], vec![0]]).unwrap();
    assert_eq!(render(&table), "GTYPE,PTYPE_ID\n00,2\n01,0\n10,1\n11,0\n");
}

#[test]
fn test_serialization_is_idempotent() {
    let mut rng = fastrand::Rng::with_seed(21);
    let table = random_table(&mut rng, 5, 4).unwrap();
    assert_eq!(render(&table), render(&table));
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("gptable.csv");

    let mut rng = fastrand::Rng::with_seed(8);
    let table = random_table(&mut rng, 4, 3).unwrap();
    save_table(&table, &path).unwrap();

    let first = fs::read(&path).unwrap();
    save_table(&table, &path).unwrap();
    assert_eq!(first, fs::read(&path).unwrap());

    let loaded = load_table(&path, Some(3)).unwrap();
    assert_eq!(loaded.phenotype_map(), table.phenotype_map());
    assert_eq!(loaded.bucket_sizes(), table.bucket_sizes());
}

#[test]
fn test_read_infers_dimensions() {
    let csv = "GTYPE,PTYPE_ID\n000,0\n001,1\n010,1\n011,2\n100,0\n101,2\n110,2\n111,2\n";
    let table = read_table(Cursor::new(csv), None).unwrap();
    assert_eq!(table.genotype_bits(), 3);
    assert_eq!(table.phenotype_count(), 3);
    assert_eq!(table.bucket_sizes(), vec![2, 2, 4]);

    // Explicit count keeps a trailing empty phenotype.
    let table = read_table(Cursor::new(csv), Some(4)).unwrap();
    assert_eq!(table.bucket_sizes(), vec![2, 2, 4, 0]);
}

#[test]
fn test_read_rejects_malformed_tables() {
    let bad_header = "GENO,PHENO\n0,0\n1,1\n";
    assert!(matches!(
        read_table(Cursor::new(bad_header), None),
        Err(GpError::Validation(_))
    ));

    let duplicate = "GTYPE,PTYPE_ID\n0,0\n0,1\n";
    assert!(read_table(Cursor::new(duplicate), None).is_err());

    let missing = "GTYPE,PTYPE_ID\n00,0\n01,1\n10,0\n";
    assert!(read_table(Cursor::new(missing), None).is_err());

    let mixed_width = "GTYPE,PTYPE_ID\n00,0\n1,1\n";
    assert!(matches!(
        read_table(Cursor::new(mixed_width), None),
        Err(GpError::Parse(_))
    ));

    let bad_pid = "GTYPE,PTYPE_ID\n0,zero\n1,1\n";
    assert!(matches!(
        read_table(Cursor::new(bad_pid), None),
        Err(GpError::Parse(_))
    ));

    let too_many = "GTYPE,PTYPE_ID\n0,0\n1,5\n";
    assert!(matches!(
        read_table(Cursor::new(too_many), Some(2)),
        Err(GpError::Validation(_))
    ));

    assert!(read_table(Cursor::new("GTYPE,PTYPE_ID\n"), None).is_err());

    // Widths past the supported genotype length are refused before any allocation.
    let too_wide = format!("GTYPE,PTYPE_ID\n{},0\n", "1".repeat(70));
    assert!(matches!(
        read_table(Cursor::new(too_wide), None),
        Err(GpError::Validation(_))
    ));

    let just_too_wide = format!("GTYPE,PTYPE_ID\n{},0\n", "0".repeat(MAX_GENOTYPE_BITS as usize + 1));
    assert!(matches!(
        read_table(Cursor::new(just_too_wide), None),
        Err(GpError::Validation(_))
    ));

    let empty_width = "GTYPE,PTYPE_ID\n,0\n";
    assert!(matches!(
        read_table(Cursor::new(empty_width), None),
        Err(GpError::Validation(_))
    ));
}
