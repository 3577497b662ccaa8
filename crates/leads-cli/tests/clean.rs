//! End-to-end tests for the clean command.

use std::fs;
use std::path::Path;

use leads_cli::cli::CleanArgs;
use leads_cli::commands::run_clean;

fn write_file(path: &Path, content: &str) {
    fs::write(path, content).expect("write fixture");
}

fn clean_args(input: &Path, reference: Option<&Path>, output_dir: &Path) -> CleanArgs {
    CleanArgs {
        input: input.to_path_buf(),
        reference: reference.map(Path::to_path_buf),
        advisors: "X, Y".to_string(),
        care: String::new(),
        from: None,
        to: None,
        output_dir: Some(output_dir.to_path_buf()),
        dry_run: false,
        col_seq: 0,
        col_date: 1,
        col_name: 2,
        col_phone: 3,
        col_email: 4,
    }
}

const INPUT_CSV: &str = "\
STT,Ngày,User,Phone,Email,Source
1,01/03/2024,nguyễn văn an,+84912345678,An@Example.com,fb
2,02/03/2024,trần b,0912345678,b@example.com,web
3,03/03/2024,lê c,01623456789,c@example.com,fb
4,04/03/2024,phạm d,0987654321,KNOWN@ref.vn,web
5,05/03/2024,đỗ e,0966666666,e@example.com,fb
";

const REFERENCE_CSV: &str = "\
Tên,SĐT,Email
x,84966666666,someone@ref.vn
y,,known@ref.vn
";

#[test]
fn clean_with_reference_writes_both_sheets() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("batch.csv");
    let reference = dir.path().join("reference.csv");
    let output_dir = dir.path().join("out");
    write_file(&input, INPUT_CSV);
    write_file(&reference, REFERENCE_CSV);

    let args = clean_args(&input, Some(&reference), &output_dir);
    let result = run_clean(&args).expect("clean succeeds");

    assert_eq!(result.counts.input, 5);
    assert_eq!(result.counts.batch_duplicates, 1);
    assert_eq!(result.counts.reference_duplicates, 2);
    assert_eq!(result.counts.kept, 2);

    let cleaned = fs::read_to_string(output_dir.join("cleaned.csv")).expect("cleaned sheet");
    let lines: Vec<&str> = cleaned.lines().collect();
    assert_eq!(lines[0], "STT,Registered,Name,Phone,Email,Source,TV,CS");
    // Row 1 keeps its collapsed +84 phone and title-cased name; row 3's
    // retired prefix is remapped; the TV rotation alternates X, Y.
    assert_eq!(lines[1], "1,01/03/2024,Nguyễn Văn An,0912345678,an@example.com,fb,X,");
    assert_eq!(lines[2], "3,03/03/2024,Lê C,0323456789,c@example.com,fb,Y,");

    let removed = fs::read_to_string(output_dir.join("removed.csv")).expect("removed sheet");
    assert!(removed.contains("phone matches row 1"));
    assert!(removed.contains("email exists in reference data"));
    assert!(removed.contains("phone exists in reference data"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("batch.csv");
    let output_dir = dir.path().join("out");
    write_file(&input, INPUT_CSV);

    let mut args = clean_args(&input, None, &output_dir);
    args.dry_run = true;
    let result = run_clean(&args).expect("clean succeeds");

    assert!(result.outputs.is_empty());
    assert!(!output_dir.exists());
    assert_eq!(result.counts.kept, 4);
}

#[test]
fn date_window_filters_cleaned_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("batch.csv");
    let output_dir = dir.path().join("out");
    write_file(&input, INPUT_CSV);

    let mut args = clean_args(&input, None, &output_dir);
    args.from = Some("01/03/2024".to_string());
    args.to = Some("02/03/2024".to_string());
    let result = run_clean(&args).expect("clean succeeds");

    // Rows 3, 4, 5 fall outside the window; row 2 was a batch duplicate.
    assert_eq!(result.counts.outside_date_range, 3);
    assert_eq!(result.counts.kept, 1);
}

#[test]
fn missing_reference_columns_fail_the_run() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("batch.csv");
    let reference = dir.path().join("reference.csv");
    write_file(&input, INPUT_CSV);
    write_file(&reference, "Phone,Mail\n0912345678,a@b.vn\n");

    let args = clean_args(&input, Some(&reference), &dir.path().join("out"));
    let error = run_clean(&args).expect_err("reference without SĐT column");
    assert!(format!("{error:#}").contains("SĐT"));
}
