use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use pdf_text_compress::config::Settings;
use pdf_text_compress::{convert_file, extract_file, has_text, ConvertError};

fn output_path() -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/output");
    fs::create_dir_all(&dir).expect("Failed to create output directory");
    dir
}

/// Write a PDF with one page per entry, each drawing its text with Courier
fn write_fixture(path: &Path, pages: &[&str]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let mut operations = Vec::new();
        if !text.is_empty() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new("Td", vec![72.into(), 720.into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*text)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("Failed to encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path).expect("Failed to write fixture PDF");
}

fn fresh_fixture(name: &str, pages: &[&str]) -> PathBuf {
    let path = output_path().join(format!("{}.pdf", name));
    write_fixture(&path, pages);
    path
}

fn remove_if_exists(path: &Path) {
    if path.exists() {
        fs::remove_file(path).expect("Failed to remove stale output");
    }
}

#[test]
fn test_extract_hello_world_fixture() {
    let input = fresh_fixture("extract_hello", &["Hello world", ""]);

    let pages = extract_file(&input).expect("Failed to extract text");

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].as_str().trim(), "Hello world");
    assert!(pages[1].is_blank());
    assert!(has_text(&pages));
}

#[test]
fn test_extract_all_empty_fixture() {
    let input = fresh_fixture("extract_empty", &["", ""]);

    let pages = extract_file(&input).expect("Failed to extract text");

    assert_eq!(pages.len(), 2);
    assert!(!has_text(&pages));
}

#[test]
fn test_convert_file_writes_text_only_pdf() {
    let input = fresh_fixture("convert_hello", &["Hello world", ""]);
    let output = output_path().join("convert_hello_out.pdf");
    remove_if_exists(&output);

    let summary =
        convert_file(&input, &output, &Settings::default()).expect("Failed to convert PDF");

    assert_eq!(summary.layout.source_pages, 2);
    assert_eq!(summary.layout.destination_pages, 2);
    assert_eq!(summary.layout.lines_drawn, 1);

    let bytes = fs::read(&output).expect("Output PDF not created");
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(summary.sizes.output_bytes, bytes.len() as u64);

    // The output is itself a readable PDF with one page per source page
    let written = Document::load(&output).expect("Output PDF is not parseable");
    assert_eq!(written.get_pages().len(), 2);
}

#[test]
fn test_convert_file_no_text_writes_nothing() {
    let input = fresh_fixture("convert_empty", &["", ""]);
    let output = output_path().join("convert_empty_out.pdf");
    remove_if_exists(&output);

    let result = convert_file(&input, &output, &Settings::default());

    assert!(matches!(result, Err(ConvertError::NoText)));
    assert!(!output.exists());
}

#[test]
fn test_convert_file_rejects_corrupt_input() {
    let input = output_path().join("corrupt.pdf");
    fs::write(&input, b"this is not a PDF at all").expect("Failed to write input");
    let output = output_path().join("corrupt_out.pdf");
    remove_if_exists(&output);

    let result = convert_file(&input, &output, &Settings::default());

    assert!(matches!(result, Err(ConvertError::Extract(_))));
    assert!(!output.exists());
}

#[test]
fn test_convert_file_unwritable_output_is_a_render_error() {
    let input = fresh_fixture("convert_unwritable", &["Hello world"]);
    let output = output_path().join("no_such_dir").join("out.pdf");

    let result = convert_file(&input, &output, &Settings::default());

    assert!(matches!(result, Err(ConvertError::Render(_))));
    assert!(!output.exists());
}

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pdf-text-compress"))
}

#[test]
fn test_cli_success_uses_default_output_name() {
    let input = fresh_fixture("cli_hello", &["Hello world", ""]);
    let expected_output = output_path().join("cli_hello_text_only.pdf");
    remove_if_exists(&expected_output);

    let result = binary()
        .arg(&input)
        .output()
        .expect("Failed to run pdf-text-compress");

    assert!(
        result.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    assert!(expected_output.exists());

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Processing 2 pages..."));
    assert!(stdout.contains("  Page 1: "));
    assert!(stdout.contains("  Page 2: "));
    assert!(stdout.contains("Original size:"));
    assert!(stdout.contains("Size reduction:"));
}

#[test]
fn test_cli_explicit_output_path() {
    let input = fresh_fixture("cli_explicit", &["Some words on a page"]);
    let output = output_path().join("cli_explicit_small.pdf");
    remove_if_exists(&output);

    let status = binary()
        .arg(&input)
        .arg(&output)
        .status()
        .expect("Failed to run pdf-text-compress");

    assert!(status.success());
    assert!(output.exists());
}

#[test]
fn test_cli_no_text_exits_with_one() {
    let input = fresh_fixture("cli_empty", &["", ""]);
    let expected_output = output_path().join("cli_empty_text_only.pdf");
    remove_if_exists(&expected_output);

    let result = binary()
        .arg(&input)
        .output()
        .expect("Failed to run pdf-text-compress");

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("No text found"));
    assert!(!expected_output.exists());
}

#[test]
fn test_cli_missing_arguments_exits_with_one() {
    let status = binary().status().expect("Failed to run pdf-text-compress");
    assert_eq!(status.code(), Some(1));
}

#[test]
fn test_cli_missing_input_exits_with_one() {
    let result = binary()
        .arg(output_path().join("does_not_exist.pdf"))
        .output()
        .expect("Failed to run pdf-text-compress");

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("not found"));
}

#[test]
fn test_cli_unwritable_output_exits_with_one() {
    let input = fresh_fixture("cli_unwritable", &["Hello world"]);
    let output = output_path().join("no_such_dir").join("out.pdf");

    let result = binary()
        .arg(&input)
        .arg(&output)
        .output()
        .expect("Failed to run pdf-text-compress");

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("Failed to create text-only PDF"));
    assert!(!output.exists());
}

#[test]
fn test_cli_margin_larger_than_page_exits_with_one() {
    let input = fresh_fixture("cli_margin", &["Hello world"]);
    let expected_output = output_path().join("cli_margin_text_only.pdf");
    remove_if_exists(&expected_output);

    let result = binary()
        .arg(&input)
        .args(["--margin", "500"])
        .output()
        .expect("Failed to run pdf-text-compress");

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("Margins leave no room"));
    assert!(!expected_output.exists());
}
