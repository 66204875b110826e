//! Integration tests for zz-extension
//!
//! These tests build temporary file structures and exercise the helpers the
//! way a downstream crate would, through the public `zz()` namespace.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use image::RgbaImage;
use zz_extension::config::{FileConfig, Settings};
use zz_extension::output::{JsonSizeEntry, JsonSizeReport, PathKind};
use zz_extension::ui::{
    Color, Corners, IndexPath, Point, Rect, ScrollView, Size, TableCell, TableView, ViewTree,
};
use zz_extension::{Error, ZzCompatible, ZzType};

/// Helper function to create a temporary directory structure for testing
fn create_test_directory() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a file with specified content
fn create_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    fs::write(path, content).expect("Failed to write file");
}

/// Helper function to create a directory
fn create_dir(path: &Path) {
    fs::create_dir_all(path).expect("Failed to create directory");
}

/// A small project-like tree: two source files and a nested build directory.
fn create_sample_tree(base: &Path) -> PathBuf {
    let root = base.join("sample");
    create_file(&root.join("README.md"), b"# sample\n");
    create_file(&root.join("src").join("main.rs"), b"fn main() {}\n");
    create_file(
        &root.join("build").join("debug").join("app.bin"),
        &vec![0u8; 64 * 1024],
    );
    create_dir(&root.join("empty"));
    root
}

// ── Paths ───────────────────────────────────────────────────────────────

#[test]
fn test_directory_bytes_counts_nested_files() {
    let temp_dir = create_test_directory();
    let root = create_sample_tree(temp_dir.path());

    let total = root.zz().directory_bytes().unwrap();
    let files: u64 = [
        root.join("README.md"),
        root.join("src").join("main.rs"),
        root.join("build").join("debug").join("app.bin"),
    ]
    .iter()
    .map(|p| p.zz().file_bytes().unwrap())
    .sum();

    assert_eq!(total, files);
    assert!(total >= 64 * 1024);
}

#[test]
fn test_directory_bytes_of_empty_directory() {
    let temp_dir = create_test_directory();
    let empty = temp_dir.path().join("empty");
    create_dir(&empty);

    assert_eq!(empty.zz().directory_bytes(), Some(0));
}

#[test]
fn test_directory_bytes_of_missing_directory() {
    let temp_dir = create_test_directory();
    let missing = temp_dir.path().join("does-not-exist");

    assert_eq!(missing.zz().directory_bytes(), None);
    assert_eq!(missing.zz().file_bytes(), None);
}

#[test]
fn test_directory_bytes_on_a_file_is_none() {
    let temp_dir = create_test_directory();
    let file = temp_dir.path().join("note.txt");
    create_file(&file, b"hello");

    assert_eq!(file.zz().directory_bytes(), None);
    assert!(file.zz().file_bytes().unwrap() >= 5);
}

#[cfg(unix)]
#[test]
fn test_directory_bytes_skips_unreadable_subdirectory() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = create_test_directory();
    let root = create_sample_tree(temp_dir.path());
    let locked = root.join("locked");
    create_file(&locked.join("secret.txt"), &vec![1u8; 8192]);

    let readable_total = root.zz().directory_bytes().unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let total = root.zz().directory_bytes();

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    // Root may bypass permissions; otherwise the locked file is not counted.
    let total = total.unwrap();
    assert!(total <= readable_total);
    assert!(total >= 64 * 1024);
}

#[test]
fn test_mime_types() {
    let cases = [
        ("photo.png", "image/png"),
        ("photo.JPG", "image/jpeg"),
        ("index.html", "text/html"),
        ("data.json", "application/json"),
        ("archive.unknownext", "application/octet-stream"),
        ("no_extension", "application/octet-stream"),
    ];

    for (name, expected) in cases {
        assert_eq!(Path::new(name).zz().mime_type(), expected, "{name}");
    }
}

#[test]
fn test_temp_directory_exists() {
    assert!(ZzType::<Path>::temp_directory().exists());
}

// ── Size reports ────────────────────────────────────────────────────────

#[test]
fn test_size_report_for_mixed_paths() {
    let temp_dir = create_test_directory();
    let root = create_sample_tree(temp_dir.path());

    let report = JsonSizeReport::from_entries(vec![
        JsonSizeEntry::measure(&root),
        JsonSizeEntry::measure(&root.join("README.md")),
        JsonSizeEntry::measure(&root.join("missing.txt")),
    ]);

    assert_eq!(report.entries[0].kind, PathKind::Directory);
    assert_eq!(report.entries[0].size, root.zz().directory_bytes());
    assert_eq!(report.entries[1].kind, PathKind::File);
    assert_eq!(report.entries[2].kind, PathKind::Missing);
    assert_eq!(report.summary.total_entries, 3);
    assert_eq!(report.summary.by_kind.len(), 3);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["entries"][2]["size"], serde_json::Value::Null);
    assert_eq!(json["summary"]["by_kind"]["file"]["count"], 1);
}

// ── Configuration ───────────────────────────────────────────────────────

#[test]
fn test_config_file_round_trip_into_settings() {
    let temp_dir = create_test_directory();
    let path = temp_dir.path().join("config.toml");
    create_file(
        &path,
        br#"
date_format = "%Y-%m-%d"

[random]
length = 32

[image]
budget = 50
"#,
    );

    let config = FileConfig::load_from(&path).unwrap();
    let settings = Settings::from_file(&config);

    assert_eq!(settings.date_format, "%Y-%m-%d");
    assert_eq!(settings.random_length, 32);
    assert_eq!(settings.image_budget_kb, 50);
    assert_eq!(settings.lorem_length, Settings::default().lorem_length);
}

#[test]
fn test_config_file_with_unknown_key_is_rejected() {
    let temp_dir = create_test_directory();
    let path = temp_dir.path().join("config.toml");
    create_file(&path, b"[image]\nquality = 10\n");

    assert!(FileConfig::load_from(&path).is_err());
}

// ── Strings, dates, numbers and sequences ───────────────────────────────

#[test]
fn test_string_helpers_from_outside_the_crate() {
    assert!("john@doe.com".zz().is_valid_email());
    assert!("https://google.com".zz().is_valid_https_url());
    assert_eq!("  hello \n".zz().trimmed(), "hello");
    assert_eq!("Hello".to_string().zz().char_at(-1), None);
    assert_eq!("Hello".zz().slicing(1, 3).as_deref(), Some("ell"));

    let random = ZzType::<str>::random(32);
    assert_eq!(random.len(), 32);
    assert!(random.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn test_string_date_and_format_agree() {
    let date = "18/10/2026 13:45".zz().date("%d/%m/%Y %H:%M").unwrap();
    assert_eq!(
        date.zz().string_with_format("%Y-%m-%d %H:%M").as_deref(),
        Some("2026-10-18 13:45")
    );
}

#[test]
fn test_numbers_and_sequences() {
    assert!((2.675_f64.zz().rounded(1) - 2.7).abs() < 1e-9);
    assert!(10_u8.zz().is_even());

    let names = ["ada", "grace", "linus"];
    let picked = names.zz().sample_many(10, true).unwrap();
    assert_eq!(picked.len(), 3);
    assert_eq!(names.zz().limit(2), vec![&"ada", &"grace"]);
}

// ── Images and views ────────────────────────────────────────────────────

#[test]
fn test_solid_image_saved_and_compressed() {
    let temp_dir = create_test_directory();
    let path = temp_dir.path().join("solid.png");

    let image = ZzType::<RgbaImage>::solid(ZzType::<Color>::hex("#3366CC"), Size::new(64.0, 32.0)).unwrap();
    image.save(&path).unwrap();

    let reopened = image::open(&path).unwrap().to_rgba8();
    assert_eq!(reopened.dimensions(), (64, 32));
    assert_eq!(reopened.get_pixel(10, 10).0, [0x33, 0x66, 0xCC, 0xFF]);

    let jpeg = reopened.zz().resize_to_kilobytes(4).unwrap();
    assert!(jpeg.len() <= 4 * 1024);
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);

    let thumbnail = reopened.zz().resize_to_fit(Size::new(16.0, 16.0)).unwrap();
    assert_eq!(thumbnail.dimensions(), (16, 8));
}

#[test]
fn test_scroll_view_snapshot_includes_offscreen_content() {
    let mut scroll = ScrollView::new(Rect::new(0.0, 0.0, 4.0, 4.0), Size::new(4.0, 12.0));
    let root = scroll.content_root();
    let footer = scroll
        .content_mut()
        .add_view(root, Rect::new(0.0, 8.0, 4.0, 4.0))
        .unwrap();
    scroll.content_mut().view_mut(footer).unwrap().background = Some(Color::WHITE);

    assert!(scroll.render_visible().unwrap().pixels().all(|p| p.0[3] == 0));

    let snapshot = scroll.zz_mut().snapshot().unwrap();
    assert_eq!(snapshot.dimensions(), (4, 12));
    assert_eq!(snapshot.get_pixel(1, 10).0, [255, 255, 255, 255]);
    assert_eq!(scroll.content_offset(), Point::ZERO);
}

#[test]
fn test_view_tree_lookups() {
    let mut tree = ViewTree::new();
    let root = tree.add_root(Rect::new(0.0, 0.0, 20.0, 20.0));
    tree.set_controller(root, "Settings");
    let field = tree.add_view(root, Rect::new(2.0, 2.0, 10.0, 4.0)).unwrap();
    assert!(tree.become_first_responder(field));

    let root_ref = tree.get(root).unwrap();
    let field_ref = tree.get(field).unwrap();
    assert_eq!(root_ref.zz().first_responder(), Some(field));
    assert_eq!(field_ref.zz().parent_controller(), Some("Settings"));
    assert_eq!(root_ref.zz().parent_controller(), None);
}

#[test]
fn test_rounded_card_snapshot() {
    let mut tree = ViewTree::new();
    let card = tree.add_root(Rect::new(0.0, 0.0, 12.0, 8.0));
    tree.view_mut(card).unwrap().background = Some(ZzType::<Color>::hex("3366CC"));
    tree.get_mut(card)
        .unwrap()
        .zz_mut()
        .round_corners(Corners::TOP_LEFT | Corners::TOP_RIGHT, 4.0);

    let image = tree.get(card).unwrap().zz().snapshot().unwrap();
    assert_eq!(image.get_pixel(0, 0).0[3], 0);
    assert_eq!(image.get_pixel(11, 0).0[3], 0);
    assert_eq!(image.get_pixel(0, 7).0, [0x33, 0x66, 0xCC, 0xFF]);
    assert_eq!(image.get_pixel(11, 7).0, [0x33, 0x66, 0xCC, 0xFF]);
}

#[test]
fn test_huge_solid_image_is_rejected() {
    assert!(ZzType::<RgbaImage>::solid(Color::WHITE, Size::new(4e9, 4e9)).is_none());
}

mod inbox {
    #[derive(Default)]
    pub struct Cell {
        pub subject: String,
    }

    impl zz_extension::ui::TableCell for Cell {}
}

mod archive {
    #[derive(Default)]
    pub struct Cell {
        pub subject: String,
    }

    impl zz_extension::ui::TableCell for Cell {}
}

#[test]
fn test_table_view_keeps_same_named_cells_apart() {
    let mut table = TableView::new();
    table.zz_mut().register::<inbox::Cell>();
    table.zz_mut().register::<archive::Cell>();

    let mut first: inbox::Cell = table.zz_mut().dequeue(IndexPath::new(0, 0)).unwrap();
    first.subject.push_str("hello");
    table.zz_mut().recycle(first);

    let archived: archive::Cell = table.zz_mut().dequeue(IndexPath::new(1, 0)).unwrap();
    assert!(archived.subject.is_empty());
    let reused: inbox::Cell = table.zz_mut().dequeue(IndexPath::new(0, 1)).unwrap();
    assert_eq!(reused.subject, "hello");
}

#[derive(Default)]
struct MessageCell {
    text: String,
}

impl TableCell for MessageCell {
    fn prepare_for_reuse(&mut self) {
        self.text.clear();
    }
}

#[test]
fn test_table_view_reuses_cells() {
    let mut table = TableView::new();

    let err = table.zz_mut().dequeue::<MessageCell>(IndexPath::new(0, 0));
    assert!(matches!(err, Err(Error::CellNotRegistered { .. })));

    table.zz_mut().register::<MessageCell>();
    let mut cell: MessageCell = table.zz_mut().dequeue(IndexPath::new(0, 0)).unwrap();
    cell.text.push_str("hi");
    table.zz_mut().recycle(cell);

    let reused: MessageCell = table.zz_mut().dequeue(IndexPath::new(0, 1)).unwrap();
    assert!(reused.text.is_empty());
}
