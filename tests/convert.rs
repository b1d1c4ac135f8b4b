use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, GenericImageView, ImageEncoder};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};
use webp2png::{convert, convert_with};
use webp2png::error::{ConvertError, ErrorKind};

// --- テスト用ヘルパー関数 ---

/// グラデーションのWebP (ロスレス, RGBA) を生成して書き込みます。
fn write_webp_fixture(path: &Path, width: u32, height: u32) {
    let mut buf = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            buf.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, 128, 255]);
        }
    }
    let mut bytes = Vec::new();
    WebPEncoder::new_lossless(&mut bytes)
        .write_image(&buf, width, height, ExtendedColorType::Rgba8)
        .expect("WebPのエンコードに失敗");
    fs::write(path, bytes).expect("Failed to write fixture");
}

fn setup() -> (TempDir, PathBuf) {
    let dir = tempdir().expect("Failed to create temp directory");
    let webp = dir.path().join("test.webp");
    write_webp_fixture(&webp, 100, 50);
    (dir, webp)
}

fn expect_kind(result: Result<(), ConvertError>, kind: ErrorKind) {
    match result {
        Err(e) => assert_eq!(e.kind(), kind, "unexpected error: {:?}", e),
        Ok(()) => panic!("{:?} を期待しましたが成功しました", kind),
    }
}

#[test]
fn converts_100x50_fixture() {
    let (dir, webp) = setup();
    let out = dir.path().join("out.png");

    convert(&webp, &out).expect("conversion should succeed");

    let meta = fs::metadata(&out).expect("output file should exist");
    assert!(meta.len() > 0, "output file should not be empty");
    let png = image::open(&out).expect("output should be a valid PNG");
    assert_eq!(png.dimensions(), (100, 50));
    assert_eq!(
        image::ImageFormat::from_path(&out).unwrap(),
        image::ImageFormat::Png
    );
}

/// ロスレスWebPからの変換では画素値もそのまま保たれる
#[test]
fn preserves_pixels_of_lossless_input() {
    let (dir, webp) = setup();
    let out = dir.path().join("out.png");

    convert(&webp, &out).unwrap();

    let source = image::open(&webp).unwrap().to_rgba8();
    let converted = image::open(&out).unwrap().to_rgba8();
    assert_eq!(source.as_raw(), converted.as_raw());
}

#[test]
fn empty_paths() {
    expect_kind(convert("", ""), ErrorKind::EmptyPath);
}

#[test]
fn non_existent_input() {
    let dir = tempdir().unwrap();
    expect_kind(
        convert("nonexistent.webp", dir.path().join("out.png")),
        ErrorKind::InvalidInput,
    );
}

#[test]
fn non_existent_output_directory() {
    let (dir, webp) = setup();
    expect_kind(
        convert(&webp, dir.path().join("nonexistent").join("out.png")),
        ErrorKind::InvalidOutput,
    );
}

#[test]
fn invalid_webp_data() {
    let dir = tempdir().unwrap();
    let invalid = dir.path().join("invalid.webp");
    let out = dir.path().join("out2.png");
    fs::write(&invalid, b"invalid webp data").unwrap();

    expect_kind(convert(&invalid, &out), ErrorKind::Decoding);
    assert!(!out.exists(), "no output should be written on decode failure");
}

/// デコードに失敗しても既存の出力ファイルは変更されない
#[test]
fn decode_failure_keeps_existing_output() {
    let dir = tempdir().unwrap();
    let invalid = dir.path().join("invalid.webp");
    let out = dir.path().join("out.png");
    fs::write(&invalid, b"RIFF\x10\x00\x00\x00WEBPVP8 garbage").unwrap();
    fs::write(&out, b"previous result").unwrap();

    expect_kind(convert(&invalid, &out), ErrorKind::Decoding);
    assert_eq!(fs::read(&out).unwrap(), b"previous result");
}

#[test]
fn overwrites_existing_output() {
    let (dir, webp) = setup();
    let out = dir.path().join("out.png");
    fs::write(&out, b"stale").unwrap();

    convert(&webp, &out).unwrap();
    assert_eq!(image::open(&out).unwrap().dimensions(), (100, 50));
}

#[test]
fn repeated_conversion_is_byte_identical() {
    let (dir, webp) = setup();
    let out = dir.path().join("out.png");

    convert(&webp, &out).unwrap();
    let first = fs::read(&out).unwrap();
    convert(&webp, &out).unwrap();
    let second = fs::read(&out).unwrap();

    assert_eq!(first, second);
}

#[test]
fn output_path_that_is_a_directory_is_invalid_output() {
    let (dir, webp) = setup();
    let target = dir.path().join("subdir");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep"), b"x").unwrap();

    expect_kind(convert(&webp, &target), ErrorKind::InvalidOutput);
}

/// 上書き禁止の場合は既存の出力を残し、一時ファイルも残さない
#[test]
fn convert_without_overwrite_keeps_existing_output() {
    let (dir, webp) = setup();
    let out = dir.path().join("out.png");
    fs::write(&out, b"previous result").unwrap();

    expect_kind(convert_with(&webp, &out, false), ErrorKind::InvalidOutput);
    assert_eq!(fs::read(&out).unwrap(), b"previous result");

    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["out.png", "test.webp"]);
}
