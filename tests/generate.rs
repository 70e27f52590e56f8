use std::{fs, path::Path};

use dotfont::{
    glyph::{Glyph, GlyphSource, Rasterizer},
    reader::FontStore,
    Error, FontGenerator, GeneratorConfig,
};
use serde_json::json;

/// Draws every character as a box with a per-character notch pattern, so
/// that different characters give different bitmaps.
struct PatternGlyphs;

impl GlyphSource for PatternGlyphs {
    fn glyph(&self, character: char, px: f32) -> Glyph {
        if character.is_whitespace() {
            return Glyph::empty();
        }
        let code = character as usize;
        let width = (px * 0.6) as usize;
        let height = (px * 0.8) as usize;
        let coverage = (0..width * height)
            .map(|i| {
                let (x, y) = (i % width, i / width);
                if (x * 7 + y * 3 + code) % 4 == 0 {
                    0
                } else {
                    255
                }
            })
            .collect();
        Glyph {
            xmin: (code % 3) as i32 - 1,
            width,
            height,
            coverage,
        }
    }
}

fn config(dir: &Path) -> GeneratorConfig {
    GeneratorConfig::default()
        .with_output_dir(dir.join("font_data"))
        .with_debug_images(false)
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn two_characters_one_size() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path()).with_sizes(&[16]).with_chars_per_file(2);
    let out = config.output_dir.clone();

    let report = FontGenerator::new(PatternGlyphs, config)
        .generate(&['A', 'B'])
        .unwrap();

    assert_eq!(report.blobs.len(), 1);
    assert_eq!(report.blobs[0].path, out.join("16x16_1.font"));
    assert_eq!(fs::read(out.join("16x16_1.font")).unwrap().len(), 64);
    assert_eq!(report.index_files, vec![out.join("index_1.json")]);
    assert_eq!(
        read_json(&out.join("index_1.json")),
        json!({
            "A": { "16": { "file": "16x16_1.font", "offset": 0 } },
            "B": { "16": { "file": "16x16_1.font", "offset": 32 } }
        })
    );
    assert!(!out.join("debug").exists());
}

#[test]
fn blob_count_and_lengths_follow_chunking() {
    let dir = tempfile::tempdir().unwrap();
    let chars: Vec<char> = "abcdefghijk".chars().collect();
    let config = config(dir.path())
        .with_sizes(&[8, 12, 24])
        .with_chars_per_file(4);
    let out = config.output_dir.clone();

    let report = FontGenerator::new(PatternGlyphs, config)
        .generate(&chars)
        .unwrap();

    for size in [8u32, 12, 24] {
        let blobs: Vec<_> = report.blobs.iter().filter(|b| b.size == size).collect();
        assert_eq!(blobs.len(), chars.len().div_ceil(4));
        for (chunk_idx, blob) in blobs.iter().enumerate() {
            let count = chars.len().min((chunk_idx + 1) * 4) - chunk_idx * 4;
            let expected = (count * (size * size) as usize).div_ceil(8);
            assert_eq!(blob.chars, count);
            assert_eq!(blob.bytes, expected);
            let path = out.join(format!("{size}x{size}_{}.font", chunk_idx + 1));
            assert_eq!(fs::read(path).unwrap().len(), expected);
        }
    }
    assert_eq!(report.index_files.len(), 3);
}

#[test]
fn index_round_trips_to_the_rasterized_bitmaps() {
    let dir = tempfile::tempdir().unwrap();
    let chars: Vec<char> = "Hello, 世界!".chars().collect();
    let config = config(dir.path())
        .with_sizes(&[12, 16, 20])
        .with_chars_per_file(3);
    let out = config.output_dir.clone();

    FontGenerator::new(PatternGlyphs, config)
        .generate(&chars)
        .unwrap();

    let store = FontStore::open(&out).unwrap();
    let rasterizer = Rasterizer::new(PatternGlyphs);
    for &character in &chars {
        for size in [12u32, 16, 20] {
            let (expected, _) = rasterizer.rasterize(character, size);
            assert_eq!(
                store.bitmap(character, size).unwrap(),
                expected,
                "'{character}' at {size}"
            );
        }
    }
    // 'l' appears twice, the index holds unique characters only
    assert_eq!(store.index().len(), chars.len() - 1);
    assert_eq!(store.verify().unwrap(), (chars.len() - 1) * 3);
}

#[test]
fn index_chunks_follow_first_seen_order() {
    let dir = tempfile::tempdir().unwrap();
    let chars: Vec<char> = "abacd".chars().collect();
    let config = config(dir.path()).with_sizes(&[8]).with_chars_per_file(2);
    let out = config.output_dir.clone();

    FontGenerator::new(PatternGlyphs, config)
        .generate(&chars)
        .unwrap();

    // blobs: [a b] [a c] [d]; index: [a b] [c d]
    assert_eq!(
        read_json(&out.join("index_1.json")),
        json!({
            "a": { "8": { "file": "8x8_2.font", "offset": 0 } },
            "b": { "8": { "file": "8x8_1.font", "offset": 8 } }
        })
    );
    assert_eq!(
        read_json(&out.join("index_2.json")),
        json!({
            "c": { "8": { "file": "8x8_2.font", "offset": 8 } },
            "d": { "8": { "file": "8x8_3.font", "offset": 0 } }
        })
    );
    assert!(!out.join("index_3.json").exists());
}

#[test]
fn repeated_runs_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let chars: Vec<char> = "0123456789".chars().collect();
    let config = config(dir.path()).with_chars_per_file(4);
    let out = config.output_dir.clone();
    let generator = FontGenerator::new(PatternGlyphs, config);

    let first = generator.generate(&chars).unwrap();
    let blobs: Vec<Vec<u8>> = first.blobs.iter().map(|b| fs::read(&b.path).unwrap()).collect();
    let index = fs::read(out.join("index_1.json")).unwrap();

    let second = generator.generate(&chars).unwrap();

    assert_eq!(first, second);
    for (blob, bytes) in second.blobs.iter().zip(blobs) {
        assert_eq!(fs::read(&blob.path).unwrap(), bytes);
    }
    assert_eq!(fs::read(out.join("index_1.json")).unwrap(), index);
}

#[test]
fn debug_images_are_written_per_character_and_size() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path())
        .with_sizes(&[16, 24])
        .with_debug_images(true);
    let out = config.output_dir.clone();

    let report = FontGenerator::new(PatternGlyphs, config)
        .generate(&['x', 'y'])
        .unwrap();

    assert_eq!(report.debug_saved, 4);
    assert_eq!(report.debug_failed, 0);
    for name in ["x_16.png", "x_24.png", "y_16.png", "y_24.png"] {
        assert!(out.join("debug").join(name).is_file(), "{name}");
    }
}

#[test]
fn debug_failures_do_not_stop_generation() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path())
        .with_sizes(&[16])
        .with_debug_images(true);
    let out = config.output_dir.clone();
    fs::create_dir_all(&out).unwrap();
    // a plain file where the debug directory should go
    fs::write(out.join("debug"), b"in the way").unwrap();

    let report = FontGenerator::new(PatternGlyphs, config)
        .generate(&['A', 'B'])
        .unwrap();

    assert_eq!(report.debug_saved, 0);
    assert_eq!(report.debug_failed, 2);
    assert_eq!(fs::read(out.join("16x16_1.font")).unwrap().len(), 64);
    assert!(out.join("index_1.json").is_file());
}

#[test]
fn unaligned_sizes_are_rejected_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path()).with_sizes(&[16, 10]);
    let out = config.output_dir.clone();

    let err = FontGenerator::new(PatternGlyphs, config)
        .generate(&['A'])
        .unwrap_err();

    assert!(matches!(err, Error::UnalignedSize(10)));
    assert!(!out.exists());
}

#[test]
fn empty_character_list_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());
    let out = config.output_dir.clone();

    let report = FontGenerator::new(PatternGlyphs, config)
        .generate(&[])
        .unwrap();

    assert!(report.blobs.is_empty());
    assert!(report.index_files.is_empty());
    assert_eq!(fs::read_dir(out).unwrap().count(), 0);
}

#[test]
fn unwritable_output_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("font_data");
    fs::write(&blocker, b"not a directory").unwrap();

    let err = FontGenerator::new(PatternGlyphs, config(dir.path()))
        .generate(&['A'])
        .unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
}
