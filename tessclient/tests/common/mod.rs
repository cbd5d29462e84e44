#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use image::{GrayImage, Luma};

static INIT: Once = Once::new();

/// Initialize tracing subscriber once for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load a fixture file as bytes
pub fn load_fixture(name: &str) -> Vec<u8> {
    let path = fixture_path(name);
    fs::read(&path).unwrap_or_else(|e| panic!("Failed to load fixture '{name}': {e}"))
}

/// Ensure all fixture files exist, generating them if necessary
pub fn ensure_fixtures() {
    let fixtures_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures");

    fs::create_dir_all(&fixtures_dir).expect("Failed to create fixtures directory");

    let hello_path = fixtures_dir.join("hello.png");
    if !hello_path.exists() {
        render_text(&["HELLO WORLD"]).save(&hello_path).expect("Failed to write hello.png");
    }

    let digits_path = fixtures_dir.join("digits.png");
    if !digits_path.exists() {
        render_text(&["HELLO 123", "WORLD 321"])
            .save(&digits_path)
            .expect("Failed to write digits.png");
    }
}

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
const SCALE: u32 = 8;
const MARGIN: u32 = 40;

fn glyph(c: char) -> [&'static str; 7] {
    match c {
        'H' => ["#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"],
        'E' => ["#####", "#....", "#....", "####.", "#....", "#....", "#####"],
        'L' => ["#....", "#....", "#....", "#....", "#....", "#....", "#####"],
        'O' => [".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."],
        'W' => ["#...#", "#...#", "#...#", "#.#.#", "#.#.#", "##.##", "#...#"],
        'R' => ["####.", "#...#", "#...#", "####.", "#.#..", "#..#.", "#...#"],
        'D' => ["####.", "#...#", "#...#", "#...#", "#...#", "#...#", "####."],
        '1' => ["..#..", ".##..", "..#..", "..#..", "..#..", "..#..", ".###."],
        '2' => [".###.", "#...#", "....#", "...#.", "..#..", ".#...", "#####"],
        '3' => ["####.", "....#", "....#", ".###.", "....#", "....#", "####."],
        ' ' => ["....."; 7],
        other => panic!("No glyph for {other:?}"),
    }
}

/// Render lines of text in a blocky 5x7 font, black on white.
pub fn render_text(lines: &[&str]) -> GrayImage {
    let advance = (GLYPH_WIDTH + 1) * SCALE;
    let line_height = (GLYPH_HEIGHT + 4) * SCALE;
    let columns = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u32;
    let width = MARGIN * 2 + columns * advance;
    let height = MARGIN * 2 + lines.len() as u32 * line_height;

    let mut img = GrayImage::from_pixel(width, height, Luma([255]));
    for (row, line) in lines.iter().enumerate() {
        let top = MARGIN + row as u32 * line_height;
        for (col, c) in line.chars().enumerate() {
            let left = MARGIN + col as u32 * advance;
            for (gy, bits) in glyph(c).iter().enumerate() {
                for (gx, bit) in bits.chars().enumerate() {
                    if bit != '#' {
                        continue;
                    }
                    for dy in 0..SCALE {
                        for dx in 0..SCALE {
                            let x = left + gx as u32 * SCALE + dx;
                            let y = top + gy as u32 * SCALE + dy;
                            img.put_pixel(x, y, Luma([0]));
                        }
                    }
                }
            }
        }
    }
    img
}
