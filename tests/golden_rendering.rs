use std::fs;
use std::path::PathBuf;

use image::{Rgba, RgbaImage};
use shield_assets::rendering::{rasterize, FontBook};
use shield_assets::{AssetKind, Branding};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(format!("{name}.txt"));
    p
}

fn render(kind: AssetKind) -> RgbaImage {
    let scene = kind.build(&Branding::none());
    let shot = rasterize(&scene.display_list, scene.size, &FontBook::bitmap()).expect("rasterize");
    shot.decode().expect("decode")
}

/// `(x, y, rgba)` samples; blank lines and `#` comments are skipped.
fn parse_samples(text: &str) -> Vec<(u32, u32, Rgba<u8>)> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(|l| {
            let v: Vec<u32> = l
                .split_whitespace()
                .map(|n| n.parse().expect("numeric sample"))
                .collect();
            assert_eq!(v.len(), 6, "bad sample line {l:?}");
            let c = |i: usize| v[i] as u8;
            (v[0], v[1], Rgba([c(2), c(3), c(4), c(5)]))
        })
        .collect()
}

fn format_samples(samples: &[(u32, u32, Rgba<u8>)]) -> String {
    let mut out = String::from("# x y r g b a\n");
    for (x, y, p) in samples {
        out.push_str(&format!("{x} {y} {} {} {} {}\n", p[0], p[1], p[2], p[3]));
    }
    out
}

/// Scenes rendered with the bitmap font have fixed colors at known points:
/// gradient rows, card and button fills, write-through translucent fills
/// and the dimmed chat. Run with UPDATE_GOLDENS=1 to refresh the values at
/// the listed coordinates.
#[test]
fn golden_pixels_match_fixtures() {
    for kind in AssetKind::ALL {
        let expected_path = golden_path(kind.name());
        let text = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
            panic!("missing golden {:?} for {}: {e}", expected_path, kind.name())
        });
        let samples = parse_samples(&text);
        assert!(!samples.is_empty(), "{:?} has no samples", expected_path);
        let img = render(kind);

        if std::env::var("UPDATE_GOLDENS").is_ok() {
            let actual: Vec<_> = samples
                .iter()
                .map(|&(x, y, _)| (x, y, *img.get_pixel(x, y)))
                .collect();
            fs::write(&expected_path, format_samples(&actual)).expect("write golden");
            println!("Updated golden: {:?}", expected_path);
            continue;
        }

        for (x, y, want) in samples {
            assert_eq!(*img.get_pixel(x, y), want, "{} at ({x}, {y})", kind.name());
        }
    }
}

#[test]
fn every_asset_has_a_golden() {
    for kind in AssetKind::ALL {
        assert!(golden_path(kind.name()).is_file(), "no golden for {}", kind.name());
    }
}

#[test]
fn rendering_is_deterministic() {
    let fonts = FontBook::bitmap();
    let scene = AssetKind::Marquee.build(&Branding::none());
    let a = rasterize(&scene.display_list, scene.size, &fonts).unwrap();
    let b = rasterize(&scene.display_list, scene.size, &fonts).unwrap();
    assert_eq!(a.sha256_hex(), b.sha256_hex());
}
