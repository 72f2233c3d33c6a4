//! Pixel-level checks on rendered scenes

use image::{Rgba, RgbaImage};
use shield_assets::rendering::FontBook;
use shield_assets::{AssetGenerator, AssetKind, Branding, FontSearch, GeneratorConfig};

fn render(kind: AssetKind) -> RgbaImage {
    let config = GeneratorConfig {
        fonts: FontSearch::none(),
        ..GeneratorConfig::default()
    };
    let generator =
        AssetGenerator::with_parts(config, FontBook::bitmap(), Branding::none()).expect("generator");
    let shot = generator.render(kind).expect("render");
    assert_eq!(&shot.png_data[0..8], b"\x89PNG\r\n\x1a\n");
    shot.decode().expect("decode")
}

#[test]
fn gradient_runs_from_top_to_bottom_color() {
    let img = render(AssetKind::BlockReview);
    assert_eq!(*img.get_pixel(0, 0), Rgba([12, 44, 96, 255]));
    assert_eq!(*img.get_pixel(0, 799), Rgba([12, 98, 140, 255]));
    assert_eq!(*img.get_pixel(1279, 0), Rgba([12, 44, 96, 255]));
}

#[test]
fn browser_card_is_painted_opaque() {
    for kind in [AssetKind::Redaction, AssetKind::Settings] {
        let img = render(kind);
        assert_eq!(*img.get_pixel(700, 520), Rgba([246, 249, 255, 255]), "{}", kind.name());
    }
}

#[test]
fn modal_overlay_dims_the_chat() {
    let img = render(AssetKind::BlockReview);
    let dimmed = img.get_pixel(150, 600);
    assert_eq!(dimmed[3], 255);
    assert!(
        (100..140).contains(&dimmed[0]),
        "expected dimmed card pixel, got {:?}",
        dimmed
    );
}

#[test]
fn header_title_is_rendered() {
    let img = render(AssetKind::BlockReview);
    let title = Rgba([244, 248, 255, 255]);
    let found = (32..90).any(|y| (44..700).any(|x| *img.get_pixel(x, y) == title));
    assert!(found, "expected title pixels in the header");
}

#[test]
fn translucent_fills_are_written_through() {
    for kind in [AssetKind::BlockReview, AssetKind::Redaction, AssetKind::Settings] {
        let img = render(kind);
        assert_eq!(*img.get_pixel(1100, 35), Rgba([18, 69, 145, 200]), "{} pill", kind.name());
        assert_eq!(*img.get_pixel(900, 165), Rgba([255, 255, 255, 240]), "{} url bar", kind.name());
    }
}

#[test]
fn cards_stop_short_of_far_edge() {
    // settings panel spans x 840..1160; column 1160 keeps the frame below
    let img = render(AssetKind::Settings);
    assert_eq!(*img.get_pixel(1159, 433), Rgba([245, 249, 255, 255]));
    assert_ne!(*img.get_pixel(1160, 433), Rgba([245, 249, 255, 255]));
}

#[test]
fn promo_tiles_are_opaque() {
    for kind in [AssetKind::SmallTile, AssetKind::LargeTile, AssetKind::Marquee] {
        let img = render(kind);
        assert!(
            img.pixels().all(|p| p[3] == 255),
            "{} has translucent pixels",
            kind.name()
        );
    }
}
