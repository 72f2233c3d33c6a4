use shield_assets::rendering::{rasterize, FontBook};
use shield_assets::{AssetKind, Branding};

#[test]
fn smoke_rasterize_every_scene() {
    let fonts = FontBook::bitmap();
    let branding = Branding::none();
    for kind in AssetKind::ALL {
        let scene = kind.build(&branding);
        let shot = rasterize(&scene.display_list, scene.size, &fonts).expect("rasterize");
        assert_eq!(shot.width, kind.size().width);
        assert_eq!(shot.height, kind.size().height);
        assert_eq!(&shot.png_data[0..8], b"\x89PNG\r\n\x1a\n", "{} is not a PNG", kind.name());
    }
}
