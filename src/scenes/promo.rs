//! Promotional tiles: small tile, large tile and marquee

use super::chrome::{brand_badge, title_bar};
use super::{Branding, PRODUCT_NAME};
use crate::rendering::{rgb, DisplayList, Rect, TextStyle};

pub const FEATURES: [&str; 4] = [
    "Detects names, IDs, emails, cards, and API keys",
    "English and German privacy pattern support",
    "One-click redaction before submit",
    "Trusted-site allowlist and sensitivity controls",
];

pub fn small_tile(branding: &Branding) -> DisplayList {
    let mut dl = DisplayList::vertical([15, 53, 108], [14, 111, 151]);
    let pitch = TextStyle::regular(26.0, rgb(219, 232, 251));

    brand_badge(&mut dl, branding, 28, 30, 74);
    dl.text(118, 34, PRODUCT_NAME, TextStyle::bold(34.0, rgb(238, 245, 255)))
        .text(32, 132, "Catch personal data before", pitch)
        .text(32, 166, "it reaches AI assistants.", pitch)
        .rounded_rect(Rect::new(30, 220, 262, 258), 12, rgb(35, 125, 84))
        .text(46, 229, "Local, on-device checks", TextStyle::bold(17.0, rgb(232, 248, 239)));
    dl
}

pub fn large_tile(branding: &Branding) -> DisplayList {
    let mut dl = DisplayList::vertical([12, 47, 101], [14, 104, 149]);

    brand_badge(&mut dl, branding, 50, 52, 96);
    dl.text(164, 64, PRODUCT_NAME, TextStyle::bold(56.0, rgb(240, 247, 255)))
        .text(
            54,
            156,
            "Prevent accidental PII leaks in AI prompts.",
            TextStyle::regular(34.0, rgb(213, 229, 249)),
        );

    let card = Rect::new(52, 230, 868, 610);
    let Rect { x1, y1, .. } = card;
    dl.shadowed_card(card, 24, rgb(245, 249, 255), 75, 16);
    title_bar(&mut dl, card, 54, 24, 28, rgb(232, 239, 249));
    dl.text(x1 + 26, y1 + 18, "Block + Review", TextStyle::bold(23.0, rgb(30, 57, 103)));

    let item = TextStyle::regular(24.0, rgb(44, 67, 104));
    let mut y = y1 + 86;
    for feature in FEATURES {
        dl.ellipse(Rect::new(x1 + 28, y + 9, x1 + 40, y + 21), rgb(34, 126, 84))
            .text(x1 + 52, y, feature, item);
        y += 62;
    }
    dl
}

pub fn marquee(branding: &Branding) -> DisplayList {
    let mut dl = DisplayList::vertical([11, 44, 94], [14, 111, 154]);

    brand_badge(&mut dl, branding, 66, 56, 116);
    dl.text(202, 70, PRODUCT_NAME, TextStyle::bold(68.0, rgb(242, 248, 255)))
        .text(
            72,
            182,
            "Guardrails for safe AI prompting",
            TextStyle::regular(44.0, rgb(219, 232, 250)),
        )
        .text(
            72,
            244,
            "Detect, review, and redact sensitive data before send.",
            TextStyle::regular(35.0, rgb(208, 225, 247)),
        );

    let panel = Rect::new(800, 92, 1332, 470);
    let Rect {
        x1: px1,
        y1: py1,
        x2: px2,
        ..
    } = panel;
    dl.shadowed_card(panel, 22, rgb(248, 251, 255), 85, 16);
    title_bar(&mut dl, panel, 52, 22, 28, rgb(234, 240, 250));
    dl.text(
        px1 + 20,
        py1 + 16,
        "Potential private information detected",
        TextStyle::bold(24.0, rgb(34, 58, 100)),
    );

    let finding = TextStyle::regular(22.0, rgb(214, 227, 247));
    dl.rounded_rect(Rect::new(px1 + 18, py1 + 72, px2 - 18, py1 + 230), 12, rgb(22, 33, 51))
        .text(px1 + 36, py1 + 98, "Name: Max Mustermann", finding)
        .text(px1 + 36, py1 + 132, "Steuer-ID: 12345678901", finding)
        .text(px1 + 36, py1 + 166, "IBAN: DE89 3704 0044 ...", finding);

    dl.rounded_rect(Rect::new(px1 + 18, py1 + 258, px1 + 194, py1 + 314), 10, rgb(38, 58, 86))
        .rounded_rect(Rect::new(px1 + 210, py1 + 258, px1 + 434, py1 + 314), 10, rgb(34, 126, 84))
        .text(px1 + 58, py1 + 276, "Cancel", TextStyle::bold(20.0, rgb(233, 243, 255)))
        .text(px1 + 238, py1 + 276, "Redact Selected", TextStyle::bold(20.0, rgb(231, 247, 239)));
    dl
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::PaintCommand;

    #[test]
    fn large_tile_lists_every_feature_with_bullet() {
        let dl = large_tile(&Branding::none());
        let texts = dl.texts();
        for feature in FEATURES {
            assert!(texts.contains(&feature), "missing {feature}");
        }
        let bullets = dl
            .commands
            .iter()
            .filter(|c| matches!(c, PaintCommand::Ellipse { .. }))
            .count();
        assert_eq!(bullets, FEATURES.len());
    }

    #[test]
    fn tiles_start_with_badge() {
        for dl in [
            small_tile(&Branding::none()),
            large_tile(&Branding::none()),
            marquee(&Branding::none()),
        ] {
            assert!(matches!(dl.commands[0], PaintCommand::RoundedRect { .. }));
            assert!(dl.texts().contains(&PRODUCT_NAME));
        }
    }

    #[test]
    fn marquee_shows_german_findings() {
        let texts = marquee(&Branding::none()).texts().join("\n");
        assert!(texts.contains("Steuer-ID: 12345678901"));
        assert!(texts.contains("IBAN: DE89 3704 0044 ..."));
    }
}
