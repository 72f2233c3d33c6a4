//! Shared mockup chrome: header, browser window, chat thread, review modal

use super::{Branding, PRODUCT_NAME};
use crate::rendering::{rgb, rgba, Color, DisplayList, Rect, TextStyle};

/// Browser window placement shared by all screenshots.
pub const BROWSER_FRAME: Rect = Rect::new(92, 136, 1188, 748);

/// Height of the tab strip at the top of the browser window.
pub const TAB_STRIP_HEIGHT: i32 = 58;

const TEXT_ON_DARK: Color = rgb(214, 227, 245);
const BUTTON_EDGE: Color = rgb(114, 136, 168);

/// Rounded title bar across the top of `card` whose lower corners are squared
/// off so it merges into the card body.
pub fn title_bar(dl: &mut DisplayList, card: Rect, height: i32, radius: u32, square_from: i32, color: Color) {
    dl.rounded_rect(Rect::new(card.x1, card.y1, card.x2, card.y1 + height), radius, color)
        .fill_rect(Rect::new(card.x1, card.y1 + square_from, card.x2, card.y1 + height), color);
}

pub fn header(dl: &mut DisplayList, width: i32, title: &str, subtitle: &str) {
    dl.text(44, 32, title, TextStyle::bold(44.0, rgb(244, 248, 255)))
        .text(46, 88, subtitle, TextStyle::regular(24.0, rgb(204, 222, 245)))
        .rounded_rect(Rect::new(width - 330, 28, width - 42, 90), 20, rgba(18, 69, 145, 200))
        .text(width - 312, 49, PRODUCT_NAME, TextStyle::bold(24.0, rgb(230, 240, 255)));
}

pub fn browser_frame(dl: &mut DisplayList, bounds: Rect) {
    let Rect { x1, y1, x2, .. } = bounds;
    dl.shadowed_card(bounds, 24, rgb(246, 249, 255), 70, 16);
    title_bar(dl, bounds, TAB_STRIP_HEIGHT, 24, 30, rgb(233, 239, 250));

    // traffic lights
    dl.ellipse(Rect::new(x1 + 20, y1 + 19, x1 + 32, y1 + 31), rgb(236, 98, 88))
        .ellipse(Rect::new(x1 + 40, y1 + 19, x1 + 52, y1 + 31), rgb(243, 188, 64))
        .ellipse(Rect::new(x1 + 60, y1 + 19, x1 + 72, y1 + 31), rgb(91, 201, 116));

    dl.outlined_rounded_rect(
        Rect::new(x1 + 120, y1 + 14, x2 - 32, y1 + 44),
        12,
        rgba(255, 255, 255, 240),
        rgb(206, 216, 234),
        1,
    )
    .text(x1 + 138, y1 + 20, "https://chatgpt.com", TextStyle::regular(16.0, rgb(111, 128, 154)));
}

/// Composer box at the bottom of the chat thread.
pub fn composer(bounds: Rect) -> Rect {
    Rect::new(bounds.x1 + 30, bounds.y2 - 118, bounds.x2 - 30, bounds.y2 - 30)
}

pub fn chat_ui(dl: &mut DisplayList, bounds: Rect) {
    let Rect { x1, y1, x2, .. } = bounds;
    let body_top = y1 + 72;

    dl.rounded_rect(Rect::new(x1 + 30, body_top + 30, x1 + 560, body_top + 110), 16, rgb(234, 241, 255))
        .text(
            x1 + 54,
            body_top + 54,
            "Can you summarize this customer ticket?",
            TextStyle::regular(20.0, rgb(46, 66, 99)),
        );

    dl.rounded_rect(Rect::new(x2 - 610, body_top + 140, x2 - 30, body_top + 256), 16, rgb(220, 240, 229))
        .text(
            x2 - 588,
            body_top + 164,
            "Sure. Share the text and I will help.",
            TextStyle::regular(20.0, rgb(28, 74, 48)),
        );

    dl.outlined_rounded_rect(composer(bounds), 16, rgb(255, 255, 255), rgb(206, 216, 235), 1)
        .text(
            x1 + 52,
            bounds.y2 - 90,
            "My name is Max Mustermann, email max@example.com",
            TextStyle::regular(19.0, rgb(65, 80, 106)),
        );
}

/// The review dialog shown when a prompt is blocked.
pub fn modal_block(dl: &mut DisplayList, bounds: Rect) {
    let Rect { x1, y1, x2, y2 } = bounds;
    dl.overlay(Rect::new(x1, y1 + TAB_STRIP_HEIGHT, x2, y2), rgba(7, 15, 28, 138));

    let modal = Rect::new(x1 + 192, y1 + 144, x2 - 192, y2 - 110);
    let Rect {
        x1: mx1,
        y1: my1,
        x2: mx2,
        y2: my2,
    } = modal;
    dl.shadowed_card(modal, 18, rgba(15, 23, 37, 250), 140, 24);

    dl.text(
        mx1 + 28,
        my1 + 24,
        "Potential private information detected",
        TextStyle::bold(28.0, rgb(242, 247, 255)),
    )
    .text(mx1 + 28, my1 + 74, "Review before sending", TextStyle::regular(20.0, rgb(169, 190, 219)));

    dl.outlined_rounded_rect(
        Rect::new(mx1 + 28, my1 + 108, mx2 - 28, my1 + 218),
        12,
        rgb(20, 31, 49),
        rgb(60, 82, 112),
        1,
    )
    .text(mx1 + 44, my1 + 132, "Name: Max Mustermann", TextStyle::regular(20.0, TEXT_ON_DARK))
    .text(mx1 + 44, my1 + 164, "Email: max@example.com", TextStyle::regular(20.0, TEXT_ON_DARK))
    .text(mx1 + 44, my1 + 196, "Score 5 (threshold 3)", TextStyle::bold(18.0, rgb(122, 210, 166)));

    let (top, bottom) = (my2 - 78, my2 - 26);
    let buttons = [
        ("Cancel", Rect::new(mx1 + 24, top, mx1 + 134, bottom), rgb(36, 52, 76)),
        ("Redact Selected", Rect::new(mx1 + 144, top, mx1 + 314, bottom), rgb(40, 65, 102)),
        ("Trust This Site", Rect::new(mx1 + 324, top, mx1 + 484, bottom), rgb(40, 65, 102)),
        ("Send Anyway Once", Rect::new(mx1 + 494, top, mx2 - 24, bottom), rgb(103, 39, 39)),
    ];
    for (label, rect, color) in buttons {
        dl.outlined_rounded_rect(rect, 10, color, BUTTON_EDGE, 1)
            .centered_text(rect, label, TextStyle::bold(16.0, rgb(238, 246, 255)), -1);
    }
}

/// Product icon, or a plain rounded square when no icon is available.
pub fn brand_badge(dl: &mut DisplayList, branding: &Branding, x: i32, y: i32, size: u32) {
    match branding.icon() {
        Some(icon) => {
            dl.image(x, y, size, icon.clone());
        }
        None => {
            let s = size as i32;
            dl.rounded_rect(Rect::new(x, y, x + s, y + s), size / 5, rgb(30, 95, 164));
        }
    }
}
