//! The three 1280x800 store screenshots

use super::chrome::{self, BROWSER_FRAME};
use super::SCREENSHOT_SIZE;
use crate::rendering::{rgb, DisplayList, Rect, TextStyle};

fn base(top: [u8; 3], bottom: [u8; 3], title: &str, subtitle: &str) -> DisplayList {
    let mut dl = DisplayList::vertical(top, bottom);
    chrome::header(&mut dl, SCREENSHOT_SIZE.width as i32, title, subtitle);
    chrome::browser_frame(&mut dl, BROWSER_FRAME);
    chrome::chat_ui(&mut dl, BROWSER_FRAME);
    dl
}

/// Chat with the review modal blocking submission.
pub fn block_review() -> DisplayList {
    let mut dl = base(
        [12, 44, 96],
        [12, 98, 140],
        "Protect prompts before they leave your browser",
        "Block + review catches PII before submit.",
    );
    chrome::modal_block(&mut dl, BROWSER_FRAME);
    dl
}

/// Composer after one-click redaction, with a success toast.
pub fn redaction() -> DisplayList {
    let mut dl = base(
        [15, 53, 103],
        [14, 112, 151],
        "One-click redaction",
        "Replace sensitive fields before sending.",
    );
    let Rect { x1, x2, y2, .. } = BROWSER_FRAME;

    dl.outlined_rounded_rect(
        chrome::composer(BROWSER_FRAME),
        16,
        rgb(255, 255, 255),
        rgb(177, 220, 193),
        3,
    )
    .text(
        x1 + 52,
        y2 - 90,
        "My name is [REDACTED_NAME], email [REDACTED_EMAIL]",
        TextStyle::regular(19.0, rgb(36, 76, 56)),
    );

    dl.rounded_rect(Rect::new(x2 - 320, y2 - 168, x2 - 40, y2 - 126), 10, rgb(34, 122, 76))
        .text(
            x2 - 302,
            y2 - 157,
            "Prompt redacted successfully",
            TextStyle::bold(16.0, rgb(236, 248, 241)),
        );
    dl
}

/// Settings panel floating over the chat.
pub fn settings() -> DisplayList {
    let mut dl = base(
        [15, 56, 101],
        [15, 104, 142],
        "Tune privacy behavior per workflow",
        "Set sensitivity, mode, and trusted sites.",
    );

    let panel = Rect::new(840, 176, 1160, 690);
    let Rect {
        x1: px1,
        y1: py1,
        x2: px2,
        y2: py2,
    } = panel;
    let label = TextStyle::bold(17.0, rgb(53, 72, 107));
    let value = TextStyle::regular(16.0, rgb(62, 83, 119));
    let field = rgb(255, 255, 255);
    let field_edge = rgb(197, 210, 232);

    dl.shadowed_card(panel, 16, rgb(245, 249, 255), 80, 14);
    dl.text(px1 + 22, py1 + 20, super::PRODUCT_NAME, TextStyle::bold(24.0, rgb(24, 47, 88)))
        .text(px1 + 22, py1 + 62, "Enabled", TextStyle::bold(18.0, rgb(56, 76, 112)));

    // toggle
    dl.rounded_rect(Rect::new(px2 - 90, py1 + 54, px2 - 24, py1 + 84), 14, rgb(31, 127, 89))
        .ellipse(Rect::new(px2 - 60, py1 + 58, px2 - 30, py1 + 82), rgb(241, 249, 255));

    let mut y = py1 + 112;
    for (name, setting) in [("Behavior", "Block + Review"), ("Detection", "Balanced")] {
        dl.text(px1 + 22, y, name, label)
            .outlined_rounded_rect(Rect::new(px1 + 22, y + 24, px2 - 22, y + 62), 8, field, field_edge, 1)
            .text(px1 + 34, y + 34, setting, value);
        y += 84;
    }

    dl.text(px1 + 22, y + 8, "Trusted Sites", label)
        .outlined_rounded_rect(Rect::new(px1 + 22, y + 34, px2 - 22, y + 144), 8, field, field_edge, 1)
        .text(px1 + 34, y + 54, "chatgpt.com", value)
        .text(px1 + 34, y + 84, "claude.ai", value);

    dl.outlined_rounded_rect(
        Rect::new(px1 + 22, py2 - 58, px2 - 22, py2 - 22),
        8,
        rgb(218, 232, 255),
        rgb(136, 164, 209),
        1,
    )
    .text(px1 + 52, py2 - 47, "Trust Current Site", TextStyle::bold(16.0, rgb(29, 66, 132)));
    dl
}
