// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the feed.

## Organization

- **Palette**: Base colors
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use iced_feed::ui::design_tokens::{palette, spacing};

let panel = palette::PANEL;
let padding = spacing::SM; // 12px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Feed surfaces (dark)
    pub const BACKGROUND: Color = Color::from_rgb(0.125, 0.125, 0.125); // #202020
    pub const PANEL: Color = Color::from_rgb(0.184, 0.184, 0.184); // #2f2f2f
    pub const AVATAR: Color = Color::from_rgb(0.247, 0.247, 0.247); // #3f3f3f
    pub const IMAGE_PLACEHOLDER: Color = Color::from_rgb(0.059, 0.059, 0.059); // #0f0f0f

    // Brand
    pub const MAROON: Color = Color::from_rgb(0.502, 0.0, 0.0); // #800000
    pub const MAROON_LIGHT: Color = Color::from_rgb(0.62, 0.12, 0.12);

    // Light surfaces
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.93, 0.93);
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.6);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 20.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;

    pub const POST_IMAGE_HEIGHT: f32 = 250.0;
    pub const CREATOR_AVATAR: f32 = 40.0;
    pub const COMMENT_AVATAR: f32 = 30.0;
    pub const CHEVRON: f32 = 20.0;

    pub const FEED_MAX_WIDTH: f32 = 640.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Feed heading ("Your Feed")
    pub const HEADING: f32 = 28.0;

    /// Comments panel heading
    pub const TITLE_SM: f32 = 18.0;

    /// Post title
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - names, comment text
    pub const BODY: f32 = 14.0;

    /// Like counts
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(sizing::CREATOR_AVATAR > sizing::COMMENT_AVATAR);
    assert!(sizing::ICON_MD > sizing::ICON_SM);

    assert!(typography::HEADING > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
    }

    #[test]
    fn panel_is_lighter_than_background() {
        assert!(palette::PANEL.r > palette::BACKGROUND.r);
        assert!(palette::BACKGROUND.r > palette::IMAGE_PLACEHOLDER.r);
    }
}
