//! Hero scroll-zoom math.
//!
//! The hero's central media grows from `min_scale` to `max_scale` while the
//! page scrolls through the first half of the hero. Four decorations sit
//! around it; the two upper ones drift away from the media as it grows and
//! the two lower ones drift toward it, so the arrangement keeps hugging the
//! media edge. Everything here is pure so it can be tested off the browser;
//! `components::hero` applies the result to the DOM.

use crate::config;

/// Transform the media gets when the effect is off.
pub const CENTERED_TRANSFORM: &str = "translateX(-50%)";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    pub progress_ratio: f64,
    pub mobile_breakpoint: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: config::ZOOM_MIN_SCALE,
            max_scale: config::ZOOM_MAX_SCALE,
            progress_ratio: config::ZOOM_PROGRESS_RATIO,
            mobile_breakpoint: config::MOBILE_BREAKPOINT,
        }
    }
}

/// Layout measurements taken on every recomputation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomInput {
    pub scroll_offset: f64,
    pub viewport_width: f64,
    /// Height of the hero section.
    pub reference_height: f64,
    /// Untransformed height of the central media.
    pub media_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn css_property(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// The property that has to be cleared so a stale value can't fight the anchor.
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Which way a decoration's bottom distance moves as the media grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drift {
    /// Upper decorations: the bottom distance grows with the scale.
    Away,
    /// Lower decorations: the bottom distance shrinks with the scale.
    Toward,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoration {
    pub id: &'static str,
    pub side: Side,
    /// Horizontal anchor as a percentage of the container width.
    pub anchor_pct: f64,
    /// Rendered width in px; the element is sized to it so the anchor centres it.
    pub width: f64,
    pub base_bottom: f64,
    pub drift: Drift,
}

pub static HERO_DECORATIONS: [Decoration; 4] = [
    Decoration {
        id: "hero-deco-top-left",
        side: Side::Left,
        anchor_pct: 12.0,
        width: 140.0,
        base_bottom: 320.0,
        drift: Drift::Away,
    },
    Decoration {
        id: "hero-deco-top-right",
        side: Side::Right,
        anchor_pct: 12.0,
        width: 140.0,
        base_bottom: 320.0,
        drift: Drift::Away,
    },
    Decoration {
        id: "hero-deco-bottom-left",
        side: Side::Left,
        anchor_pct: 20.0,
        width: 120.0,
        base_bottom: 160.0,
        drift: Drift::Toward,
    },
    Decoration {
        id: "hero-deco-bottom-right",
        side: Side::Right,
        anchor_pct: 20.0,
        width: 120.0,
        base_bottom: 160.0,
        drift: Drift::Toward,
    },
];

impl Decoration {
    /// `calc(<pct>% - <half width>px)`, independent of scroll.
    pub fn horizontal_anchor(&self) -> String {
        format!("calc({}% - {}px)", self.anchor_pct, self.width / 2.0)
    }

    pub fn bottom_at(&self, offset: f64) -> f64 {
        match self.drift {
            Drift::Away => self.base_bottom + offset,
            Drift::Toward => self.base_bottom - offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub id: &'static str,
    pub side: Side,
    pub horizontal: String,
    pub width: f64,
    pub bottom: f64,
}

impl Placement {
    pub fn width_css(&self) -> String {
        format!("{}px", self.width)
    }

    pub fn bottom_css(&self) -> String {
        format!("{}px", self.bottom)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ZoomFrame {
    /// Mobile layout: media centered and unscaled, decorations untouched.
    Disabled,
    Zoomed {
        scale: f64,
        offset: f64,
        placements: Vec<Placement>,
    },
}

impl ZoomFrame {
    pub fn media_transform(&self) -> String {
        match self {
            ZoomFrame::Disabled => CENTERED_TRANSFORM.to_string(),
            ZoomFrame::Zoomed { scale, .. } => format!("{} scale({})", CENTERED_TRANSFORM, scale),
        }
    }
}

impl ZoomConfig {
    pub fn is_disabled(&self, viewport_width: f64) -> bool {
        viewport_width <= self.mobile_breakpoint
    }

    /// Position inside the zoom range, in `[0, 1]`.
    pub fn progress(&self, scroll_offset: f64, reference_height: f64) -> f64 {
        let span = reference_height * self.progress_ratio;
        if span <= 0.0 {
            // Nothing to interpolate over; any scrolling counts as fully zoomed.
            return if scroll_offset > 0.0 { 1.0 } else { 0.0 };
        }
        (scroll_offset / span).clamp(0.0, 1.0)
    }

    pub fn scale(&self, scroll_offset: f64, reference_height: f64) -> f64 {
        let progress = self.progress(scroll_offset, reference_height);
        self.min_scale + progress * (self.max_scale - self.min_scale)
    }

    /// Half the growth of `dimension` between `min_scale` and `scale`.
    pub fn edge_offset(&self, dimension: f64, scale: f64) -> f64 {
        (dimension * scale - dimension * self.min_scale) / 2.0
    }

    pub fn frame(&self, input: ZoomInput, decorations: &[Decoration]) -> ZoomFrame {
        if self.is_disabled(input.viewport_width) {
            return ZoomFrame::Disabled;
        }

        let scale = self.scale(input.scroll_offset, input.reference_height);
        let offset = self.edge_offset(input.media_height, scale);
        let placements = decorations
            .iter()
            .map(|decoration| Placement {
                id: decoration.id,
                side: decoration.side,
                horizontal: decoration.horizontal_anchor(),
                width: decoration.width,
                bottom: decoration.bottom_at(offset),
            })
            .collect();

        ZoomFrame::Zoomed {
            scale,
            offset,
            placements,
        }
    }
}
