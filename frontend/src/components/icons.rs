use yew::prelude::*;

use crate::content::agency::{BenefitIcon, PricingIcon, ServiceIcon};
use crate::content::releases::ChangeKind;

/// Line icons drawn on a 24x24 grid with a round 2px stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    ArrowUpRight,
    ArrowLeft,
    ChevronDown,
    Menu,
    Close,
    Mail,
    Phone,
    MapPin,
    Clock,
    Calendar,
    User,
    Send,
    Palette,
    Film,
    Code,
    Pen,
    Tag,
    TrendingUp,
    Dollar,
    Zap,
    Infinity,
    Sparkles,
    Bug,
    Wrench,
    Facebook,
    Twitter,
    Linkedin,
    Instagram,
}

impl Glyph {
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Glyph::ArrowUpRight => &["M7 7h10v10", "M7 17 17 7"],
            Glyph::ArrowLeft => &["m12 19-7-7 7-7", "M19 12H5"],
            Glyph::ChevronDown => &["m6 9 6 6 6-6"],
            Glyph::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Glyph::Close => &["M18 6 6 18", "m6 6 12 12"],
            Glyph::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 6-10 7L2 6",
            ],
            Glyph::Phone => &["M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"],
            Glyph::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M12 7a3 3 0 1 0 0 6 3 3 0 0 0 0-6z",
            ],
            Glyph::Clock => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z", "M12 6v6l4 2"],
            Glyph::Calendar => &[
                "M8 2v4",
                "M16 2v4",
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M3 10h18",
            ],
            Glyph::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M12 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8z",
            ],
            Glyph::Send => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
            Glyph::Palette => &[
                "M12 22a10 10 0 1 1 10-10c0 2.2-1.8 3-4 3h-2a2 2 0 0 0-1 3.7A1.7 1.7 0 0 1 12 22z",
                "M7.5 10.5h.01",
                "M12 7.5h.01",
                "M16.5 10.5h.01",
            ],
            Glyph::Film => &[
                "M3 3h18v18H3z",
                "M7 3v18",
                "M17 3v18",
                "M3 12h18",
                "M3 7.5h4",
                "M3 16.5h4",
                "M17 7.5h4",
                "M17 16.5h4",
            ],
            Glyph::Code => &["m18 16 4-4-4-4", "m6 8-4 4 4 4", "m14.5 4-5 16"],
            Glyph::Pen => &["M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z"],
            Glyph::Tag => &[
                "M12 2H2v10l9.29 9.29a1 1 0 0 0 1.42 0l8.58-8.58a1 1 0 0 0 0-1.42z",
                "M7 7h.01",
            ],
            Glyph::TrendingUp => &["m22 7-8.5 8.5-5-5L2 17", "M16 7h6v6"],
            Glyph::Dollar => &["M12 2v20", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
            Glyph::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            Glyph::Infinity => &["M12 12c-2-2.67-4-4-6-4a4 4 0 1 0 0 8c2 0 4-1.33 6-4zm0 0c2 2.67 4 4 6 4a4 4 0 0 0 0-8c-2 0-4 1.33-6 4z"],
            Glyph::Sparkles => &["m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z"],
            Glyph::Bug => &[
                "m8 2 1.88 1.88",
                "M14.12 3.88 16 2",
                "M9 7.13v-1a3 3 0 1 1 6 0v1",
                "M12 20c-3.3 0-6-2.7-6-6v-3a4 4 0 0 1 4-4h4a4 4 0 0 1 4 4v3c0 3.3-2.7 6-6 6",
                "M12 20v-9",
                "M6 13H2",
                "M22 13h-4",
            ],
            Glyph::Wrench => &["M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"],
            Glyph::Facebook => &["M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"],
            Glyph::Twitter => &["M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"],
            Glyph::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4 2 2 0 0 0 0-4z",
            ],
            Glyph::Instagram => &[
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
                "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
                "M17.5 6.5h.01",
            ],
        }
    }
}

impl From<ServiceIcon> for Glyph {
    fn from(icon: ServiceIcon) -> Self {
        match icon {
            ServiceIcon::Palette => Glyph::Palette,
            ServiceIcon::Film => Glyph::Film,
            ServiceIcon::Code => Glyph::Code,
            ServiceIcon::Pen => Glyph::Pen,
            ServiceIcon::Tag => Glyph::Tag,
            ServiceIcon::TrendingUp => Glyph::TrendingUp,
        }
    }
}

impl From<PricingIcon> for Glyph {
    fn from(icon: PricingIcon) -> Self {
        match icon {
            PricingIcon::Dollar => Glyph::Dollar,
            PricingIcon::Zap => Glyph::Zap,
            PricingIcon::Infinity => Glyph::Infinity,
        }
    }
}

impl From<ChangeKind> for Glyph {
    fn from(kind: ChangeKind) -> Self {
        match kind {
            ChangeKind::Feature => Glyph::Sparkles,
            ChangeKind::Fix => Glyph::Bug,
            ChangeKind::Improvement => Glyph::Wrench,
            ChangeKind::Breaking => Glyph::Zap,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub glyph: Glyph,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or(2.0)]
    pub stroke_width: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <svg
            class={props.class.clone()}
            width={props.size.to_string()}
            height={props.size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width={props.stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.glyph.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

/// x, y, width, height, corner radius of one outlined block.
type Block = (u32, u32, u32, u32, u32);

fn benefit_blocks(icon: BenefitIcon) -> [Block; 2] {
    match icon {
        BenefitIcon::Pricing => [(10, 14, 30, 30, 10), (28, 22, 20, 20, 7)],
        BenefitIcon::Speed => [(16, 12, 10, 40, 5), (34, 12, 14, 40, 7)],
        BenefitIcon::Team => [(12, 18, 16, 28, 8), (30, 18, 22, 28, 11)],
    }
}

#[derive(Properties, PartialEq)]
pub struct BenefitGlyphProps {
    pub icon: BenefitIcon,
}

/// Two overlapping rounded blocks, the mark on each benefit card.
#[function_component(BenefitGlyph)]
pub fn benefit_glyph(props: &BenefitGlyphProps) -> Html {
    html! {
        <svg width="64" height="64" viewBox="0 0 64 64" fill="none" aria-hidden="true">
            { for benefit_blocks(props.icon).iter().map(|(x, y, w, h, r)| html! {
                <rect
                    x={x.to_string()}
                    y={y.to_string()}
                    width={w.to_string()}
                    height={h.to_string()}
                    rx={r.to_string()}
                    stroke="white"
                    stroke-width="2.5"
                />
            }) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::agency::{BENEFITS, PRICING_POINTS, SERVICES};

    #[test]
    fn every_service_gets_its_own_icon() {
        let mut glyphs: Vec<Glyph> = SERVICES.iter().map(|s| s.icon.into()).collect();
        glyphs.sort_by_key(|g| *g as u8);
        glyphs.dedup();
        assert_eq!(glyphs.len(), SERVICES.len());
    }

    #[test]
    fn mapped_icons_have_drawable_paths() {
        let mapped = SERVICES
            .iter()
            .map(|s| Glyph::from(s.icon))
            .chain(PRICING_POINTS.iter().map(|p| Glyph::from(p.icon)))
            .chain(ChangeKind::ALL.iter().map(|k| Glyph::from(*k)));
        for glyph in mapped {
            assert!(!glyph.paths().is_empty(), "{glyph:?}");
        }
    }

    #[test]
    fn benefit_blocks_fit_the_canvas() {
        for benefit in BENEFITS {
            for (x, y, w, h, r) in benefit_blocks(benefit.icon) {
                assert!(x + w <= 64 && y + h <= 64);
                assert!(r * 2 <= w.min(h) + 1);
            }
        }
    }
}
