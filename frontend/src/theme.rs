use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub struct Swatch {
    pub name: &'static str,
    pub token: &'static str,
    pub hex: &'static str,
}

pub const BRAND_COLORS: &[Swatch] = &[
    Swatch { name: "Primary", token: "--brand-primary", hex: "#FF4500" },
    Swatch { name: "Primary Hover", token: "--brand-primary-hover", hex: "#E03E00" },
    Swatch { name: "Primary Active", token: "--brand-primary-active", hex: "#C63700" },
    Swatch { name: "Primary Light", token: "--brand-primary-light", hex: "#FF6B35" },
];

pub const BACKGROUND_COLORS: &[Swatch] = &[
    Swatch { name: "Primary", token: "--bg-primary", hex: "#EEE9E3" },
    Swatch { name: "Secondary", token: "--bg-secondary", hex: "#F5F4F0" },
    Swatch { name: "Tertiary", token: "--bg-tertiary", hex: "#E8E5DF" },
    Swatch { name: "Dark", token: "--bg-dark", hex: "#0A0A0A" },
    Swatch { name: "Dark Card", token: "--bg-dark-card", hex: "#141414" },
];

pub const NEUTRAL_COLORS: &[Swatch] = &[
    Swatch { name: "Black", token: "--neutral-black", hex: "#000000" },
    Swatch { name: "Gray 900", token: "--neutral-gray900", hex: "#0A0A0A" },
    Swatch { name: "Gray 700", token: "--neutral-gray700", hex: "#2A2A2A" },
    Swatch { name: "Gray 500", token: "--neutral-gray500", hex: "#6B6B6B" },
    Swatch { name: "Gray 300", token: "--neutral-gray300", hex: "#CBCBCB" },
    Swatch { name: "Gray 100", token: "--neutral-gray100", hex: "#F5F5F5" },
    Swatch { name: "White", token: "--neutral-white", hex: "#FFFFFF" },
];

/// (label, css size) pairs for the type scale.
pub const TYPE_SCALE: &[(&str, &str)] = &[
    ("Display", "clamp(3.5rem, 11vw, 9rem)"),
    ("8xl", "6rem"),
    ("6xl", "3.75rem"),
    ("4xl", "2.25rem"),
    ("2xl", "1.5rem"),
    ("lg", "1.125rem"),
    ("base", "1rem"),
    ("sm", "0.875rem"),
];

/// Tokens as custom properties plus the handful of classes shared by every page.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    let mut tokens = String::from(":root {\n");
    for swatch in BRAND_COLORS.iter().chain(BACKGROUND_COLORS).chain(NEUTRAL_COLORS) {
        tokens.push_str(&format!("    {}: {};\n", swatch.token, swatch.hex));
    }
    tokens.push_str("}\n");

    html! {
        <style>
            {tokens}
            {r#"
            *, *::before, *::after {
                box-sizing: border-box;
            }
            html, body {
                margin: 0;
                padding: 0;
                background: var(--bg-primary);
                color: var(--neutral-black);
                font-family: 'Helvetica Neue', Helveticaneue, Arial, sans-serif;
                -webkit-font-smoothing: antialiased;
            }
            a {
                color: inherit;
                text-decoration: none;
            }
            img {
                display: block;
                max-width: 100%;
            }
            .container {
                max-width: 1400px;
                margin: 0 auto;
                padding: 0 1.5rem;
            }
            .section-label {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                font-size: 10px;
                font-weight: 700;
                text-transform: uppercase;
                letter-spacing: 0.35em;
                color: rgba(0, 0, 0, 0.7);
            }
            .section-label.light {
                color: rgba(255, 255, 255, 0.7);
            }
            .dot {
                display: inline-block;
                width: 8px;
                height: 8px;
                border-radius: 50%;
                background: var(--brand-primary);
                flex-shrink: 0;
            }
            .page-hero {
                padding: 12rem 1.5rem 5rem;
            }
            .page-hero h1 {
                font-size: clamp(3rem, 7vw, 6rem);
                font-weight: 900;
                line-height: 1.1;
                letter-spacing: -0.025em;
                margin: 1.5rem 0 2rem;
                max-width: 56rem;
            }
            .page-hero p {
                font-size: 1.25rem;
                line-height: 1.7;
                color: rgba(0, 0, 0, 0.7);
                max-width: 48rem;
            }
            .accent {
                color: var(--brand-primary);
            }
            .cta-button {
                display: inline-flex;
                align-items: center;
                gap: 0.75rem;
                border: none;
                border-radius: 999px;
                padding: 1rem 2rem;
                background: var(--brand-primary);
                color: #fff;
                font-weight: 600;
                font-size: 1rem;
                cursor: pointer;
                box-shadow: 0 8px 24px rgba(255, 69, 0, 0.25);
                transition: all 0.3s ease;
            }
            .cta-button:hover {
                background: var(--brand-primary-hover);
                transform: translateY(-4px);
            }
            .cta-button:disabled {
                opacity: 0.6;
                cursor: not-allowed;
                transform: none;
            }
            .cta-section {
                padding: 8rem 1.5rem;
                text-align: center;
            }
            .cta-section h2 {
                font-size: clamp(2.25rem, 5vw, 3.75rem);
                font-weight: 700;
                margin: 0 0 2rem;
            }
            .cta-section p {
                font-size: 1.25rem;
                color: rgba(0, 0, 0, 0.7);
                max-width: 42rem;
                margin: 0 auto 2.5rem;
            }
            .card {
                overflow: hidden;
                border-radius: 12px;
                border: 1px solid rgba(0, 0, 0, 0.05);
                background: #fff;
                box-shadow: 0 2px 12px rgba(0, 0, 0, 0.06);
                transition: all 0.5s ease;
            }
            .card:hover {
                box-shadow: 0 16px 40px rgba(0, 0, 0, 0.12);
                transform: translateY(-8px);
            }
            .alt-bg {
                background: var(--bg-secondary);
            }
            .dark-bg {
                background: var(--bg-dark);
                color: #fff;
            }
            @keyframes scroll-left {
                from { transform: translateX(0); }
                to { transform: translateX(-50%); }
            }
            @keyframes fade-in-up {
                from { opacity: 0; transform: translateY(16px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .fade-in-up {
                animation: fade-in-up 0.6s ease-out both;
            }
            @media (max-width: 768px) {
                .page-hero {
                    padding: 8rem 1.5rem 3rem;
                }
            }
            "#}
        </style>
    }
}
