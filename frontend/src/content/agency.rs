//! Agency copy shared by the home, about, services and contact pages.

#[derive(Debug, PartialEq)]
pub struct TeamMember {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
}

pub static TEAM: &[TeamMember] = &[
    TeamMember {
        id: "sarah",
        name: "Sarah Mitchell",
        role: "Founder & Creative Director",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=800&q=80&auto=format",
        bio: "Leading creative vision with 15+ years in digital design",
    },
    TeamMember {
        id: "marcus",
        name: "Marcus Chen",
        role: "Lead Developer",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=800&q=80&auto=format",
        bio: "Building scalable solutions with modern web technologies",
    },
    TeamMember {
        id: "elena",
        name: "Elena Rodriguez",
        role: "Brand Strategist",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=800&q=80&auto=format",
        bio: "Crafting brand narratives that resonate with audiences",
    },
    TeamMember {
        id: "james",
        name: "James Parker",
        role: "3D Artist",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=800&q=80&auto=format",
        bio: "Creating immersive 3D experiences and animations",
    },
];

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "150+", label: "Projects Completed" },
    Stat { value: "50+", label: "Happy Clients" },
    Stat { value: "8", label: "Years Experience" },
    Stat { value: "12", label: "Team Members" },
];

#[derive(Debug, PartialEq)]
pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: &[Value] = &[
    Value {
        title: "Innovation First",
        description: "We push boundaries and explore new technologies to deliver cutting-edge solutions.",
    },
    Value {
        title: "Client-Centered",
        description: "Your success is our success. We listen, understand, and deliver beyond expectations.",
    },
    Value {
        title: "Quality Driven",
        description: "Excellence is non-negotiable. Every pixel, every line of code matters to us.",
    },
];

pub const STORY_LINES: &[&str] = &[
    "We believe that great design",
    "is more than just aesthetics—",
    "it's about creating meaningful",
    "experiences that drive results.",
];

// Split mid-word on purpose; the wrap matches the layout of the reveal.
pub const ABOUT_LINES: &[&str] = &[
    "Our service also has a",
    "high appeal because it",
    "has a beautiful color co",
    "mbination and a minimalist concept.",
];

pub const ABOUT_BLURB: &str = "Our team of experienced professionals understands the ever-changing landscape of marketing and is able to create custom strategies for each client.";

pub const TESTIMONIAL_LINES: &[&str] = &[
    "\"Mitchy are a great team who not only complete",
    "designs in a timely manner but execute our",
    "creative briefs effectively and manage to keep the",
    "designs consistent with our brand look and feel.\"",
];

#[derive(Debug, PartialEq)]
pub struct Client {
    pub name: &'static str,
    pub image: &'static str,
}

pub const CLIENTS: &[Client] = &[
    Client {
        name: "Daoud Farooq",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300&h=300&fit=crop",
    },
    Client {
        name: "Alex Petrovski",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=300&h=300&fit=crop",
    },
    Client {
        name: "Sara Steiniger",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=300&h=300&fit=crop",
    },
];

/// One word of the oversized testimonial ticker.
#[derive(Debug, PartialEq)]
pub struct TickerWord {
    pub text: &'static str,
    pub muted: bool,
    pub dot: bool,
}

pub const TICKER_WORDS: &[TickerWord] = &[
    TickerWord { text: "Faster", muted: true, dot: false },
    TickerWord { text: "Greater", muted: false, dot: true },
    TickerWord { text: "Work", muted: true, dot: false },
    TickerWord { text: "Smarter", muted: false, dot: true },
    TickerWord { text: "Stronger", muted: true, dot: false },
];

pub const BANNER_ITEMS: &[&str] = &[
    "DIGITAL EXPERTISES",
    "LOGO DESIGN",
    "BRAND IDENTITY",
    "WEB DEVELOPMENT",
    "UX/UI DESIGN",
    "MARKETING STRATEGY",
    "CREATIVE SOLUTIONS",
    "DIGITAL MARKETING",
];

pub const PARTNER_LOGOS: &[&str] = &[
    "Epicurious",
    "FeatherDev",
    "Nietzsche",
    "Luminous",
    "Hourglass",
    "Epicurious",
    "FeatherDev",
    "Nietzsche",
];

#[derive(Debug, PartialEq)]
pub struct FeatureTile {
    pub headline: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
}

pub const FEATURE_TILES: &[FeatureTile] = &[
    FeatureTile {
        headline: "PUSH LIMITS",
        image: "https://images.unsplash.com/photo-1497366216548-37526070297c?w=800&h=1000&fit=crop",
        image_alt: "Office workspace showing modern work environment",
    },
    FeatureTile {
        headline: "PULL TOGETHER",
        image: "https://images.unsplash.com/photo-1497366811353-6870744d04b2?w=800&h=1000&fit=crop",
        image_alt: "Collaborative office space with orange lighting",
    },
    FeatureTile {
        headline: "AND UNITE THE CULTURE.",
        image: "https://images.unsplash.com/photo-1497366754035-f200968a6e72?w=800&h=1000&fit=crop",
        image_alt: "Professional working in modern office environment",
    },
];

pub const HERO_BLURB: &str =
    "Expert services in digital products, strategy, technology and data-driven analysis.";

/// Secondary entries under the "Web Design" lead of the home services card.
pub const SERVICE_CARD_ITEMS: &[&str] = &["3D Render Design", "Development", "Illustration", "Branding"];

pub struct FeaturedCopy {
    pub label: &'static str,
    pub tagline: &'static str,
    pub emphasis: &'static str,
    pub body: &'static str,
    pub quote: &'static str,
}

pub static FEATURED_COPY: FeaturedCopy = FeaturedCopy {
    label: "Featured Works",
    tagline: "We strive to deliver measurable",
    emphasis: "-",
    body: "Our marketing agency offers a full range of services to help businesses create, execute, and maintain a successful online presence.",
    quote: "- tangible results that help our clients reach their goals.",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceIcon {
    Palette,
    Film,
    Code,
    Pen,
    Tag,
    TrendingUp,
}

#[derive(Debug, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub icon: ServiceIcon,
}

pub static SERVICES: &[Service] = &[
    Service {
        id: "web-design",
        title: "Web Design",
        description: "Creating beautiful, functional digital experiences that drive results and elevate your brand presence in the digital landscape.",
        features: &["Responsive Design", "UI/UX Strategy", "Prototyping & Wireframing", "Design Systems"],
        icon: ServiceIcon::Palette,
    },
    Service {
        id: "3d-animation",
        title: "3D Render & Animation",
        description: "Bringing ideas to life with stunning 3D visualizations and animations that captivate and engage your audience.",
        features: &["Product Visualization", "Motion Graphics", "Character Animation", "Architectural Rendering"],
        icon: ServiceIcon::Film,
    },
    Service {
        id: "development",
        title: "Development",
        description: "Building scalable, performant web applications using modern technologies and best practices for long-term success.",
        features: &["Frontend Development", "Backend Solutions", "API Integration", "Performance Optimization"],
        icon: ServiceIcon::Code,
    },
    Service {
        id: "illustration",
        title: "Illustration",
        description: "Custom illustrations and visual content that tell your brand story in unique and memorable ways.",
        features: &["Custom Artwork", "Icon Design", "Editorial Illustration", "Brand Visuals"],
        icon: ServiceIcon::Pen,
    },
    Service {
        id: "branding",
        title: "Branding",
        description: "Crafting comprehensive brand identities that resonate with your audience and stand out in the marketplace.",
        features: &["Brand Strategy", "Logo Design", "Brand Guidelines", "Visual Identity"],
        icon: ServiceIcon::Tag,
    },
    Service {
        id: "marketing",
        title: "Digital Marketing",
        description: "Data-driven marketing strategies that grow your online presence and deliver measurable results.",
        features: &["SEO Optimization", "Content Strategy", "Social Media", "Analytics & Reporting"],
        icon: ServiceIcon::TrendingUp,
    },
];

#[derive(Debug, PartialEq)]
pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        number: "01",
        title: "Discovery",
        description: "We dive deep into understanding your business, goals, and challenges.",
    },
    ProcessStep {
        number: "02",
        title: "Strategy",
        description: "Developing a comprehensive plan tailored to your unique needs.",
    },
    ProcessStep {
        number: "03",
        title: "Execution",
        description: "Bringing the vision to life with precision and creativity.",
    },
    ProcessStep {
        number: "04",
        title: "Launch & Support",
        description: "Delivering results and providing ongoing support for your success.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingIcon {
    Dollar,
    Zap,
    Infinity,
}

#[derive(Debug, PartialEq)]
pub struct PricingPoint {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: PricingIcon,
}

pub const PRICING_POINTS: &[PricingPoint] = &[
    PricingPoint {
        title: "Fixed Pricing",
        description: "One flat monthly rate with no surprises or hidden fees.",
        icon: PricingIcon::Dollar,
    },
    PricingPoint {
        title: "Quick Delivery",
        description: "Fast turnaround times without compromising quality.",
        icon: PricingIcon::Zap,
    },
    PricingPoint {
        title: "Unlimited Requests",
        description: "Submit as many design requests as you need, we'll handle them all.",
        icon: PricingIcon::Infinity,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenefitIcon {
    Pricing,
    Speed,
    Team,
}

#[derive(Debug, PartialEq)]
pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: BenefitIcon,
}

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        icon: BenefitIcon::Pricing,
        title: "Fixed Monthly Price",
        description: "Enjoy unlimited access to our design services with a transparent, fixed subscription. No hidden costs—just continuous design support that fits your budget.",
    },
    Benefit {
        icon: BenefitIcon::Speed,
        title: "Quick Turnaround",
        description: "Expect rapid delivery without compromising quality. Tight feedback loops keep every project on track and moving forward.",
    },
    Benefit {
        icon: BenefitIcon::Team,
        title: "Expert Designers",
        description: "Collaborate with senior-level designers dedicated to delivering thoughtful, high-quality experiences that elevate your brand presence.",
    },
];

pub struct ContactInfo {
    pub phone: &'static str,
    pub email: &'static str,
    pub address: [&'static str; 3],
    pub hours: [&'static str; 2],
}

pub static CONTACT: ContactInfo = ContactInfo {
    phone: "+263-443-2420",
    email: "info@mitchy.com",
    address: ["Tebs Street", "1007 N. College Ave. Unit B", "Fort Collins, CO 80524"],
    hours: ["Monday — Friday", "9:00 AM — 6:00 PM"],
};
