#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aspect {
    Tall,
    Wide,
}

impl Aspect {
    pub fn class(self) -> &'static str {
        match self {
            Aspect::Tall => "aspect-tall",
            Aspect::Wide => "aspect-wide",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ClientQuote {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub year: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub aspect: Aspect,
    pub client: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub results: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub hero_image: &'static str,
    pub gallery: &'static [&'static str],
    pub testimonial: Option<ClientQuote>,
}

pub const WORK_CATEGORIES: &[&str] = &[
    super::ALL,
    "Web Design",
    "3D Animation",
    "Branding",
    "Development",
    "Illustration",
];

pub static PROJECTS: &[Project] = &[
    Project {
        id: "keelra",
        title: "Keëlra Industries",
        year: "2024",
        category: "3D Animation",
        image: "https://images.unsplash.com/photo-1587829741301-dc798b83add3?w=1200&q=80&auto=format",
        image_alt: "Keyboard 3D render",
        aspect: Aspect::Tall,
        client: "Keëlra Industries",
        duration: "3 months",
        description: "A comprehensive 3D animation project showcasing Keëlra Industries' innovative keyboard designs with stunning visual effects and motion graphics.",
        challenge: "The client needed to showcase their high-end mechanical keyboards in a way that highlighted both the technical precision and aesthetic beauty of their products.",
        solution: "We created a series of 3D animated sequences featuring photorealistic rendering, dynamic camera movements, and particle effects to emphasize the craftsmanship and attention to detail.",
        results: &[
            "300% increase in product page engagement",
            "Featured in major tech publications",
            "50% boost in pre-orders within first week",
        ],
        technologies: &["Blender", "Cinema 4D", "After Effects", "Octane Render"],
        hero_image: "https://images.unsplash.com/photo-1587829741301-dc798b83add3?w=1600&q=80&auto=format",
        gallery: &[
            "https://images.unsplash.com/photo-1595044426077-d36d9236d54a?w=1200&q=80&auto=format",
            "https://images.unsplash.com/photo-1511467687858-23d96c32e4ae?w=1200&q=80&auto=format",
            "https://images.unsplash.com/photo-1618384887929-16ec33fab9ef?w=1200&q=80&auto=format",
        ],
        testimonial: Some(ClientQuote {
            quote: "The 3D animations brought our products to life in ways we never imagined. The attention to detail and creative vision exceeded our expectations.",
            author: "Sarah Chen",
            role: "Marketing Director, Keëlra Industries",
        }),
    },
    Project {
        id: "gen-ai",
        title: "How Gen AI Transforms Process",
        year: "2024",
        category: "3D Animation",
        image: "https://images.unsplash.com/photo-1532298229144-0ec0c57515c7?w=1200&q=80&auto=format",
        image_alt: "Bicycle detail",
        aspect: Aspect::Tall,
        client: "TechVision Inc",
        duration: "2 months",
        description: "An educational 3D animated explainer showcasing how generative AI transforms business processes, designed for corporate training and marketing.",
        challenge: "Complex AI concepts needed to be visualized in an engaging, easy-to-understand format for non-technical audiences.",
        solution: "We developed abstract 3D visualizations and metaphors to represent AI processes, combined with smooth transitions and clear narration.",
        results: &[
            "Used in training for 500+ employees",
            "90% comprehension rate in post-training surveys",
            "Nominated for corporate video awards",
        ],
        technologies: &["Blender", "Cinema 4D", "Premiere Pro", "Motion Graphics"],
        hero_image: "https://images.unsplash.com/photo-1532298229144-0ec0c57515c7?w=1600&q=80&auto=format",
        gallery: &[
            "https://images.unsplash.com/photo-1485846234645-a62644f84728?w=1200&q=80&auto=format",
            "https://images.unsplash.com/photo-1484480974693-6ca0a78fb36b?w=1200&q=80&auto=format",
            "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=1200&q=80&auto=format",
        ],
        testimonial: None,
    },
    Project {
        id: "willo",
        title: "Willo",
        year: "2024",
        category: "3D Animation",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=1200&q=80&auto=format",
        image_alt: "Portrait with blindfold",
        aspect: Aspect::Tall,
        client: "Willo Studios",
        duration: "4 months",
        description: "A character-driven 3D animation project featuring Willo, a mascot character that brings brand personality to life across multiple touchpoints.",
        challenge: "Creating a versatile character that works across different media formats while maintaining consistent quality and appeal.",
        solution: "Developed a fully rigged 3D character with multiple expressions, poses, and animations that can be easily adapted for various use cases.",
        results: &[
            "Character adopted across all brand materials",
            "40% increase in brand recognition",
            "Social media engagement up 250%",
        ],
        technologies: &["Maya", "ZBrush", "Substance Painter", "Unreal Engine"],
        hero_image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=1600&q=80&auto=format",
        gallery: &[
            "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=1200&q=80&auto=format",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=1200&q=80&auto=format",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=1200&q=80&auto=format",
        ],
        testimonial: None,
    },
    Project {
        id: "justine",
        title: "Justine Mahoney - Personal Website",
        year: "2024",
        category: "Web Design",
        image: "https://images.unsplash.com/photo-1497366754035-f200968a6e72?w=1200&q=80&auto=format",
        image_alt: "Modern office meeting pod",
        aspect: Aspect::Wide,
        client: "Justine Mahoney",
        duration: "6 weeks",
        description: "A sleek, modern personal website for photographer Justine Mahoney, showcasing her portfolio with an emphasis on visual storytelling and user experience.",
        challenge: "Balancing minimalist design with impactful imagery to let the photography work speak for itself while maintaining strong brand identity.",
        solution: "Created a clean, grid-based layout with smooth transitions, high-quality image optimization, and intuitive navigation that puts the focus on the photography.",
        results: &[
            "200% increase in client inquiries",
            "Featured on Awwwards and CSS Design Awards",
            "Average session duration increased by 180%",
        ],
        technologies: &["React", "Next.js", "Framer Motion", "Tailwind CSS"],
        hero_image: "https://images.unsplash.com/photo-1497366754035-f200968a6e72?w=1600&q=80&auto=format",
        gallery: &[
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=1200&q=80&auto=format",
            "https://images.unsplash.com/photo-1499951360447-b19be8fe80f5?w=1200&q=80&auto=format",
            "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=1200&q=80&auto=format",
        ],
        testimonial: Some(ClientQuote {
            quote: "The website perfectly captures my aesthetic and has significantly elevated my professional presence. I've received countless compliments and new client leads.",
            author: "Justine Mahoney",
            role: "Professional Photographer",
        }),
    },
    Project {
        id: "nexus-platform",
        title: "Nexus - SaaS Platform",
        year: "2024",
        category: "Web Design",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=1200&q=80&auto=format",
        image_alt: "Digital interface design",
        aspect: Aspect::Wide,
        client: "Nexus Labs",
        duration: "5 months",
        description: "A product website and in-app design system for Nexus, a workflow automation platform for growing operations teams.",
        challenge: "Nexus had grown feature by feature and its interface no longer told a coherent story to new trial users.",
        solution: "We rebuilt the information architecture around three core jobs, then shipped a component library shared by marketing and product.",
        results: &[
            "Trial-to-paid conversion up 35%",
            "Design and engineering handoff time halved",
            "One design system across web and app",
        ],
        technologies: &["Figma", "React", "Storybook", "Tailwind CSS"],
        hero_image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=1600&q=80&auto=format",
        gallery: &[
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=1200&q=80&auto=format",
            "https://images.unsplash.com/photo-1504868584819-f8e8b4b6d7e3?w=1200&q=80&auto=format",
        ],
        testimonial: None,
    },
    Project {
        id: "brand-identity-studio",
        title: "Studio Craft - Brand Identity",
        year: "2023",
        category: "Branding",
        image: "https://images.unsplash.com/photo-1558655146-9f40138edfeb?w=1200&q=80&auto=format",
        image_alt: "Brand identity materials",
        aspect: Aspect::Tall,
        client: "Studio Craft",
        duration: "10 weeks",
        description: "A complete identity for Studio Craft, an independent furniture workshop moving from local commissions to a national online store.",
        challenge: "The studio's handmade character had to survive the jump to packaging, e-commerce, and print at scale.",
        solution: "A wordmark drawn from the workshop's own joinery marks, a warm material palette, and guidelines the small team can apply without us.",
        results: &[
            "Brand rolled out across 40+ touchpoints",
            "Online store launched on schedule",
            "Shortlisted for a regional design award",
        ],
        technologies: &["Illustrator", "InDesign", "Figma"],
        hero_image: "https://images.unsplash.com/photo-1558655146-9f40138edfeb?w=1600&q=80&auto=format",
        gallery: &[
            "https://images.unsplash.com/photo-1586717791821-3f44a563fa4c?w=1200&q=80&auto=format",
            "https://images.unsplash.com/photo-1524758631624-e2822e304c36?w=1200&q=80&auto=format",
        ],
        testimonial: None,
    },
    Project {
        id: "mobile-app-finance",
        title: "FinFlow - Mobile Banking App",
        year: "2023",
        category: "Development",
        image: "https://images.unsplash.com/photo-1563986768609-322da13575f3?w=1200&q=80&auto=format",
        image_alt: "Mobile app interface",
        aspect: Aspect::Tall,
        client: "FinFlow",
        duration: "7 months",
        description: "Design and development of FinFlow's mobile banking app, built for people who want to see their month at a glance.",
        challenge: "Banking regulation, legacy core systems, and a user base that had never trusted a finance app before.",
        solution: "We paired a calm, card-based interface with an API layer that hides the core banking system's quirks from the app.",
        results: &[
            "4.8 average rating in both app stores",
            "120k accounts opened in the first quarter",
            "Support tickets down 30% versus the old app",
        ],
        technologies: &["React Native", "TypeScript", "Node.js", "PostgreSQL"],
        hero_image: "https://images.unsplash.com/photo-1563986768609-322da13575f3?w=1600&q=80&auto=format",
        gallery: &[
            "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=1200&q=80&auto=format",
            "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=1200&q=80&auto=format",
        ],
        testimonial: None,
    },
    Project {
        id: "ecommerce-redesign",
        title: "ShopHub - E-commerce Redesign",
        year: "2023",
        category: "Web Design",
        image: "https://images.unsplash.com/photo-1472851294608-062f824d29cc?w=1200&q=80&auto=format",
        image_alt: "E-commerce interface",
        aspect: Aspect::Wide,
        client: "ShopHub",
        duration: "4 months",
        description: "A storefront redesign for ShopHub's multi-brand marketplace, from product listing pages through checkout.",
        challenge: "Cart abandonment was high and mobile shoppers struggled with a checkout designed for desktop.",
        solution: "A mobile-first checkout with fewer steps, clearer delivery costs, and product pages rebuilt around real customer questions.",
        results: &[
            "Checkout completion up 22%",
            "Mobile revenue share grew from 41% to 58%",
            "Page weight reduced by half",
        ],
        technologies: &["Shopify", "Liquid", "Figma", "Hotjar"],
        hero_image: "https://images.unsplash.com/photo-1472851294608-062f824d29cc?w=1600&q=80&auto=format",
        gallery: &[
            "https://images.unsplash.com/photo-1556740738-b6a63e27c4df?w=1200&q=80&auto=format",
            "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=1200&q=80&auto=format",
        ],
        testimonial: None,
    },
    Project {
        id: "illustration-series",
        title: "Nature Series - Illustrations",
        year: "2023",
        category: "Illustration",
        image: "https://images.unsplash.com/photo-1513151233558-d860c5398176?w=1200&q=80&auto=format",
        image_alt: "Illustration artwork",
        aspect: Aspect::Tall,
        client: "Greenline Press",
        duration: "3 months",
        description: "Twelve editorial illustrations for Greenline Press's seasonal nature journal, later licensed as a print series.",
        challenge: "Each piece needed to stand alone on a cover and still read as one family across a year of issues.",
        solution: "A restricted palette per season, a shared grain texture, and recurring motifs that tie the twelve pieces together.",
        results: &[
            "Series sold out as limited-edition prints",
            "Journal subscriptions up 18%",
            "Featured in an illustration annual",
        ],
        technologies: &["Procreate", "Photoshop", "Risograph"],
        hero_image: "https://images.unsplash.com/photo-1513151233558-d860c5398176?w=1600&q=80&auto=format",
        gallery: &[
            "https://images.unsplash.com/photo-1579783902614-a3fb3927b6a5?w=1200&q=80&auto=format",
            "https://images.unsplash.com/photo-1541961017774-22349e4a1262?w=1200&q=80&auto=format",
        ],
        testimonial: None,
    },
];

pub fn project_by_id(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

/// Projects shown in the home page's featured grid, in layout order.
pub fn featured_projects() -> &'static [Project] {
    &PROJECTS[..4]
}
