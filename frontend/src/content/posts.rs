#[derive(Debug, PartialEq)]
pub struct BlogPost {
    pub id: &'static str,
    pub tag: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// Shorter teaser used by the home page article list.
    pub teaser: &'static str,
    pub date: &'static str,
    pub author: &'static str,
    pub read_time: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub content: &'static [&'static str],
}

pub const BLOG_CATEGORIES: &[&str] = &[
    super::ALL,
    "Design",
    "AI",
    "Creativity",
    "Marketing",
    "Animation",
];

const TEASER: &str =
    "Master the fundamentals of Generative AI in just one day. Learn how to simplify and harness...";

pub static POSTS: &[BlogPost] = &[
    BlogPost {
        id: "seo-king",
        tag: "Design",
        title: "Why SEO Is Still King — and How We Help You Rule the Rankings",
        excerpt: "Master the fundamentals of SEO and learn how to dominate search results with proven strategies.",
        teaser: TEASER,
        date: "Nov 8, 2024",
        author: "Sarah Mitchell",
        read_time: "8 min read",
        image: "https://images.unsplash.com/photo-1484480974693-6ca0a78fb36b?w=1600&q=80&auto=format",
        image_alt: "Desk with vintage items",
        content: &[
            "In the ever-evolving landscape of digital marketing, one thing remains constant: the power of Search Engine Optimization (SEO). Despite the emergence of new platforms and marketing channels, SEO continues to be the foundation of successful online visibility.",
            "The digital marketplace has become increasingly competitive, with businesses vying for the attention of potential customers. Search engines, particularly Google, remain the primary gateway through which users discover new products, services, and information. Understanding and implementing effective SEO strategies is no longer optional—it's essential for survival in the digital age.",
            "Our approach to SEO is comprehensive and data-driven. We don't just focus on keywords; we analyze user intent, competitor strategies, and emerging trends to create holistic optimization plans that deliver sustainable results.",
            "Technical SEO forms the backbone of our strategy. We ensure your website is fast, mobile-friendly, and easily crawlable by search engines. Page speed optimization, structured data implementation, and proper URL architecture are just some of the elements we perfect.",
            "Content remains king in the SEO world, but not just any content. We create valuable, engaging content that answers real questions your audience is asking. Our keyword research goes beyond search volume to understand the context and intent behind each query.",
            "Link building has evolved significantly over the years. We focus on earning high-quality backlinks through compelling content, strategic partnerships, and digital PR—no black hat tactics, just genuine authority building that stands the test of time.",
        ],
    },
    BlogPost {
        id: "brand-identity",
        tag: "AI",
        title: "What Makes a Great Brand Identity? Our Creative Team Weighs In",
        excerpt: "Discover the key elements that make brand identities memorable and effective in today's market.",
        teaser: TEASER,
        date: "Nov 5, 2024",
        author: "Elena Rodriguez",
        read_time: "6 min read",
        image: "https://images.unsplash.com/photo-1598970434795-0c54fe7c0648?w=1600&q=80&auto=format",
        image_alt: "Red bottles product shot",
        content: &[
            "Brand identity is more than just a logo or color scheme—it's the visual, verbal, and emotional expression of what makes your business unique. In a crowded marketplace, a strong brand identity is your most powerful differentiator.",
            "Our creative team has worked with dozens of brands across industries, and we've identified several key elements that consistently make brand identities stand out and resonate with audiences.",
            "First and foremost, authenticity is paramount. Your brand identity must reflect who you truly are as a business, not who you think you should be. Audiences today have a keen sense for detecting inauthenticity, and they reward brands that stay true to their values.",
            "Visual consistency across all touchpoints creates recognition and trust. From your website to social media, packaging to advertising, every element should feel part of a cohesive whole. This doesn't mean everything looks identical, but rather that there's a clear visual language that ties everything together.",
            "The most successful brand identities tell a story. They create an emotional connection with their audience by communicating not just what the business does, but why it exists and what it stands for. This narrative becomes the thread that runs through all brand communications.",
            "Finally, great brand identities are flexible enough to evolve. The best brands maintain their core identity while adapting to changing markets, technologies, and audience expectations. Planning for longevity means building a system that can grow with your business.",
        ],
    },
    BlogPost {
        id: "ai-creativity",
        tag: "Creativity",
        title: "AI + Creativity: How We're Using Tech to Supercharge Campaigns",
        excerpt: "Exploring the intersection of artificial intelligence and creative design in modern marketing.",
        teaser: TEASER,
        date: "Nov 1, 2024",
        author: "Marcus Chen",
        read_time: "10 min read",
        image: "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?w=1600&q=80&auto=format",
        image_alt: "Blue tech device",
        content: &[
            "The rise of artificial intelligence has sparked debates about the future of creativity. Will AI replace human creatives? The answer is nuanced: AI won't replace creativity, but creatives who use AI will replace those who don't.",
            "At our agency, we've embraced AI as a powerful tool that enhances rather than replaces human creativity. The technology allows us to work faster, explore more options, and push creative boundaries in ways that weren't possible before.",
            "One of the most impactful applications of AI in our workflow is in the ideation phase. AI tools help us generate dozens of creative concepts quickly, which we then refine and develop with human insight and strategic thinking.",
            "Data analysis is another area where AI shines. By processing vast amounts of performance data, AI helps us understand what resonates with audiences and why. This insight informs our creative decisions, making them more strategic and effective.",
            "Personalization at scale is perhaps the most exciting opportunity AI presents. We can now create campaign variations tailored to different audience segments, all while maintaining brand consistency and quality.",
            "However, we're mindful of AI's limitations. While it excels at pattern recognition and optimization, it lacks the emotional intelligence, cultural understanding, and strategic thinking that human creatives bring to the table. The magic happens when we combine the best of both worlds.",
        ],
    },
    BlogPost {
        id: "web-design-trends",
        tag: "Design",
        title: "Top Web Design Trends Shaping 2024",
        excerpt: "Stay ahead of the curve with these emerging design trends that are defining the digital landscape.",
        teaser: TEASER,
        date: "Oct 28, 2024",
        author: "James Parker",
        read_time: "7 min read",
        image: "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=1600&q=80&auto=format",
        image_alt: "Modern web interface",
        content: &[
            "Every year brings a fresh wave of visual experiments, and 2024 is no exception. The difference this year is that the strongest trends are as much about restraint as they are about novelty.",
            "Oversized typography continues to dominate hero sections. Headlines set at display sizes do the work that stock photography used to do, and they load instantly.",
            "Scroll-driven storytelling has matured. Instead of effects for their own sake, the best sites use scroll position to pace information: revealing a line of copy, stacking a set of cards, or pinning a headline while supporting detail moves past.",
            "Warm neutrals are replacing pure white backgrounds. Beige, stone, and paper tones feel calmer on large screens and give accent colors more room to stand out.",
            "Finally, performance has become a design trend in its own right. Lighter pages, fewer fonts, and smarter image loading are now visible quality signals rather than invisible engineering chores.",
        ],
    },
    BlogPost {
        id: "content-strategy",
        tag: "Marketing",
        title: "Building a Content Strategy That Actually Works",
        excerpt: "Learn how to create and execute a content strategy that drives engagement and conversions.",
        teaser: TEASER,
        date: "Oct 25, 2024",
        author: "Sarah Mitchell",
        read_time: "9 min read",
        image: "https://images.unsplash.com/photo-1552664730-d307ca884978?w=1600&q=80&auto=format",
        image_alt: "Team planning session",
        content: &[
            "Most content strategies fail for a simple reason: they start with a publishing calendar instead of a business goal.",
            "We begin every engagement by agreeing on what content should change. More qualified leads, shorter sales cycles, fewer support requests: each goal implies a different mix of formats and channels.",
            "Next comes the audience. We interview customers and sales teams to map the questions people ask at each stage of a purchase, then rank those questions by how often they come up and how much they matter.",
            "Only then do we plan the calendar. Cornerstone pieces answer the most important questions in depth, and smaller pieces point back to them.",
            "Measurement closes the loop. We review performance monthly, retire what doesn't work, and double down on the pieces that move the goal we started with.",
        ],
    },
    BlogPost {
        id: "3d-animation",
        tag: "Animation",
        title: "The Power of 3D Animation in Modern Marketing",
        excerpt: "How 3D animation is transforming the way brands tell their stories and engage audiences.",
        teaser: TEASER,
        date: "Oct 20, 2024",
        author: "James Parker",
        read_time: "6 min read",
        image: "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=1600&q=80&auto=format",
        image_alt: "3D rendered scene",
        content: &[
            "Not long ago, 3D animation was reserved for film studios and the largest ad budgets. Real-time renderers and faster hardware have changed that.",
            "For product brands, 3D lets you show what photography cannot: an exploded view of a mechanism, a material close-up at impossible scale, or a product that hasn't been manufactured yet.",
            "For service brands, abstract 3D scenes turn intangible ideas into something an audience can watch and remember.",
            "A single well-built 3D asset also keeps giving. The same model feeds hero videos, social loops, product configurators, and print renders.",
            "The key is to start from the story, not the software. Animation that serves a clear message outperforms spectacle every time.",
        ],
    },
];

pub fn post_by_id(id: &str) -> Option<&'static BlogPost> {
    POSTS.iter().find(|post| post.id == id)
}

/// Articles listed on the home page.
pub fn latest_posts() -> &'static [BlogPost] {
    &POSTS[..3]
}
