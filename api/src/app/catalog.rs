//! Content catalog
//!
//! The hand-authored copy behind the services, reels, team, testimonials, and
//! FAQ sections, plus the site-wide links that surround them.

use chrono::{Datelike, Utc};
use serde::Serialize;

use crate::domain::entities::content::{
    Faq, NavLink, ReelData, ServiceData, SocialLink, TeamMember, Testimonial,
};

pub const SITE_NAME: &str = "Lumière";
pub const TAGLINE: &str = "We turn stories into scroll stopping content";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/lumiere.chronicle/";

/// Home page sections, top to bottom
pub const HOME_SECTIONS: &[&str] = &[
    "hero", "about", "services", "reels", "gallery", "work", "team", "contact", "reach-out",
    "faq", "footer",
];

pub const NAVIGATION: &[NavLink] = &[
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "Portfolio", href: "/portfolio" },
    NavLink { label: "Contact", href: "#contact" },
    NavLink { label: "Share", href: "#share" },
];

pub const SERVICES: &[ServiceData] = &[
    ServiceData {
        id: "video-editing",
        title: "Video Editing",
        description: "Professional video editing services for all your content needs",
        features: &[
            "Professional color grading",
            "Motion graphics and animations",
            "Audio enhancement and mixing",
            "Multi-format export options",
            "Fast turnaround times",
        ],
        benefits: &[
            "Increased engagement rates",
            "Professional brand image",
            "Time-saving for your team",
            "Consistent quality output",
            "Cost-effective solution",
        ],
        process: &[
            "Initial consultation and brief",
            "Raw footage review and planning",
            "Editing and post-production",
            "Client review and revisions",
            "Final delivery in desired formats",
        ],
        pricing: "Starting from $299",
        deliverables: &[
            "Edited video in HD/4K quality",
            "Multiple format exports",
            "Source files and project files",
            "Thumbnail designs",
            "Usage rights documentation",
        ],
    },
    ServiceData {
        id: "social-media-reels",
        title: "Social Media Reels",
        description: "Engaging short-form content for Instagram, TikTok, and YouTube Shorts",
        features: &[
            "Trending format optimization",
            "Platform-specific editing",
            "Engaging transitions and effects",
            "Hashtag and caption suggestions",
            "Performance analytics setup",
        ],
        benefits: &[
            "Viral content potential",
            "Increased follower growth",
            "Better algorithm reach",
            "Enhanced brand visibility",
            "Higher engagement rates",
        ],
        process: &[
            "Content strategy discussion",
            "Trend research and planning",
            "Content creation and editing",
            "Optimization for each platform",
            "Publishing and performance tracking",
        ],
        pricing: "Starting from $149",
        deliverables: &[
            "Platform-optimized reels",
            "Engaging captions and hashtags",
            "Thumbnail variations",
            "Publishing schedule",
            "Performance metrics setup",
        ],
    },
    ServiceData {
        id: "digital-marketing",
        title: "Digital Marketing",
        description: "Comprehensive digital marketing strategies to grow your business",
        features: &[
            "SEO optimization",
            "Social media management",
            "PPC advertising campaigns",
            "Content marketing strategy",
            "Analytics and reporting",
        ],
        benefits: &[
            "Increased online visibility",
            "Higher conversion rates",
            "Better ROI on ad spend",
            "Targeted audience reach",
            "Data-driven decisions",
        ],
        process: &[
            "Market research and analysis",
            "Strategy development",
            "Campaign implementation",
            "Monitoring and optimization",
            "Reporting and insights",
        ],
        pricing: "Starting from $999/month",
        deliverables: &[
            "Comprehensive marketing strategy",
            "Campaign setup and management",
            "Monthly performance reports",
            "Competitor analysis",
            "Optimization recommendations",
        ],
    },
    ServiceData {
        id: "brand-campaigns",
        title: "Marketing Campaigns",
        description: "Creative campaigns that build brand awareness",
        features: &[
            "Brand identity development",
            "Creative campaign concepts",
            "Multi-channel execution",
            "Influencer partnerships",
            "Campaign performance tracking",
        ],
        benefits: &[
            "Stronger brand recognition",
            "Consistent brand messaging",
            "Increased market share",
            "Customer loyalty building",
            "Competitive advantage",
        ],
        process: &[
            "Brand audit and research",
            "Creative concept development",
            "Campaign planning and design",
            "Multi-channel execution",
            "Results analysis and optimization",
        ],
        pricing: "Starting from $2,499",
        deliverables: &[
            "Complete brand guidelines",
            "Campaign creative assets",
            "Implementation timeline",
            "Performance tracking setup",
            "Post-campaign analysis",
        ],
    },
    ServiceData {
        id: "landing-pages",
        title: "Brand Landing Pages",
        description: "High-converting landing pages for your business",
        features: &[
            "Conversion-optimized design",
            "Mobile-responsive layouts",
            "A/B testing setup",
            "Analytics integration",
            "SEO optimization",
        ],
        benefits: &[
            "Higher conversion rates",
            "Better user experience",
            "Improved search rankings",
            "Faster loading times",
            "Mobile-friendly design",
        ],
        process: &[
            "Requirements gathering",
            "Wireframing and design",
            "Development and testing",
            "Launch and optimization",
            "Performance monitoring",
        ],
        pricing: "Starting from $1,299",
        deliverables: &[
            "Fully responsive landing page",
            "Analytics setup",
            "SEO optimization",
            "Performance testing",
            "Maintenance documentation",
        ],
    },
    ServiceData {
        id: "website-making",
        title: "Website Development",
        description: "Custom websites that represent your brand and drive business growth",
        features: &[
            "Custom design and development",
            "Content management system",
            "E-commerce integration",
            "Security and performance optimization",
            "Ongoing maintenance support",
        ],
        benefits: &[
            "Professional online presence",
            "Scalable architecture",
            "Enhanced user experience",
            "Better search visibility",
            "Increased credibility",
        ],
        process: &[
            "Discovery and planning",
            "Design and prototyping",
            "Development and testing",
            "Launch and deployment",
            "Training and support",
        ],
        pricing: "Starting from $2,999",
        deliverables: &[
            "Fully functional website",
            "Content management system",
            "SEO optimization",
            "Security setup",
            "Training and documentation",
        ],
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Nohil Yash Arthur",
        designation: "Founding Partner, Creative Director",
        image_src: "/team-member-1.heic",
        bio: "Always on the edge to turn raw elements into something beautiful with the means of art. Bringing unconventional yet market relevant ideas to life, ultimately redefining brands.",
        quote: "Bringing unconventional yet market relevant ideas to life, ultimately redefining brands.",
        social_links: &[SocialLink {
            platform: "instagram",
            href: "https://www.instagram.com/nasharthurr?utm_source=ig_web_button_share_sheet&igsh=ZDNlZDc0MzIxNw==",
        }],
    },
    TeamMember {
        name: "Hruthik. G",
        designation: "Founding Partner, Director of Photography",
        image_src: "/team-member-2.heic",
        bio: "With a keen eye towards capturing the essence of a moment and the need to delegate and manage a high performance system.",
        quote: "I let the best of both worlds intertwine, as a result brands are met with unwavering direction and high quality shots that replicate what was once an idea, now a film ready to show the world your brand's story.",
        social_links: &[SocialLink {
            platform: "instagram",
            href: "https://www.instagram.com/hruthik.g7?utm_source=ig_web_button_share_sheet&igsh=ZDNlZDc0MzIxNw==",
        }],
    },
    TeamMember {
        name: "Mayank V.N",
        designation: "Founding Partner, Financial Director",
        image_src: "/team-member-3.heic",
        bio: "What is brought to the table, I multiply. With firm commitment and sheer belief towards the growth of this company.",
        quote: "Mayank uses his expertise in the world of finance to take calculated steps and decisions that are bound to take our 'Lumière' above and beyond.",
        social_links: &[SocialLink {
            platform: "instagram",
            href: "https://www.instagram.com/mayank_939?utm_source=ig_web_button_share_sheet&igsh=ZDNlZDc0MzIxNw==",
        }],
    },
];

pub const REELS: &[ReelData] = &[
    ReelData {
        id: "1",
        video_url: "/video-1.mp4",
        thumbnail: "/thumbnail-1.jpg",
        title: "KOREAN CLOTHING BRAND",
        creator: "Team Lumière",
        likes: 1200,
        comments: 45,
        description: "Fusing K-style flair with urban Bangalore vibes, this promo reel shows how branding comes to life.",
        tags: &["brand", "fashion", "promo"],
        link: "https://www.instagram.com/reel/DL5QlBCsTK6/?utm_source=ig_web_copy_link&igsh=MzRlODBiNWFlZA==",
    },
    ReelData {
        id: "2",
        video_url: "/video-2.mp4",
        thumbnail: "/thumbnail-2.jpg",
        title: "Wholegrain Goodness",
        creator: "Team Lumiere",
        likes: 980,
        comments: 30,
        description: "They asked for something real. We delivered Don-style wholegrain goodness.",
        tags: &["food", "brand", "real"],
        link: "https://www.instagram.com/reel/DIaUzd4yjpV/?utm_source=ig_web_copy_link&igsh=MzRlODBiNWFlZA==",
    },
    ReelData {
        id: "3",
        video_url: "/video-3.mp4",
        thumbnail: "/thumbnail-3.jpg",
        title: "Identity In Motion",
        creator: "Team Lumiere",
        likes: 1430,
        comments: 62,
        description: "Every frame tells a story, that's how we shape brand identity in motion.",
        tags: &["identity", "motion", "brand"],
        link: "https://www.instagram.com/reel/DDMSaE4v2cp/?utm_source=ig_web_copy_link&igsh=MzRlODBiNWFlZA==",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Working with Lumiere transformed our brand's visual storytelling. Their attention to detail and creative vision exceeded all expectations.",
        name: "Sarah Chen",
        designation: "Creative Director at Nexus Studios",
        src: "https://images.unsplash.com/photo-1494790108755-2616b612b786?q=80&w=3387&auto=format&fit=crop&ixlib=rb-4.0.3",
    },
    Testimonial {
        quote: "The cinematic quality and emotional depth they brought to our project was remarkable. Truly exceptional work.",
        name: "Michael Rodriguez",
        designation: "Producer at Visionary Films",
        src: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=3387&auto=format&fit=crop&ixlib=rb-4.0.3",
    },
    Testimonial {
        quote: "Professional, creative, and delivered beyond our timeline. The final product speaks for itself.",
        name: "Emily Watson",
        designation: "Marketing Lead at Creative Co.",
        src: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?q=80&w=3540&auto=format&fit=crop&ixlib=rb-4.0.3",
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What does Lumière specialize in?",
        answer: "We are a creative agency focused on cinematic video editing, high-impact social media reels, and end-to-end brand storytelling that drives measurable growth.",
    },
    Faq {
        question: "What industries do you work with?",
        answer: "We partner with consumer brands, startups, creators, and agencies across fashion, tech, F&B, fitness, and more. Anyone who values compelling visual storytelling.",
    },
    Faq {
        question: "How does your process work?",
        answer: "Discovery → Strategy → Production → Editing → Revisions → Delivery. We align on goals early, then execute fast with clear checkpoints and feedback loops.",
    },
    Faq {
        question: "How soon can we start and what are timelines?",
        answer: "Discovery calls are available within 48 hours. Typical reel edits take 2–5 days; full campaigns vary based on scope. Rush timelines are available on request.",
    },
    Faq {
        question: "What is pricing like?",
        answer: "Project-based or monthly retainers depending on deliverables. After the consultation, we share a transparent proposal with scope, timeline, and pricing options.",
    },
];

pub fn find_service(id: &str) -> Option<&'static ServiceData> {
    SERVICES.iter().find(|s| s.id == id)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactLinks {
    pub email: String,
    pub phone: String,
    pub instagram: &'static str,
}

/// Site-wide copy and links shared by the navbar, hero, and footer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub sections: &'static [&'static str],
    pub navigation: &'static [NavLink],
    pub schedule_url: String,
    pub contact: ContactLinks,
    pub year: i32,
}

impl SiteInfo {
    pub fn new(schedule_url: &str, email: &str, phone: &str) -> Self {
        Self {
            name: SITE_NAME,
            tagline: TAGLINE,
            sections: HOME_SECTIONS,
            navigation: NAVIGATION,
            schedule_url: schedule_url.to_string(),
            contact: ContactLinks {
                email: email.to_string(),
                phone: phone.to_string(),
                instagram: INSTAGRAM_URL,
            },
            year: Utc::now().year(),
        }
    }
}
