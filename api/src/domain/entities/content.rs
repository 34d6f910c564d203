//! Site content entities
//!
//! Hand-authored records rendered by the site sections. They are declared as
//! `'static` constants and never mutated.

use serde::Serialize;

/// A service offered by the agency, with the detail shown in its dialog
#[derive(Debug, Clone, Serialize)]
pub struct ServiceData {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub benefits: &'static [&'static str],
    pub process: &'static [&'static str],
    pub pricing: &'static str,
    pub deliverables: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub platform: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: &'static str,
    pub designation: &'static str,
    pub image_src: &'static str,
    pub bio: &'static str,
    pub quote: &'static str,
    pub social_links: &'static [SocialLink],
}

/// A featured reel: a local video/thumbnail pair plus its Instagram post
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelData {
    pub id: &'static str,
    pub video_url: &'static str,
    pub thumbnail: &'static str,
    pub title: &'static str,
    pub creator: &'static str,
    pub likes: u32,
    pub comments: u32,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

/// A client quote shown beside the contact form
#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub designation: &'static str,
    pub src: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}
