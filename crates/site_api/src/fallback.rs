use shared::domain::Work;

pub const SITE_NAME: &str = "PORTFOLIO.";

pub const TAGLINE: &str = "Creative Developer.";
pub const BIO: &str = "I craft minimal, engaging, and performant digital experiences with a focus on typography and motion.";

pub const EMAIL: &str = "hello@example.com";
pub const GITHUB: &str = "#";
pub const TWITTER: &str = "#";
pub const LINKEDIN: &str = "#";

pub const ABOUT_TITLE: &str = "Hi, I’m Sahar.";
pub const ABOUT_SUBTITLE: &str = "Creative Developer & Designer";
pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I am a creative developer focusing on building modern, aesthetic, and fluid user experiences.",
    "I believe in the power of motion and typography to elevate digital interfaces into memorable experiences.",
];

pub const SKILLS_TOP: [&str; 11] = [
    "React",
    "TypeScript",
    "Next.js",
    "Tailwind CSS",
    "GSAP",
    "Node.js",
    "Figma",
    "UI/UX Design",
    "React",
    "TypeScript",
    "Next.js",
];

pub const SKILLS_BOTTOM: [&str; 10] = [
    "Creative Coding",
    "Web Design",
    "Three.js",
    "Framer Motion",
    "Vite",
    "GraphQL",
    "Supabase",
    "Vercel",
    "Creative Coding",
    "Web Design",
];

pub fn works() -> Vec<Work> {
    vec![
        Work::summary(
            "fallback-1",
            "E-Commerce Platform",
            "e-commerce-platform",
            "Web Development",
            "2025",
            &["React", "Next.js", "Stripe"],
        ),
        Work::summary(
            "fallback-2",
            "Fintech Dashboard",
            "fintech-dashboard",
            "UI/UX Design",
            "2024",
            &["Figma", "TypeScript", "D3.js"],
        ),
        Work::summary(
            "fallback-3",
            "AI Content Generator",
            "ai-content-generator",
            "Full Stack",
            "2024",
            &["Node.js", "OpenAI", "React"],
        ),
    ]
}
