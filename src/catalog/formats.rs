use super::{CandidateItem, CandidateList};

pub const TWITTER: CandidateList = [
    CandidateItem::new(
        "Thread (5+ tweets)",
        "1/ Here's how I built a SaaS in 30 days...",
    ),
    CandidateItem::new(
        "Single Image + Text",
        "Just pushed this new feature to production! [image]",
    ),
    CandidateItem::new(
        "Poll",
        "Which framework do you prefer? React vs Vue vs Angular vs Svelte",
    ),
    CandidateItem::new(
        "Quote Tweet + Commentary",
        "This is exactly why I switched to TypeScript 👇",
    ),
    CandidateItem::new("Short Video Demo", "Quick demo of my new VS Code extension"),
    CandidateItem::new(
        "Text-only Hot Take",
        "Controversial: CSS is harder than JavaScript",
    ),
    CandidateItem::new(
        "Before/After Screenshots",
        "Refactored this component and improved performance by 40%",
    ),
    CandidateItem::new("Code Screenshot", "This one-liner saved me hours of debugging"),
    CandidateItem::new(
        "Question to Followers",
        "What's your favorite testing framework and why?",
    ),
    CandidateItem::new("List Format", "5 Git commands every developer should know:"),
];

pub const TIKTOK: CandidateList = [
    CandidateItem::new("Screen Recording Tutorial", "How to set up ESLint in 60 seconds"),
    CandidateItem::new("Transition Reveal", "From mockup to finished website"),
    CandidateItem::new("Pointing to Text Overlay", "5 reasons why your website is slow"),
    CandidateItem::new("Voiceover Code Walkthrough", "Let me explain this algorithm"),
    CandidateItem::new(
        "Green Screen Code",
        "Standing in front of my code explaining a concept",
    ),
    CandidateItem::new("Day in the Life", "POV: Working as a remote developer"),
    CandidateItem::new(
        "Expectation vs Reality",
        "What I thought coding was vs what it actually is",
    ),
    CandidateItem::new(
        "Duet with Another Creator",
        "Reacting to another dev's coding tips",
    ),
    CandidateItem::new(
        "Trending Sound + Coding Content",
        "Using viral sound with coding humor",
    ),
    CandidateItem::new(
        "Quick Tips with Text Overlay",
        "3 VS Code shortcuts you need to know",
    ),
];

pub const INSTAGRAM: CandidateList = [
    CandidateItem::new(
        "Carousel (Multiple Images)",
        "5 JavaScript concepts explained with diagrams",
    ),
    CandidateItem::new(
        "Single Image with Code",
        "This pattern will level up your React code",
    ),
    CandidateItem::new("Workspace Photo", "My coding setup for 2023"),
    CandidateItem::new("Short Tutorial Reel", "Create this hover effect in 30 seconds"),
    CandidateItem::new("Infographic", "The history of JavaScript frameworks"),
    CandidateItem::new("Before/After Project", "Website redesign: before and after"),
    CandidateItem::new("Quote Card", "Programming wisdom from senior developers"),
    CandidateItem::new(
        "Tech Stack Showcase",
        "The tools I use to build web apps in 2023",
    ),
    CandidateItem::new(
        "Code Snippet",
        "This one-liner will change how you write JavaScript",
    ),
    CandidateItem::new(
        "Project Demo Video",
        "Just launched: Tour of my new SaaS product",
    ),
];

pub const YOUTUBE: CandidateList = [
    CandidateItem::new(
        "Long-form Tutorial (15+ min)",
        "Complete guide to building a REST API with Node.js",
    ),
    CandidateItem::new("Coding Challenge", "Building a Twitter clone in 2 hours"),
    CandidateItem::new("Code Review", "Reviewing subscribers' React projects"),
    CandidateItem::new("Tech News Analysis", "What's new in React 19?"),
    CandidateItem::new(
        "Livestream Coding Session",
        "Building a full-stack app from scratch (3 hour stream)",
    ),
    CandidateItem::new(
        "Day in the Life",
        "Day in the life of a senior developer at Google",
    ),
    CandidateItem::new("Interview Prep", "Top 10 JavaScript interview questions"),
    CandidateItem::new(
        "Tech Comparison",
        "Next.js vs Remix: Which should you choose?",
    ),
    CandidateItem::new("Project Build Series", "Building an Instagram clone (Part 1/5)"),
    CandidateItem::new("Setup Tour", "My 2023 developer workspace tour"),
];
