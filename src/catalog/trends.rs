use super::{CandidateItem, CandidateList};

pub const TWITTER: CandidateList = [
    CandidateItem::new("Day in the Life", "A day in the life of a software engineer"),
    CandidateItem::new("Hot Take", "Hot take: TypeScript > JavaScript"),
    CandidateItem::new("Coding Tips", "5 VS Code shortcuts that changed my life"),
    CandidateItem::new("Tech News Reaction", "My thoughts on the new MacBook Pro"),
    CandidateItem::new("Code Roast", "Roasting your GitHub repositories"),
    CandidateItem::new("Career Advice", "How I got a job at Google"),
    CandidateItem::new("Tech Stack Reveal", "The tech stack behind my SaaS product"),
    CandidateItem::new("Tutorial", "Building a Twitter clone with React"),
    CandidateItem::new("Unpopular Opinion", "Unpopular opinion: PHP is actually great"),
    CandidateItem::new(
        "Productivity Hack",
        "This productivity system changed my coding workflow",
    ),
];

pub const TIKTOK: CandidateList = [
    CandidateItem::new("Code Transition", "From messy code to clean code transition"),
    CandidateItem::new(
        "POV: Developer Life",
        "POV: When your code works on the first try",
    ),
    CandidateItem::new("Tech Unboxing", "Unboxing my new developer setup"),
    CandidateItem::new(
        "Expectation vs Reality",
        "What people think coding is vs what it actually is",
    ),
    CandidateItem::new("Coding Challenges", "Solving this algorithm in 60 seconds"),
    CandidateItem::new("Tech Humor", "When the client asks for 'small changes'"),
    CandidateItem::new("Screen Recording Tips", "3 terminal tricks to look like a pro"),
    CandidateItem::new(
        "Before/After Projects",
        "My portfolio before and after learning React",
    ),
    CandidateItem::new("Quick Tutorials", "Create this animation in 30 seconds"),
    CandidateItem::new("Tech Comparisons", "React vs Angular: which is better?"),
];

pub const INSTAGRAM: CandidateList = [
    CandidateItem::new("Workspace Setup", "My minimal developer workspace"),
    CandidateItem::new("Code Snippets", "This one-liner will save you hours"),
    CandidateItem::new("Tech Infographics", "The evolution of JavaScript frameworks"),
    CandidateItem::new("Behind the Scenes", "How I built my startup in 30 days"),
    CandidateItem::new("Tech Memes", "When you forget a semicolon in JavaScript"),
    CandidateItem::new("Project Showcase", "Just launched my new portfolio website"),
    CandidateItem::new("Learning Journey", "My coding progress: 1 year difference"),
    CandidateItem::new("Tech Events", "Highlights from React Conf 2023"),
    CandidateItem::new(
        "Coding Quotes",
        "Code is like humor. When you have to explain it, it's bad.",
    ),
    CandidateItem::new("Tech Book Reviews", "5 books that made me a better developer"),
];

pub const YOUTUBE: CandidateList = [
    CandidateItem::new("Project Build Series", "Building a Netflix Clone (Part 1/5)"),
    CandidateItem::new("Code Reviews", "Code reviewing subscribers' projects"),
    CandidateItem::new(
        "Tech Comparisons",
        "React vs Vue in 2023: Which should you learn?",
    ),
    CandidateItem::new("Day in the Life", "Day in the life of a senior developer"),
    CandidateItem::new("Coding Challenges", "Solving 5 JavaScript interview questions"),
    CandidateItem::new(
        "Tech News Analysis",
        "What Apple's new M3 chip means for developers",
    ),
    CandidateItem::new("Deep Dive Tutorials", "Understanding React's useEffect hook"),
    CandidateItem::new("Career Advice", "How to negotiate your developer salary"),
    CandidateItem::new("Tech Stack Explanation", "Why we chose Next.js for our startup"),
    CandidateItem::new(
        "Live Coding",
        "Building a Twitter clone from scratch (3 hour livestream)",
    ),
];
