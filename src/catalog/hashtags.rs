use super::{CandidateItem, CandidateList};

pub const TWITTER: CandidateList = [
    CandidateItem::tag("100DaysOfCode"),
    CandidateItem::tag("WebDev"),
    CandidateItem::tag("JavaScript"),
    CandidateItem::tag("ReactJS"),
    CandidateItem::tag("TechTwitter"),
    CandidateItem::tag("CodeNewbie"),
    CandidateItem::tag("Programming"),
    CandidateItem::tag("DevLife"),
    CandidateItem::tag("FrontEnd"),
    CandidateItem::tag("CodingTips"),
];

pub const TIKTOK: CandidateList = [
    CandidateItem::tag("TechTok"),
    CandidateItem::tag("CodeTok"),
    CandidateItem::tag("LearnToCode"),
    CandidateItem::tag("ProgrammerLife"),
    CandidateItem::tag("TechTutorial"),
    CandidateItem::tag("CodingChallenge"),
    CandidateItem::tag("DevHumor"),
    CandidateItem::tag("TechCareer"),
    CandidateItem::tag("SoftwareEngineering"),
    CandidateItem::tag("CodingTips"),
];

pub const INSTAGRAM: CandidateList = [
    CandidateItem::tag("CodingLife"),
    CandidateItem::tag("ProgrammerHumor"),
    CandidateItem::tag("WebDevelopment"),
    CandidateItem::tag("CodeLife"),
    CandidateItem::tag("TechStack"),
    CandidateItem::tag("DeveloperLife"),
    CandidateItem::tag("CodeIsLife"),
    CandidateItem::tag("TechCommunity"),
    CandidateItem::tag("FullStackDeveloper"),
    CandidateItem::tag("CodingFromHome"),
];

pub const YOUTUBE: CandidateList = [
    CandidateItem::tag("CodingTutorial"),
    CandidateItem::tag("WebDevelopment"),
    CandidateItem::tag("LearnToCode"),
    CandidateItem::tag("ProgrammingTips"),
    CandidateItem::tag("DevVlog"),
    CandidateItem::tag("CodeWithMe"),
    CandidateItem::tag("TechTutorial"),
    CandidateItem::tag("SoftwareEngineering"),
    CandidateItem::tag("CodeReview"),
    CandidateItem::tag("ProgrammerLife"),
];
