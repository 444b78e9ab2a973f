pub mod formats;
pub mod hashtags;
pub mod trends;

use crate::{Category, Platform};

pub const CANDIDATES_PER_LIST: usize = 10;

pub type CandidateList = [CandidateItem; CANDIDATES_PER_LIST];

/// A compiled-in catalogue entry. Hashtags carry no example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateItem {
    pub name: &'static str,
    pub example: Option<&'static str>,
}

impl CandidateItem {
    pub const fn new(name: &'static str, example: &'static str) -> Self {
        Self {
            name,
            example: Some(example),
        }
    }

    pub const fn tag(name: &'static str) -> Self {
        Self { name, example: None }
    }
}

pub fn candidates(platform: Platform, category: Category) -> &'static CandidateList {
    match category {
        Category::Trends => match platform {
            Platform::Twitter => &trends::TWITTER,
            Platform::TikTok => &trends::TIKTOK,
            Platform::Instagram => &trends::INSTAGRAM,
            Platform::YouTube => &trends::YOUTUBE,
        },
        Category::Hashtags => match platform {
            Platform::Twitter => &hashtags::TWITTER,
            Platform::TikTok => &hashtags::TIKTOK,
            Platform::Instagram => &hashtags::INSTAGRAM,
            Platform::YouTube => &hashtags::YOUTUBE,
        },
        Category::Formats => match platform {
            Platform::Twitter => &formats::TWITTER,
            Platform::TikTok => &formats::TIKTOK,
            Platform::Instagram => &formats::INSTAGRAM,
            Platform::YouTube => &formats::YOUTUBE,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_list_has_unique_names() {
        for platform in Platform::ALL {
            for category in Category::ALL {
                let list = candidates(platform, category);
                for (i, item) in list.iter().enumerate() {
                    assert!(
                        list[i + 1..].iter().all(|other| other.name != item.name),
                        "duplicate {} in {:?}/{:?}",
                        item.name,
                        platform,
                        category
                    );
                }
            }
        }
    }

    #[test]
    fn example_presence_follows_category() {
        for platform in Platform::ALL {
            for category in Category::ALL {
                let with_example = candidates(platform, category)
                    .iter()
                    .filter(|item| item.example.is_some())
                    .count();
                let expected = if category.has_examples() {
                    CANDIDATES_PER_LIST
                } else {
                    0
                };
                assert_eq!(with_example, expected);
            }
        }
    }
}
