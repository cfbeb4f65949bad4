use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceError {
    #[error("no resource tab at index {0}")]
    TabNotFound(usize),
}

#[derive(Debug)]
pub struct ResourceLink {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct ResourceCategory {
    pub category: &'static str,
    pub links: &'static [ResourceLink],
}

static CATEGORIES: [ResourceCategory; 2] = [
    ResourceCategory {
        category: "🌐 Websites & Interactive Tools",
        links: &[
            ResourceLink {
                name: "Khan Academy: Division",
                url: "https://www.khanacademy.org/math/arithmetic/arith-review-multiply-divide/arith-division-intro/v/the-concept-of-division",
                description: "Video tutorials and practice problems for all levels of division.",
            },
            ResourceLink {
                name: "Coolmath Games: Division",
                url: "https://www.coolmathgames.com/division",
                description: "Fun, interactive games to practice your division skills.",
            },
        ],
    },
    ResourceCategory {
        category: "📖 Articles & Fun Facts",
        links: &[ResourceLink {
            name: "Fun Facts About Animals and Sharing",
            url: "https://www.nationalgeographic.com/animals/mammals/facts",
            description: "Explore how different animal species share food and resources in the wild.",
        }],
    },
];

pub fn categories() -> &'static [ResourceCategory] {
    &CATEGORIES
}

pub fn category(tab: usize) -> Result<&'static ResourceCategory, ResourceError> {
    CATEGORIES.get(tab).ok_or(ResourceError::TabNotFound(tab))
}
