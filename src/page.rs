//! Page composition: turns a [`Localizer`] and the contact links into an
//! ordered list of blocks, independent of any markup.
use crate::contact::{self, ContactKind, ContactLink};
use crate::i18n::{Language, Localizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Building,
    Landmark,
    Store,
    Network,
    Settings,
    Factory,
    Briefcase,
    Check,
    Lightbulb,
    Dot,
    Linkedin,
    Github,
    Mail,
    Phone,
}

impl Icon {
    /// Stroke outlines for a 24x24 viewbox, drawn with `currentColor` so the
    /// surrounding text color applies.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Building => &[
                "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z",
                "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2",
                "M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2",
                "M10 6h4M10 10h4M10 14h4M10 18h4",
            ],
            Self::Landmark => &["M3 22h18", "M6 18v-7M10 18v-7M14 18v-7M18 18v-7", "M12 2l8 5H4z"],
            Self::Store => &["M2 7l2-5h16l2 5", "M4 7v15h16V7", "M2 7h20", "M9 22v-6h6v6"],
            Self::Network => &[
                "M9 2h6v6H9z",
                "M2 16h6v6H2z",
                "M16 16h6v6h-6z",
                "M5 16v-3h14v3",
                "M12 13V8",
            ],
            Self::Settings => &[
                "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
                "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 0 1-4 0v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 4.68 15a1.65 1.65 0 0 0-1.51-1H3a2 2 0 0 1 0-4h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 9 4.68a1.65 1.65 0 0 0 1-1.51V3a2 2 0 0 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 19.4 9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 0 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z",
            ],
            Self::Factory => &["M2 20V8l6 4V8l6 4V4h8v16z", "M7 16h1M12 16h1M17 16h1"],
            Self::Briefcase => &["M4 7h16v13H4z", "M16 7V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v2"],
            Self::Check => &["M20 6L9 17l-5-5"],
            Self::Lightbulb => &[
                "M9 18h6M12 2v5M12 12v1M12 22v-3M8 9a4 4 0 118 0 4 4 0 01-1.302 2.942c-.521.554-.9 1.258-1.078 2.058h-3.24c-.178-.8-.557-1.504-1.078-2.058A4 4 0 018 9z",
            ],
            Self::Dot => &["M12 10a2 2 0 1 0 0 4 2 2 0 0 0 0-4z"],
            Self::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4 2 2 0 0 0 0-4z",
            ],
            Self::Github => &[
                "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22",
            ],
            Self::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M22 6l-10 7L2 6",
            ],
            Self::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
        }
    }

    fn for_industry(key: &str) -> Self {
        match key {
            "banking" | "insurance" => Self::Building,
            "government" => Self::Landmark,
            "retail" => Self::Store,
            "telecom" => Self::Network,
            "processOptimization" => Self::Settings,
            "manufacturing" | "logistics" => Self::Factory,
            _ => Self::Briefcase,
        }
    }
}

/// Content section a variant can place between the description and the
/// contact row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Industries,
    SystemsThinking,
    Skills,
    StrategicMap,
    Objective,
    Benefits,
    Pricing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Badges,
    Checklist,
    Cards,
    Bullets,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub key: String,
    pub icon: Icon,
    pub title: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub section: Section,
    pub heading: Option<String>,
    pub layout: Layout,
    pub items: Vec<Item>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingCard {
    pub key: String,
    pub name: String,
    pub price: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pricing {
    pub heading: String,
    pub cards: Vec<PricingCard>,
    pub cta: String,
    pub booking: Option<&'static ContactLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    pub language: Language,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    LanguageSwitcher {
        label: String,
        options: Vec<LanguageOption>,
    },
    Title {
        title: String,
        role: String,
    },
    Paragraph(String),
    Collection(Collection),
    Pricing(Pricing),
    Contacts {
        heading: String,
        links: &'static [ContactLink],
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub language: Language,
    pub document_title: String,
    pub blocks: Vec<Block>,
    /// Paths rendered as placeholders because their content was missing or
    /// had the wrong shape.
    pub missing: Vec<String>,
}

/// Builds the page for the localizer's variant and active language.
pub fn present(localizer: &Localizer, links: &'static [ContactLink]) -> Page {
    let mut p = Presenter {
        localizer,
        missing: Vec::new(),
    };

    let title = p.text("title");
    let role = p.text("role");
    let document_title = format!("{title} - {role}");

    let mut blocks = vec![
        Block::LanguageSwitcher {
            label: p.text("languageSwitcher"),
            options: Language::ALL
                .into_iter()
                .map(|language| LanguageOption {
                    language,
                    active: language == localizer.language(),
                })
                .collect(),
        },
        Block::Title { title, role },
        Block::Paragraph(p.text("description")),
    ];

    let sections = localizer.variant().sections();
    for section in sections {
        if let Some(collection) = p.collection(*section) {
            blocks.push(Block::Collection(collection));
        }
    }
    // pricing always follows the collections
    if sections.contains(&Section::Pricing) {
        blocks.push(Block::Pricing(p.pricing(links)));
    }

    blocks.push(Block::Contacts {
        heading: p.text("contactLinks"),
        links,
    });

    Page {
        language: localizer.language(),
        document_title,
        blocks,
        missing: p.missing,
    }
}

struct Presenter<'a> {
    localizer: &'a Localizer,
    missing: Vec<String>,
}

impl Presenter<'_> {
    fn placeholder(&mut self, path: &str) -> String {
        self.missing.push(path.to_string());
        path.to_string()
    }

    fn text(&mut self, path: &str) -> String {
        match self.localizer.text(path) {
            Some(s) => s,
            None => self.placeholder(path),
        }
    }

    /// Single item standing in for a whole collection whose content is
    /// missing or malformed.
    fn placeholder_item(&mut self, path: &str, icon: Icon) -> Item {
        Item {
            key: path.to_string(),
            icon,
            title: None,
            body: self.placeholder(path),
        }
    }

    fn text_entries(&mut self, path: &str, icon: impl Fn(&str) -> Icon) -> Vec<Item> {
        let Some(entries) = self.localizer.entries(path) else {
            return vec![self.placeholder_item(path, icon(path))];
        };
        entries
            .into_iter()
            .map(|(key, _)| Item {
                icon: icon(&key),
                title: None,
                body: self.text(&format!("{path}.{key}")),
                key,
            })
            .collect()
    }

    fn titled_entries(&mut self, path: &str) -> Vec<Item> {
        let Some(entries) = self.localizer.entries(path) else {
            return vec![self.placeholder_item(path, Icon::Dot)];
        };
        entries
            .into_iter()
            .map(|(key, _)| Item {
                title: Some(self.text(&format!("{path}.{key}.title"))),
                body: self.text(&format!("{path}.{key}.description")),
                icon: Icon::Dot,
                key,
            })
            .collect()
    }

    fn list(&mut self, path: &str, icon: Icon) -> Vec<Item> {
        let Some(items) = self.localizer.list(path) else {
            return vec![self.placeholder_item(path, icon)];
        };
        items
            .into_iter()
            .enumerate()
            .map(|(i, body)| Item {
                key: i.to_string(),
                icon,
                title: None,
                body,
            })
            .collect()
    }

    fn collection(&mut self, section: Section) -> Option<Collection> {
        let (heading, layout, items, note) = match section {
            Section::Industries => (
                None,
                Layout::Badges,
                self.text_entries("industries", Icon::for_industry),
                Some(self.text("experience")),
            ),
            Section::SystemsThinking => (
                Some(self.text("systemsThinking")),
                Layout::Checklist,
                self.text_entries("systemsThinkingPoints", |_| Icon::Check),
                None,
            ),
            Section::Skills => (
                Some(self.text("skills.title")),
                Layout::Cards,
                self.titled_entries("skills.items"),
                None,
            ),
            Section::StrategicMap => (
                Some(self.text("strategicMap")),
                Layout::Bullets,
                self.list("strategicMapItems", Icon::Dot),
                None,
            ),
            Section::Objective => (
                Some(self.text("objective")),
                Layout::Bullets,
                self.list("objectiveItems", Icon::Lightbulb),
                None,
            ),
            Section::Benefits => (
                Some(self.text("benefits.title")),
                Layout::Checklist,
                self.list("benefits.items", Icon::Check),
                None,
            ),
            Section::Pricing => return None,
        };
        Some(Collection {
            section,
            heading,
            layout,
            items,
            note,
        })
    }

    fn pricing_cards(&mut self, path: &str) -> Vec<PricingCard> {
        let Some(entries) = self.localizer.entries(path) else {
            return vec![PricingCard {
                key: path.to_string(),
                name: self.placeholder(path),
                price: String::new(),
                description: String::new(),
            }];
        };
        entries
            .into_iter()
            .map(|(key, _)| PricingCard {
                name: self.text(&format!("{path}.{key}.name")),
                price: self.text(&format!("{path}.{key}.price")),
                description: self.text(&format!("{path}.{key}.description")),
                key,
            })
            .collect()
    }

    fn pricing(&mut self, links: &'static [ContactLink]) -> Pricing {
        Pricing {
            heading: self.text("pricing.title"),
            cards: self.pricing_cards("pricing.options"),
            cta: self.text("pricing.cta"),
            booking: contact::find(links, ContactKind::Scheduling),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteVariant;
    use crate::contact::CONTACT_LINKS;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn kind(block: &Block) -> &'static str {
        match block {
            Block::LanguageSwitcher { .. } => "switcher",
            Block::Title { .. } => "title",
            Block::Paragraph(_) => "paragraph",
            Block::Collection(_) => "collection",
            Block::Pricing(_) => "pricing",
            Block::Contacts { .. } => "contacts",
        }
    }

    #[rstest]
    fn test_bundled_content_renders_without_placeholders(
        #[values(
            SiteVariant::Strategy,
            SiteVariant::Consulting,
            SiteVariant::Analytics,
            SiteVariant::Automation
        )]
        variant: SiteVariant,
        #[values(Language::En, Language::Es)] language: Language,
    ) {
        let page = present(&Localizer::new(variant, language), CONTACT_LINKS);
        assert_eq!(page.missing, Vec::<String>::new());
        assert_eq!(page.language, language);
    }

    #[test]
    fn test_strategy_block_order() {
        let page = present(&Localizer::new(SiteVariant::Strategy, Language::En), CONTACT_LINKS);
        let kinds: Vec<_> = page.blocks.iter().map(kind).collect();
        assert_eq!(
            kinds,
            vec![
                "switcher",
                "title",
                "paragraph",
                "collection",
                "collection",
                "collection",
                "collection",
                "collection",
                "contacts"
            ]
        );
        let sections: Vec<_> = page
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Collection(c) => Some(c.section),
                _ => None,
            })
            .collect();
        assert_eq!(sections, SiteVariant::Strategy.sections());
    }

    #[test]
    fn test_pricing_comes_before_contacts() {
        let page = present(&Localizer::new(SiteVariant::Consulting, Language::En), CONTACT_LINKS);
        let kinds: Vec<_> = page.blocks.iter().map(kind).collect();
        assert_eq!(&kinds[kinds.len() - 2..], &["pricing", "contacts"]);
        let Some(Block::Pricing(pricing)) = page.blocks.iter().find(|b| kind(b) == "pricing") else {
            panic!("consulting should render pricing");
        };
        assert!(!pricing.cards.is_empty());
        assert_eq!(pricing.booking.map(|l| l.kind), Some(ContactKind::Scheduling));
    }

    #[test]
    fn test_title_block_and_document_title() {
        let page = present(&Localizer::new(SiteVariant::Strategy, Language::En), CONTACT_LINKS);
        let Block::Title { title, role } = &page.blocks[1] else {
            panic!("second block should be the title");
        };
        assert_eq!(role, "Data Engineer");
        assert_eq!(page.document_title, format!("{title} - Data Engineer"));
    }

    #[test]
    fn test_switcher_flags_active_language() {
        let page = present(&Localizer::new(SiteVariant::Strategy, Language::Es), CONTACT_LINKS);
        let Block::LanguageSwitcher { options, .. } = &page.blocks[0] else {
            panic!("first block should be the switcher");
        };
        let active: Vec<_> = options.iter().filter(|o| o.active).map(|o| o.language).collect();
        assert_eq!(active, vec![Language::Es]);
        assert_eq!(options.len(), Language::ALL.len());
    }

    #[test]
    fn test_industries_keep_order_and_icons() {
        let page = present(&Localizer::new(SiteVariant::Strategy, Language::Es), CONTACT_LINKS);
        let Block::Collection(industries) = &page.blocks[3] else {
            panic!("industries should follow the description");
        };
        assert_eq!(industries.layout, Layout::Badges);
        let icons: Vec<_> = industries.items.iter().map(|i| i.icon).collect();
        assert_eq!(
            icons,
            vec![Icon::Building, Icon::Landmark, Icon::Store, Icon::Network, Icon::Settings]
        );
        assert!(industries.note.is_some());
    }

    #[test]
    fn test_every_rendered_icon_has_an_outline() {
        let industry_keys = [
            "banking",
            "government",
            "retail",
            "telecom",
            "processOptimization",
            "logistics",
            "other",
        ];
        let icons = industry_keys
            .into_iter()
            .map(Icon::for_industry)
            .chain([Icon::Check, Icon::Lightbulb, Icon::Dot])
            .chain(CONTACT_LINKS.iter().map(|link| link.icon));
        for icon in icons {
            assert!(!icon.paths().is_empty(), "{icon:?} draws nothing");
            for d in icon.paths() {
                assert!(d.starts_with('M'), "{icon:?} path {d} does not start with a move");
            }
        }
    }

    #[test]
    fn test_contacts_close_the_page() {
        let page = present(&Localizer::new(SiteVariant::Automation, Language::En), CONTACT_LINKS);
        match page.blocks.last() {
            Some(Block::Contacts { links, .. }) => assert_eq!(*links, CONTACT_LINKS),
            other => panic!("last block should be contacts, got {other:?}"),
        }
    }

    #[test]
    fn test_language_round_trip_is_stable() {
        let mut localizer = Localizer::new(SiteVariant::Analytics, Language::En);
        let first = present(&localizer, CONTACT_LINKS);
        localizer.set_language("es");
        assert_ne!(present(&localizer, CONTACT_LINKS), first);
        localizer.set_language("en");
        assert_eq!(present(&localizer, CONTACT_LINKS), first);
    }

    fn presenter(localizer: &Localizer) -> Presenter<'_> {
        Presenter {
            localizer,
            missing: Vec::new(),
        }
    }

    #[test]
    fn test_missing_entries_render_path() {
        let localizer = Localizer::new(SiteVariant::Strategy, Language::En);
        let mut p = presenter(&localizer);
        let items = p.text_entries("industries.unknown", |_| Icon::Dot);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].body, "industries.unknown");
        let bullets = p.list("benefits.items", Icon::Check);
        assert_eq!(bullets[0].body, "benefits.items");
        assert_eq!(p.missing, vec!["industries.unknown", "benefits.items"]);
    }

    #[test]
    fn test_missing_nested_collections_record_their_own_path() {
        let localizer = Localizer::new(SiteVariant::Strategy, Language::En);
        let mut p = presenter(&localizer);

        let skills = p.titled_entries("skills.catalog");
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].title, None);
        assert_eq!(skills[0].body, "skills.catalog");

        // strategy has no pricing section in its dictionary
        let cards = p.pricing_cards("pricing.options");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].name, "pricing.options");

        assert_eq!(p.missing, vec!["skills.catalog", "pricing.options"]);
    }

    #[test]
    fn test_wrong_shape_is_a_placeholder() {
        let localizer = Localizer::new(SiteVariant::Strategy, Language::En);
        let mut p = presenter(&localizer);
        assert_eq!(p.text("strategicMapItems"), "strategicMapItems");
        assert_eq!(p.list("skills", Icon::Dot)[0].body, "skills");
        assert_eq!(p.titled_entries("title")[0].body, "title");
        assert_eq!(p.missing, vec!["strategicMapItems", "skills", "title"]);
    }
}
