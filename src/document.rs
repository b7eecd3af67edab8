//! Layout-agnostic visual document tree.
//!
//! The render pipeline turns a record plus a layout identifier into this
//! tree; the web preview walks it into markup and the canvas rasterizer
//! walks it into pixels. Keeping one structured intermediate means both
//! consumers always agree on what the "currently rendered output" is.

use crate::layout::LayoutId;

/// A rendered resume: ordered regions of ordered blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub layout: LayoutId,
    pub regions: Vec<Region>,
}

impl Document {
    /// All section headings in document order.
    pub fn headings(&self) -> Vec<&str> {
        self.regions
            .iter()
            .flat_map(|r| r.blocks.iter())
            .filter_map(|b| match b {
                Block::Heading(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Whether any text content of the document contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.regions
            .iter()
            .flat_map(|r| r.blocks.iter())
            .any(|b| b.contains_text(needle))
    }
}

/// Visual role of a region; layouts arrange regions differently but the
/// block vocabulary is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionRole {
    /// Full-width header band (professional layout).
    Banner,
    /// Colored side column (creative layout).
    Sidebar,
    /// Primary content column.
    Main,
    /// Secondary content column (professional layout).
    Aside,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub role: RegionRole,
    pub blocks: Vec<Block>,
}

impl Region {
    pub fn new(role: RegionRole) -> Self {
        Self {
            role,
            blocks: Vec::new(),
        }
    }
}

/// One visual block within a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// The entrant's name, largest text on the page.
    Name(String),
    /// Professional title under the name.
    Title(String),
    /// Circular initials badge (creative layout).
    Monogram(String),
    /// Contact line; empty items are suppressed before construction.
    Contact(Vec<ContactItem>),
    /// Section heading.
    Heading(String),
    /// Free-flowing paragraph (the summary).
    Paragraph(String),
    /// One education/experience/project entry.
    Entry {
        heading: String,
        subheading: String,
        date: String,
        body: String,
        link: Option<String>,
    },
    /// Pill-style tag list (skills).
    Tags(Vec<String>),
    /// Plain bullet list (skills in the professional layout).
    Items(Vec<String>),
}

impl Block {
    fn contains_text(&self, needle: &str) -> bool {
        match self {
            Block::Name(s)
            | Block::Title(s)
            | Block::Monogram(s)
            | Block::Heading(s)
            | Block::Paragraph(s) => s.contains(needle),
            Block::Contact(items) => items.iter().any(|i| i.value.contains(needle)),
            Block::Entry {
                heading,
                subheading,
                date,
                body,
                link,
            } => {
                heading.contains(needle)
                    || subheading.contains(needle)
                    || date.contains(needle)
                    || body.contains(needle)
                    || link.as_deref().is_some_and(|l| l.contains(needle))
            }
            Block::Tags(items) | Block::Items(items) => items.iter().any(|i| i.contains(needle)),
        }
    }
}

/// Kind of contact detail, used for per-item icons in the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactItem {
    pub kind: ContactKind,
    pub value: String,
}

/// First character of each whitespace-separated word, for the creative
/// layout's monogram badge.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("Ada"), "A");
        assert_eq!(initials("  spaced   out  "), "so");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_contains_text_walks_entries() {
        let doc = Document {
            layout: LayoutId::Minimalist,
            regions: vec![Region {
                role: RegionRole::Main,
                blocks: vec![Block::Entry {
                    heading: "Senior Engineer".to_string(),
                    subheading: "Acme Corp".to_string(),
                    date: "2020".to_string(),
                    body: "Shipped things.".to_string(),
                    link: None,
                }],
            }],
        };

        assert!(doc.contains_text("Acme"));
        assert!(doc.contains_text("Shipped"));
        assert!(!doc.contains_text("absent"));
    }

    #[test]
    fn test_headings_in_order() {
        let doc = Document {
            layout: LayoutId::Minimalist,
            regions: vec![
                Region {
                    role: RegionRole::Sidebar,
                    blocks: vec![Block::Heading("Contact".to_string())],
                },
                Region {
                    role: RegionRole::Main,
                    blocks: vec![
                        Block::Heading("Experience".to_string()),
                        Block::Paragraph("text".to_string()),
                        Block::Heading("Education".to_string()),
                    ],
                },
            ],
        };

        assert_eq!(doc.headings(), vec!["Contact", "Experience", "Education"]);
    }
}
