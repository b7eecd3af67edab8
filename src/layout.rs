//! Layout selection and the three resume renderers.
//!
//! `render` is a pure, total function from `(record, layout)` to a
//! [`Document`]. The three layouts are independent functions over the same
//! record shape; they share no state and differ only in arrangement and
//! heading wording. A repeatable section with zero entries contributes
//! nothing — no heading, no empty body.

use crate::document::{Block, ContactItem, ContactKind, Document, Region, RegionRole, initials};
use crate::model::{EducationEntry, ExperienceEntry, PersonalDetails, ResumeRecord};

/// Closed set of visual layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutId {
    Minimalist,
    Professional,
    Creative,
}

impl LayoutId {
    /// All layouts, in tab-strip order.
    pub const ALL: [LayoutId; 3] = [
        LayoutId::Minimalist,
        LayoutId::Professional,
        LayoutId::Creative,
    ];

    /// Stable identifier, also used as a CSS class suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutId::Minimalist => "minimalist",
            LayoutId::Professional => "professional",
            LayoutId::Creative => "creative",
        }
    }

    /// Human-readable tab label.
    pub fn label(&self) -> &'static str {
        match self {
            LayoutId::Minimalist => "Minimalist",
            LayoutId::Professional => "Professional",
            LayoutId::Creative => "Creative",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "minimalist" => Some(LayoutId::Minimalist),
            "professional" => Some(LayoutId::Professional),
            "creative" => Some(LayoutId::Creative),
            _ => None,
        }
    }
}

/// Render the record in the chosen layout.
pub fn render(record: &ResumeRecord, layout: LayoutId) -> Document {
    match layout {
        LayoutId::Minimalist => render_minimalist(record),
        LayoutId::Professional => render_professional(record),
        LayoutId::Creative => render_creative(record),
    }
}

/// Contact items with empty values suppressed.
fn contact_items(personal: &PersonalDetails) -> Vec<ContactItem> {
    let mut items = Vec::new();
    if !personal.email.is_empty() {
        items.push(ContactItem {
            kind: ContactKind::Email,
            value: personal.email.clone(),
        });
    }
    if !personal.phone.is_empty() {
        items.push(ContactItem {
            kind: ContactKind::Phone,
            value: personal.phone.clone(),
        });
    }
    if !personal.location.is_empty() {
        items.push(ContactItem {
            kind: ContactKind::Location,
            value: personal.location.clone(),
        });
    }
    items
}

fn experience_block(entry: &ExperienceEntry) -> Block {
    Block::Entry {
        heading: entry.position.clone(),
        subheading: entry.company.clone(),
        date: entry.date.clone(),
        body: entry.description.clone(),
        link: None,
    }
}

fn education_block(entry: &EducationEntry) -> Block {
    Block::Entry {
        heading: entry.degree.clone(),
        subheading: entry.institution.clone(),
        date: entry.date.clone(),
        body: entry.description.clone(),
        link: None,
    }
}

fn project_blocks(record: &ResumeRecord) -> Vec<Block> {
    record
        .projects
        .iter()
        .map(|p| Block::Entry {
            heading: p.name.clone(),
            subheading: String::new(),
            date: String::new(),
            body: p.description.clone(),
            link: (!p.url.is_empty()).then(|| p.url.clone()),
        })
        .collect()
}

fn skill_names(record: &ResumeRecord) -> Vec<String> {
    record.skills.iter().map(|s| s.name.clone()).collect()
}

/// Single column: header, summary, then experience, education, skills,
/// projects.
fn render_minimalist(record: &ResumeRecord) -> Document {
    let mut main = Region::new(RegionRole::Main);
    main.blocks.push(Block::Name(record.personal.name.clone()));
    main.blocks
        .push(Block::Title(record.personal.title.clone()));
    main.blocks
        .push(Block::Contact(contact_items(&record.personal)));

    if !record.personal.summary.is_empty() {
        main.blocks
            .push(Block::Paragraph(record.personal.summary.clone()));
    }

    if !record.experience.is_empty() {
        main.blocks.push(Block::Heading("Experience".to_string()));
        main.blocks
            .extend(record.experience.iter().map(experience_block));
    }

    if !record.education.is_empty() {
        main.blocks.push(Block::Heading("Education".to_string()));
        main.blocks
            .extend(record.education.iter().map(education_block));
    }

    if !record.skills.is_empty() {
        main.blocks.push(Block::Heading("Skills".to_string()));
        main.blocks.push(Block::Tags(skill_names(record)));
    }

    if !record.projects.is_empty() {
        main.blocks.push(Block::Heading("Projects".to_string()));
        main.blocks.extend(project_blocks(record));
    }

    Document {
        layout: LayoutId::Minimalist,
        regions: vec![main],
    }
}

/// Dark banner header, two-thirds main column (summary, experience,
/// education), one-third aside (skills as bullets, projects).
fn render_professional(record: &ResumeRecord) -> Document {
    let mut banner = Region::new(RegionRole::Banner);
    banner
        .blocks
        .push(Block::Name(record.personal.name.clone()));
    banner
        .blocks
        .push(Block::Title(record.personal.title.clone()));
    banner
        .blocks
        .push(Block::Contact(contact_items(&record.personal)));

    let mut main = Region::new(RegionRole::Main);
    if !record.personal.summary.is_empty() {
        main.blocks
            .push(Block::Heading("Professional Summary".to_string()));
        main.blocks
            .push(Block::Paragraph(record.personal.summary.clone()));
    }
    if !record.experience.is_empty() {
        main.blocks
            .push(Block::Heading("Professional Experience".to_string()));
        main.blocks
            .extend(record.experience.iter().map(experience_block));
    }
    if !record.education.is_empty() {
        main.blocks.push(Block::Heading("Education".to_string()));
        main.blocks
            .extend(record.education.iter().map(education_block));
    }

    let mut aside = Region::new(RegionRole::Aside);
    if !record.skills.is_empty() {
        aside.blocks.push(Block::Heading("Skills".to_string()));
        aside.blocks.push(Block::Items(skill_names(record)));
    }
    if !record.projects.is_empty() {
        aside.blocks.push(Block::Heading("Projects".to_string()));
        aside.blocks.extend(project_blocks(record));
    }

    Document {
        layout: LayoutId::Professional,
        regions: vec![banner, main, aside],
    }
}

/// Colored sidebar (monogram, contact, skills, projects) next to a main
/// column ("About Me" summary, experience, education).
fn render_creative(record: &ResumeRecord) -> Document {
    let mut sidebar = Region::new(RegionRole::Sidebar);
    sidebar
        .blocks
        .push(Block::Monogram(initials(&record.personal.name)));
    sidebar
        .blocks
        .push(Block::Name(record.personal.name.clone()));
    sidebar
        .blocks
        .push(Block::Title(record.personal.title.clone()));
    // The contact heading is unconditional in this layout.
    sidebar.blocks.push(Block::Heading("Contact".to_string()));
    sidebar
        .blocks
        .push(Block::Contact(contact_items(&record.personal)));

    if !record.skills.is_empty() {
        sidebar.blocks.push(Block::Heading("Skills".to_string()));
        sidebar.blocks.push(Block::Tags(skill_names(record)));
    }
    if !record.projects.is_empty() {
        sidebar.blocks.push(Block::Heading("Projects".to_string()));
        sidebar.blocks.extend(project_blocks(record));
    }

    let mut main = Region::new(RegionRole::Main);
    if !record.personal.summary.is_empty() {
        main.blocks.push(Block::Heading("About Me".to_string()));
        main.blocks
            .push(Block::Paragraph(record.personal.summary.clone()));
    }
    if !record.experience.is_empty() {
        main.blocks.push(Block::Heading("Experience".to_string()));
        main.blocks
            .extend(record.experience.iter().map(experience_block));
    }
    if !record.education.is_empty() {
        main.blocks.push(Block::Heading("Education".to_string()));
        main.blocks
            .extend(record.education.iter().map(education_block));
    }

    Document {
        layout: LayoutId::Creative,
        regions: vec![sidebar, main],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::{SectionKind, remove_entry};

    const SECTION_HEADINGS: [&str; 6] = [
        "Experience",
        "Professional Experience",
        "Education",
        "Skills",
        "Projects",
        "About Me",
    ];

    #[test]
    fn test_empty_record_renders_no_section_headings() {
        let record = ResumeRecord::default();
        for layout in LayoutId::ALL {
            let doc = render(&record, layout);
            for heading in doc.headings() {
                assert!(
                    !SECTION_HEADINGS.contains(&heading),
                    "{layout:?} rendered heading {heading:?} for an empty record"
                );
            }
        }
    }

    #[test]
    fn test_empty_section_omitted_independently() {
        let mut record = ResumeRecord::example();
        record.projects.clear();

        for layout in LayoutId::ALL {
            let doc = render(&record, layout);
            let headings = doc.headings();
            assert!(!headings.contains(&"Projects"), "{layout:?}");
            assert!(headings.contains(&"Skills"), "{layout:?}");
        }
    }

    #[test]
    fn test_all_layouts_carry_record_content() {
        let record = ResumeRecord::example();
        for layout in LayoutId::ALL {
            let doc = render(&record, layout);
            assert!(doc.contains_text("John Doe"), "{layout:?}");
            assert!(doc.contains_text("Tech Solutions Inc."), "{layout:?}");
            assert!(doc.contains_text("University of Technology"), "{layout:?}");
            assert!(doc.contains_text("TypeScript"), "{layout:?}");
            assert!(doc.contains_text("E-commerce Platform"), "{layout:?}");
        }
    }

    #[test]
    fn test_creative_monogram_and_contact() {
        let record = ResumeRecord::example();
        let doc = render(&record, LayoutId::Creative);
        assert!(doc.contains_text("JD"));
        // Contact heading is unconditional in the creative layout.
        assert!(doc.headings().contains(&"Contact"));
    }

    #[test]
    fn test_project_link_only_when_url_present() {
        let mut record = ResumeRecord::example();
        record.projects[0].url.clear();
        let doc = render(&record, LayoutId::Minimalist);
        assert!(!doc.contains_text("github.com"));
    }

    // End-to-end scenario: edit the example record, switch layouts, and
    // check the rendered output reflects the surviving data.
    #[test]
    fn test_edit_then_switch_layout_scenario() {
        let record = ResumeRecord::example();
        assert_eq!(record.experience.len(), 2);

        let second_id = record.experience[1].id.clone();
        let record = remove_entry(&record, SectionKind::Experience, &second_id);

        assert_eq!(record.experience.len(), 1);
        assert_eq!(record.experience[0].company, "Tech Solutions Inc.");
        assert_eq!(record.experience[0].position, "Senior Software Engineer");

        // Was viewing minimalist; switch to creative.
        let doc = render(&record, LayoutId::Minimalist);
        assert!(!doc.contains_text("Digital Innovations"));

        let doc = render(&record, LayoutId::Creative);
        assert!(doc.contains_text("John Doe"));
        assert!(doc.contains_text("Software Engineer"));
        assert!(doc.contains_text("Tech Solutions Inc."));
        assert!(doc.contains_text("Senior Software Engineer"));
        assert!(!doc.contains_text("Digital Innovations"));
    }

    #[test]
    fn test_layout_id_parse_roundtrip() {
        for layout in LayoutId::ALL {
            assert_eq!(LayoutId::parse(layout.as_str()), Some(layout));
        }
        assert_eq!(LayoutId::parse("gothic"), None);
    }
}
