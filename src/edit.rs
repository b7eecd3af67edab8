//! Edit pipeline: pure, field-scoped update functions.
//!
//! Every operation takes the current record by reference and returns a new
//! record; the caller replaces its held snapshot with the result and
//! re-renders. All operations are total: inputs are well-typed strings and
//! an id or field that matches nothing is a silent no-op, not an error.
//!
//! The [`Edit`] intent enum is the single callback payload the UI emits;
//! [`apply`] dispatches it to the individual operations.

use crate::model::{
    EducationEntry, EntryId, ExperienceEntry, ProjectEntry, ResumeRecord, SkillEntry,
};

/// One field of the fixed-shape personal details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    Name,
    Title,
    Email,
    Phone,
    Location,
    Summary,
}

/// One of the four repeatable sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Education,
    Experience,
    Skills,
    Projects,
}

impl SectionKind {
    /// Display label used by form headings.
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Education => "Education",
            SectionKind::Experience => "Work Experience",
            SectionKind::Skills => "Skills",
            SectionKind::Projects => "Projects",
        }
    }
}

/// One text field of a repeatable-section entry.
///
/// The enum spans all entry kinds; a field that does not apply to the
/// addressed section (e.g. `Company` on an education entry) is ignored,
/// consistent with the unmatched-id rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Institution,
    Degree,
    Company,
    Position,
    Name,
    Date,
    Description,
    Url,
}

/// A single editing intent against the current record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Personal {
        field: PersonalField,
        value: String,
    },
    Entry {
        section: SectionKind,
        id: EntryId,
        field: EntryField,
        value: String,
    },
    Add {
        section: SectionKind,
    },
    Remove {
        section: SectionKind,
        id: EntryId,
    },
}

/// Apply one edit intent, producing the next record snapshot.
pub fn apply(record: &ResumeRecord, edit: &Edit) -> ResumeRecord {
    match edit {
        Edit::Personal { field, value } => set_personal_field(record, *field, value),
        Edit::Entry {
            section,
            id,
            field,
            value,
        } => set_entry_field(record, *section, id, *field, value),
        Edit::Add { section } => add_entry(record, *section),
        Edit::Remove { section, id } => remove_entry(record, *section, id),
    }
}

/// Replace exactly one personal field; everything else is unchanged.
pub fn set_personal_field(
    record: &ResumeRecord,
    field: PersonalField,
    value: &str,
) -> ResumeRecord {
    let mut next = record.clone();
    let slot = match field {
        PersonalField::Name => &mut next.personal.name,
        PersonalField::Title => &mut next.personal.title,
        PersonalField::Email => &mut next.personal.email,
        PersonalField::Phone => &mut next.personal.phone,
        PersonalField::Location => &mut next.personal.location,
        PersonalField::Summary => &mut next.personal.summary,
    };
    *slot = value.to_string();
    next
}

/// Replace one field of the entry with the given id in the named section.
///
/// Entries whose id does not match are left identical; an id present in no
/// entry returns a record deep-equal to the input.
pub fn set_entry_field(
    record: &ResumeRecord,
    section: SectionKind,
    id: &EntryId,
    field: EntryField,
    value: &str,
) -> ResumeRecord {
    let mut next = record.clone();
    match section {
        SectionKind::Education => {
            if let Some(entry) = next.education.iter_mut().find(|e| &e.id == id) {
                match field {
                    EntryField::Institution => entry.institution = value.to_string(),
                    EntryField::Degree => entry.degree = value.to_string(),
                    EntryField::Date => entry.date = value.to_string(),
                    EntryField::Description => entry.description = value.to_string(),
                    _ => {}
                }
            }
        }
        SectionKind::Experience => {
            if let Some(entry) = next.experience.iter_mut().find(|e| &e.id == id) {
                match field {
                    EntryField::Company => entry.company = value.to_string(),
                    EntryField::Position => entry.position = value.to_string(),
                    EntryField::Date => entry.date = value.to_string(),
                    EntryField::Description => entry.description = value.to_string(),
                    _ => {}
                }
            }
        }
        SectionKind::Skills => {
            if let Some(entry) = next.skills.iter_mut().find(|e| &e.id == id) {
                if field == EntryField::Name {
                    entry.name = value.to_string();
                }
            }
        }
        SectionKind::Projects => {
            if let Some(entry) = next.projects.iter_mut().find(|e| &e.id == id) {
                match field {
                    EntryField::Name => entry.name = value.to_string(),
                    EntryField::Description => entry.description = value.to_string(),
                    EntryField::Url => entry.url = value.to_string(),
                    _ => {}
                }
            }
        }
    }
    next
}

/// Append a new entry with a fresh unique id and all text fields empty.
pub fn add_entry(record: &ResumeRecord, section: SectionKind) -> ResumeRecord {
    let mut next = record.clone();
    match section {
        SectionKind::Education => next.education.push(EducationEntry::empty()),
        SectionKind::Experience => next.experience.push(ExperienceEntry::empty()),
        SectionKind::Skills => next.skills.push(SkillEntry::empty()),
        SectionKind::Projects => next.projects.push(ProjectEntry::empty()),
    }
    next
}

/// Remove the first entry whose id matches; unmatched id is a no-op.
pub fn remove_entry(record: &ResumeRecord, section: SectionKind, id: &EntryId) -> ResumeRecord {
    let mut next = record.clone();
    match section {
        SectionKind::Education => {
            if let Some(pos) = next.education.iter().position(|e| &e.id == id) {
                next.education.remove(pos);
            }
        }
        SectionKind::Experience => {
            if let Some(pos) = next.experience.iter().position(|e| &e.id == id) {
                next.experience.remove(pos);
            }
        }
        SectionKind::Skills => {
            if let Some(pos) = next.skills.iter().position(|e| &e.id == id) {
                next.skills.remove(pos);
            }
        }
        SectionKind::Projects => {
            if let Some(pos) = next.projects.iter().position(|e| &e.id == id) {
                next.projects.remove(pos);
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_personal_field_roundtrip() {
        let record = ResumeRecord::example();
        let next = set_personal_field(&record, PersonalField::Email, "jane@example.com");

        assert_eq!(next.personal.email, "jane@example.com");

        // Everything except the edited field is structurally unchanged.
        assert_eq!(next.personal.name, record.personal.name);
        assert_eq!(next.personal.title, record.personal.title);
        assert_eq!(next.personal.phone, record.personal.phone);
        assert_eq!(next.personal.location, record.personal.location);
        assert_eq!(next.personal.summary, record.personal.summary);
        assert_eq!(next.education, record.education);
        assert_eq!(next.experience, record.experience);
        assert_eq!(next.skills, record.skills);
        assert_eq!(next.projects, record.projects);
    }

    #[test]
    fn test_add_entry_appends_empty_with_fresh_id() {
        let record = ResumeRecord::example();
        let next = add_entry(&record, SectionKind::Experience);

        assert_eq!(next.experience.len(), record.experience.len() + 1);

        let added = next.experience.last().unwrap();
        assert!(added.company.is_empty());
        assert!(added.position.is_empty());
        assert!(added.date.is_empty());
        assert!(added.description.is_empty());
        assert!(record.experience.iter().all(|e| e.id != added.id));
    }

    #[test]
    fn test_add_entry_all_sections() {
        let record = ResumeRecord::default();
        let next = add_entry(&record, SectionKind::Education);
        let next = add_entry(&next, SectionKind::Skills);
        let next = add_entry(&next, SectionKind::Projects);

        assert_eq!(next.education.len(), 1);
        assert_eq!(next.skills.len(), 1);
        assert_eq!(next.projects.len(), 1);
        assert!(next.skills[0].name.is_empty());
    }

    #[test]
    fn test_remove_entry_is_idempotent() {
        let record = ResumeRecord::example();
        let id = record.skills[2].id.clone();

        let next = remove_entry(&record, SectionKind::Skills, &id);
        assert_eq!(next.skills.len(), record.skills.len() - 1);
        assert!(next.skills.iter().all(|s| s.id != id));

        // Second removal with the same id is a no-op.
        let again = remove_entry(&next, SectionKind::Skills, &id);
        assert_eq!(again, next);
    }

    #[test]
    fn test_set_entry_field_unknown_id_is_noop() {
        let record = ResumeRecord::example();
        let ghost = EntryId::new();
        let next = set_entry_field(
            &record,
            SectionKind::Education,
            &ghost,
            EntryField::Degree,
            "PhD",
        );
        assert_eq!(next, record);
    }

    #[test]
    fn test_set_entry_field_patches_only_target() {
        let record = ResumeRecord::example();
        let id = record.experience[1].id.clone();
        let next = set_entry_field(
            &record,
            SectionKind::Experience,
            &id,
            EntryField::Company,
            "Acme Corp",
        );

        assert_eq!(next.experience[1].company, "Acme Corp");
        assert_eq!(next.experience[1].position, record.experience[1].position);
        assert_eq!(next.experience[0], record.experience[0]);
    }

    #[test]
    fn test_set_entry_field_inapplicable_field_is_noop() {
        let record = ResumeRecord::example();
        let id = record.education[0].id.clone();
        // Company does not exist on education entries.
        let next = set_entry_field(
            &record,
            SectionKind::Education,
            &id,
            EntryField::Company,
            "Acme Corp",
        );
        assert_eq!(next, record);
    }

    #[test]
    fn test_apply_dispatch() {
        let record = ResumeRecord::example();
        let next = apply(
            &record,
            &Edit::Personal {
                field: PersonalField::Name,
                value: "Jane Roe".to_string(),
            },
        );
        assert_eq!(next.personal.name, "Jane Roe");

        let next = apply(
            &next,
            &Edit::Add {
                section: SectionKind::Skills,
            },
        );
        assert_eq!(next.skills.len(), 6);

        let id = next.skills[5].id.clone();
        let next = apply(
            &next,
            &Edit::Entry {
                section: SectionKind::Skills,
                id: id.clone(),
                field: EntryField::Name,
                value: "Rust".to_string(),
            },
        );
        assert_eq!(next.skills[5].name, "Rust");

        let next = apply(
            &next,
            &Edit::Remove {
                section: SectionKind::Skills,
                id,
            },
        );
        assert_eq!(next.skills.len(), 5);
    }
}
