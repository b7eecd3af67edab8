//! Resume record model.
//!
//! The record is the single source of truth for an editing session. It is
//! treated as an immutable snapshot: edit operations in [`crate::edit`]
//! take a record by reference and return a new one, so every consumer
//! (preview, export) always sees a fully-defined, internally-consistent
//! value. Absence of a field is represented by the empty string, never by
//! an `Option`.

use std::fmt;

use uuid::Uuid;

/// Opaque, globally-unique identifier for a repeatable-section entry.
///
/// Generated once at entry creation and stable for the entry's lifetime.
/// Edits and removals address entries by id, never by position, so a
/// future reorder feature could not corrupt in-flight edits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryId(String);

impl EntryId {
    /// Generate a fresh id. UUIDv4, so collisions are negligible at any
    /// realistic session's entry count.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fixed-shape personal details. Empty string suppresses display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalDetails {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationEntry {
    pub id: EntryId,
    pub institution: String,
    pub degree: String,
    pub date: String,
    pub description: String,
}

impl EducationEntry {
    /// New entry with a fresh id and all text fields empty.
    pub fn empty() -> Self {
        Self {
            id: EntryId::new(),
            institution: String::new(),
            degree: String::new(),
            date: String::new(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub company: String,
    pub position: String,
    pub date: String,
    pub description: String,
}

impl ExperienceEntry {
    pub fn empty() -> Self {
        Self {
            id: EntryId::new(),
            company: String::new(),
            position: String::new(),
            date: String::new(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntry {
    pub id: EntryId,
    pub name: String,
}

impl SkillEntry {
    pub fn empty() -> Self {
        Self {
            id: EntryId::new(),
            name: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    pub url: String,
}

impl ProjectEntry {
    pub fn empty() -> Self {
        Self {
            id: EntryId::new(),
            name: String::new(),
            description: String::new(),
            url: String::new(),
        }
    }
}

/// The full structured resume held in memory.
///
/// Vector order is display order. `Default` is the fully-empty record;
/// [`ResumeRecord::example`] seeds a session with placeholder content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeRecord {
    pub personal: PersonalDetails,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<SkillEntry>,
    pub projects: Vec<ProjectEntry>,
}

impl ResumeRecord {
    /// Example content shown at session start: one education entry, two
    /// experience entries, five skills, one project.
    pub fn example() -> Self {
        Self {
            personal: PersonalDetails {
                name: "John Doe".to_string(),
                title: "Software Engineer".to_string(),
                email: "john.doe@example.com".to_string(),
                phone: "(123) 456-7890".to_string(),
                location: "New York, NY".to_string(),
                summary: "Experienced software engineer with a passion for building \
                          user-friendly applications."
                    .to_string(),
            },
            education: vec![EducationEntry {
                id: EntryId::new(),
                institution: "University of Technology".to_string(),
                degree: "Bachelor of Science in Computer Science".to_string(),
                date: "2015 - 2019".to_string(),
                description: "Graduated with honors. Relevant coursework included Data \
                              Structures, Algorithms, and Software Engineering."
                    .to_string(),
            }],
            experience: vec![
                ExperienceEntry {
                    id: EntryId::new(),
                    company: "Tech Solutions Inc.".to_string(),
                    position: "Senior Software Engineer".to_string(),
                    date: "2019 - Present".to_string(),
                    description: "Developed and maintained web applications using React \
                                  and Node.js. Led a team of 5 developers."
                        .to_string(),
                },
                ExperienceEntry {
                    id: EntryId::new(),
                    company: "Digital Innovations".to_string(),
                    position: "Junior Developer".to_string(),
                    date: "2017 - 2019".to_string(),
                    description: "Assisted in the development of mobile applications using \
                                  React Native. Implemented UI components and fixed bugs."
                        .to_string(),
                },
            ],
            skills: ["JavaScript", "React", "Node.js", "TypeScript", "HTML/CSS"]
                .into_iter()
                .map(|name| SkillEntry {
                    id: EntryId::new(),
                    name: name.to_string(),
                })
                .collect(),
            projects: vec![ProjectEntry {
                id: EntryId::new(),
                name: "E-commerce Platform".to_string(),
                description: "Built a full-stack e-commerce platform with React, Node.js, \
                              and MongoDB."
                    .to_string(),
                url: "https://github.com/johndoe/ecommerce".to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_record_shape() {
        let record = ResumeRecord::example();
        assert_eq!(record.personal.name, "John Doe");
        assert_eq!(record.education.len(), 1);
        assert_eq!(record.experience.len(), 2);
        assert_eq!(record.skills.len(), 5);
        assert_eq!(record.projects.len(), 1);
    }

    #[test]
    fn test_example_ids_are_unique() {
        let record = ResumeRecord::example();
        let mut ids: Vec<&EntryId> = Vec::new();
        ids.extend(record.education.iter().map(|e| &e.id));
        ids.extend(record.experience.iter().map(|e| &e.id));
        ids.extend(record.skills.iter().map(|e| &e.id));
        ids.extend(record.projects.iter().map(|e| &e.id));

        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_default_record_is_empty() {
        let record = ResumeRecord::default();
        assert!(record.personal.name.is_empty());
        assert!(record.personal.summary.is_empty());
        assert!(record.education.is_empty());
        assert!(record.experience.is_empty());
        assert!(record.skills.is_empty());
        assert!(record.projects.is_empty());
    }
}
