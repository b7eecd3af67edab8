//! # smartsume
//!
//! Live resume editing, layout rendering, and PDF export.
//!
//! A single in-memory [`ResumeRecord`] is the source of truth for an
//! editing session. Pure edit operations produce new record snapshots,
//! a pure render step maps a snapshot plus a [`LayoutId`] to a visual
//! [`Document`] tree, and the export pipeline rasterizes the rendered
//! tree and embeds the capture in a downloadable PDF.
//!
//! The library is host-agnostic: it contains no DOM or windowing types.
//! The `wasm-ui` workspace member supplies the form, the live preview,
//! and the canvas-backed [`Rasterizer`].
//!
//! ## Example
//!
//! ```
//! use smartsume::{LayoutId, ResumeRecord, edit, render};
//!
//! let record = ResumeRecord::example();
//! let record = edit::set_personal_field(&record, edit::PersonalField::Name, "Jane Roe");
//!
//! let doc = render(&record, LayoutId::Creative);
//! assert!(doc.contains_text("Jane Roe"));
//! ```

pub mod document;
pub mod edit;
pub mod error;
pub mod export;
pub mod layout;
pub mod model;

pub use document::{Block, ContactItem, ContactKind, Document, Region, RegionRole, initials};
pub use edit::{Edit, EntryField, PersonalField, SectionKind};
pub use error::ExportError;
pub use export::{
    A4_HEIGHT_MM, A4_WIDTH_MM, Bitmap, EXPORT_FILE_NAME, PageFit, Rasterizer, export_pdf,
    fit_to_page_width, page_size_for, write_pdf,
};
pub use layout::{LayoutId, render};
pub use model::{
    EducationEntry, EntryId, ExperienceEntry, PersonalDetails, ProjectEntry, ResumeRecord,
    SkillEntry,
};
