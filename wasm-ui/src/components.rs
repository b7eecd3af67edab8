//! Form components: bindable fields and per-section entry lists.
//!
//! Every control is bound to one record field and emits an [`Edit`]
//! intent; the owning app component applies the intent and re-renders.

use yew::prelude::*;

use smartsume::{
    Edit, EducationEntry, EntryField, EntryId, ExperienceEntry, PersonalDetails, PersonalField,
    ProjectEntry, SectionKind, SkillEntry,
};

/// Single-line bindable field: current value in, change events out.
#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: String,
    pub value: String,
    #[prop_or_default]
    pub placeholder: String,
    pub on_change: Callback<String>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    html! {
        <div class="field">
            <label class="field-label">{ &props.label }</label>
            <input
                class="field-input"
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                oninput={on_input}
            />
        </div>
    }
}

/// Multi-line bindable field.
#[derive(Properties, PartialEq)]
pub struct TextAreaFieldProps {
    pub label: String,
    pub value: String,
    #[prop_or_default]
    pub placeholder: String,
    #[prop_or(3)]
    pub rows: u32,
    pub on_change: Callback<String>,
}

#[function_component(TextAreaField)]
pub fn text_area_field(props: &TextAreaFieldProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    html! {
        <div class="field">
            <label class="field-label">{ &props.label }</label>
            <textarea
                class="field-input"
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                rows={props.rows.to_string()}
                oninput={on_input}
            />
        </div>
    }
}

fn personal_cb(on_edit: &Callback<Edit>, field: PersonalField) -> Callback<String> {
    let on_edit = on_edit.clone();
    Callback::from(move |value: String| on_edit.emit(Edit::Personal { field, value }))
}

fn entry_cb(
    on_edit: &Callback<Edit>,
    section: SectionKind,
    id: &EntryId,
    field: EntryField,
) -> Callback<String> {
    let on_edit = on_edit.clone();
    let id = id.clone();
    Callback::from(move |value: String| {
        on_edit.emit(Edit::Entry {
            section,
            id: id.clone(),
            field,
            value,
        })
    })
}

fn remove_cb(on_edit: &Callback<Edit>, section: SectionKind, id: &EntryId) -> Callback<MouseEvent> {
    let on_edit = on_edit.clone();
    let id = id.clone();
    Callback::from(move |_| {
        on_edit.emit(Edit::Remove {
            section,
            id: id.clone(),
        })
    })
}

fn add_button(on_edit: &Callback<Edit>, section: SectionKind) -> Html {
    let on_add = {
        let on_edit = on_edit.clone();
        Callback::from(move |_| on_edit.emit(Edit::Add { section }))
    };
    html! {
        <button class="add-button" onclick={on_add}>
            { format!("+ Add {}", section.label()) }
        </button>
    }
}

/// Personal details section.
#[derive(Properties, PartialEq)]
pub struct PersonalFormProps {
    pub personal: PersonalDetails,
    pub on_edit: Callback<Edit>,
}

#[function_component(PersonalForm)]
pub fn personal_form(props: &PersonalFormProps) -> Html {
    let p = &props.personal;
    let on_edit = &props.on_edit;

    html! {
        <details class="form-section" open=true>
            <summary>{ "Personal Details" }</summary>
            <div class="section-body">
                <TextField
                    label="Name"
                    value={p.name.clone()}
                    placeholder="John Doe"
                    on_change={personal_cb(on_edit, PersonalField::Name)}
                />
                <TextField
                    label="Professional Title"
                    value={p.title.clone()}
                    placeholder="Software Engineer"
                    on_change={personal_cb(on_edit, PersonalField::Title)}
                />
                <TextField
                    label="Email"
                    value={p.email.clone()}
                    placeholder="john.doe@example.com"
                    on_change={personal_cb(on_edit, PersonalField::Email)}
                />
                <TextField
                    label="Phone"
                    value={p.phone.clone()}
                    placeholder="(123) 456-7890"
                    on_change={personal_cb(on_edit, PersonalField::Phone)}
                />
                <TextField
                    label="Location"
                    value={p.location.clone()}
                    placeholder="New York, NY"
                    on_change={personal_cb(on_edit, PersonalField::Location)}
                />
                <TextAreaField
                    label="Professional Summary"
                    value={p.summary.clone()}
                    placeholder="Brief overview of your professional background and goals"
                    rows={4}
                    on_change={personal_cb(on_edit, PersonalField::Summary)}
                />
            </div>
        </details>
    }
}

/// Education entry list.
#[derive(Properties, PartialEq)]
pub struct EducationFormProps {
    pub entries: Vec<EducationEntry>,
    pub on_edit: Callback<Edit>,
}

#[function_component(EducationForm)]
pub fn education_form(props: &EducationFormProps) -> Html {
    let on_edit = &props.on_edit;
    let section = SectionKind::Education;

    html! {
        <details class="form-section">
            <summary>{ section.label() }</summary>
            <div class="section-body">
                { for props.entries.iter().map(|entry| html! {
                    <div class="entry-card" key={entry.id.as_str().to_string()}>
                        <button
                            class="remove-button"
                            title="Remove entry"
                            onclick={remove_cb(on_edit, section, &entry.id)}
                        >{ "✕" }</button>
                        <TextField
                            label="Institution"
                            value={entry.institution.clone()}
                            placeholder="University name"
                            on_change={entry_cb(on_edit, section, &entry.id, EntryField::Institution)}
                        />
                        <TextField
                            label="Degree"
                            value={entry.degree.clone()}
                            placeholder="Bachelor of Science in Computer Science"
                            on_change={entry_cb(on_edit, section, &entry.id, EntryField::Degree)}
                        />
                        <TextField
                            label="Date"
                            value={entry.date.clone()}
                            placeholder="2015 - 2019"
                            on_change={entry_cb(on_edit, section, &entry.id, EntryField::Date)}
                        />
                        <TextAreaField
                            label="Description"
                            value={entry.description.clone()}
                            placeholder="Relevant coursework, achievements, etc."
                            on_change={entry_cb(on_edit, section, &entry.id, EntryField::Description)}
                        />
                    </div>
                })}
                { add_button(on_edit, section) }
            </div>
        </details>
    }
}

/// Work experience entry list.
#[derive(Properties, PartialEq)]
pub struct ExperienceFormProps {
    pub entries: Vec<ExperienceEntry>,
    pub on_edit: Callback<Edit>,
}

#[function_component(ExperienceForm)]
pub fn experience_form(props: &ExperienceFormProps) -> Html {
    let on_edit = &props.on_edit;
    let section = SectionKind::Experience;

    html! {
        <details class="form-section">
            <summary>{ section.label() }</summary>
            <div class="section-body">
                { for props.entries.iter().map(|entry| html! {
                    <div class="entry-card" key={entry.id.as_str().to_string()}>
                        <button
                            class="remove-button"
                            title="Remove entry"
                            onclick={remove_cb(on_edit, section, &entry.id)}
                        >{ "✕" }</button>
                        <TextField
                            label="Company"
                            value={entry.company.clone()}
                            placeholder="Company name"
                            on_change={entry_cb(on_edit, section, &entry.id, EntryField::Company)}
                        />
                        <TextField
                            label="Position"
                            value={entry.position.clone()}
                            placeholder="Job title"
                            on_change={entry_cb(on_edit, section, &entry.id, EntryField::Position)}
                        />
                        <TextField
                            label="Date"
                            value={entry.date.clone()}
                            placeholder="2019 - Present"
                            on_change={entry_cb(on_edit, section, &entry.id, EntryField::Date)}
                        />
                        <TextAreaField
                            label="Description"
                            value={entry.description.clone()}
                            placeholder="Responsibilities, achievements, etc."
                            on_change={entry_cb(on_edit, section, &entry.id, EntryField::Description)}
                        />
                    </div>
                })}
                { add_button(on_edit, section) }
            </div>
        </details>
    }
}

/// Skill list: one name field per skill.
#[derive(Properties, PartialEq)]
pub struct SkillsFormProps {
    pub entries: Vec<SkillEntry>,
    pub on_edit: Callback<Edit>,
}

#[function_component(SkillsForm)]
pub fn skills_form(props: &SkillsFormProps) -> Html {
    let on_edit = &props.on_edit;
    let section = SectionKind::Skills;

    html! {
        <details class="form-section">
            <summary>{ section.label() }</summary>
            <div class="section-body">
                <div class="skills-grid">
                    { for props.entries.iter().map(|entry| html! {
                        <div class="skill-row" key={entry.id.as_str().to_string()}>
                            <TextField
                                label=""
                                value={entry.name.clone()}
                                placeholder="Skill name"
                                on_change={entry_cb(on_edit, section, &entry.id, EntryField::Name)}
                            />
                            <button
                                class="remove-button"
                                title="Remove skill"
                                onclick={remove_cb(on_edit, section, &entry.id)}
                            >{ "✕" }</button>
                        </div>
                    })}
                </div>
                { add_button(on_edit, section) }
            </div>
        </details>
    }
}

/// Project entry list.
#[derive(Properties, PartialEq)]
pub struct ProjectsFormProps {
    pub entries: Vec<ProjectEntry>,
    pub on_edit: Callback<Edit>,
}

#[function_component(ProjectsForm)]
pub fn projects_form(props: &ProjectsFormProps) -> Html {
    let on_edit = &props.on_edit;
    let section = SectionKind::Projects;

    html! {
        <details class="form-section">
            <summary>{ section.label() }</summary>
            <div class="section-body">
                { for props.entries.iter().map(|entry| html! {
                    <div class="entry-card" key={entry.id.as_str().to_string()}>
                        <button
                            class="remove-button"
                            title="Remove entry"
                            onclick={remove_cb(on_edit, section, &entry.id)}
                        >{ "✕" }</button>
                        <TextField
                            label="Project Name"
                            value={entry.name.clone()}
                            placeholder="Project name"
                            on_change={entry_cb(on_edit, section, &entry.id, EntryField::Name)}
                        />
                        <TextAreaField
                            label="Description"
                            value={entry.description.clone()}
                            placeholder="Brief description of the project"
                            on_change={entry_cb(on_edit, section, &entry.id, EntryField::Description)}
                        />
                        <TextField
                            label="URL (optional)"
                            value={entry.url.clone()}
                            placeholder="https://github.com/username/project"
                            on_change={entry_cb(on_edit, section, &entry.id, EntryField::Url)}
                        />
                    </div>
                })}
                { add_button(on_edit, section) }
            </div>
        </details>
    }
}
