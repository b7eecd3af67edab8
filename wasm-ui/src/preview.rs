//! Live preview: walks the rendered document tree into markup.
//!
//! The tree is re-derived from the current record and layout on every
//! state change; this component is pure view.

use yew::prelude::*;

use smartsume::{Block, ContactKind, LayoutId, Region, RegionRole, ResumeRecord, render};

#[derive(Properties, PartialEq)]
pub struct PreviewPanelProps {
    pub record: ResumeRecord,
    pub layout: LayoutId,
}

#[function_component(PreviewPanel)]
pub fn preview_panel(props: &PreviewPanelProps) -> Html {
    let doc = render(&props.record, props.layout);

    html! {
        <div class={classes!("resume", format!("layout-{}", props.layout.as_str()))}>
            { for doc.regions.iter().map(view_region) }
        </div>
    }
}

fn view_region(region: &Region) -> Html {
    let role_class = match region.role {
        RegionRole::Banner => "region-banner",
        RegionRole::Sidebar => "region-sidebar",
        RegionRole::Main => "region-main",
        RegionRole::Aside => "region-aside",
    };

    html! {
        <div class={classes!("region", role_class)}>
            { for region.blocks.iter().enumerate().map(|(i, b)| view_block(i, b)) }
        </div>
    }
}

fn view_block(index: usize, block: &Block) -> Html {
    match block {
        Block::Name(name) => html! { <h1 key={index} class="doc-name">{ name }</h1> },
        Block::Title(title) => html! { <p key={index} class="doc-title">{ title }</p> },
        Block::Monogram(initials) => html! {
            <div key={index} class="doc-monogram"><span>{ initials }</span></div>
        },
        Block::Contact(items) => html! {
            <div key={index} class="doc-contact">
                { for items.iter().map(|item| {
                    let glyph = match item.kind {
                        ContactKind::Email => "✉",
                        ContactKind::Phone => "✆",
                        ContactKind::Location => "⌖",
                    };
                    html! {
                        <span class="contact-item">
                            <span class="contact-glyph">{ glyph }</span>
                            { &item.value }
                        </span>
                    }
                })}
            </div>
        },
        Block::Heading(heading) => html! { <h2 key={index} class="doc-heading">{ heading }</h2> },
        Block::Paragraph(text) => html! { <p key={index} class="doc-paragraph">{ text }</p> },
        Block::Entry {
            heading,
            subheading,
            date,
            body,
            link,
        } => html! {
            <div key={index} class="doc-entry">
                <div class="doc-entry-head">
                    <h3>{ heading }</h3>
                    if !date.is_empty() {
                        <span class="doc-entry-date">{ date }</span>
                    }
                </div>
                if !subheading.is_empty() {
                    <p class="doc-entry-sub">{ subheading }</p>
                }
                if !body.is_empty() {
                    <p class="doc-entry-body">{ body }</p>
                }
                if let Some(url) = link {
                    <a class="doc-entry-link" href={url.clone()} target="_blank" rel="noopener noreferrer">
                        { url }
                    </a>
                }
            </div>
        },
        Block::Tags(tags) => html! {
            <div key={index} class="doc-tags">
                { for tags.iter().map(|tag| html! { <span class="doc-tag">{ tag }</span> }) }
            </div>
        },
        Block::Items(items) => html! {
            <ul key={index} class="doc-items">
                { for items.iter().map(|item| html! { <li>{ item }</li> }) }
            </ul>
        },
    }
}
