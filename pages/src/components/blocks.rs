//! Content block rendering

use leptos::prelude::*;

use super::IconGlyph;
use crate::types::{ContentBlock, Highlight};

/// All blocks of a category, in order.
#[component]
pub fn ContentBlocks(blocks: Vec<ContentBlock>) -> impl IntoView {
    view! {
        <div class="content-blocks">
            {blocks.into_iter().map(|block| view! { <ContentBlockView block=block /> }).collect::<Vec<_>>()}
        </div>
    }
}

/// A single content block.
#[component]
pub fn ContentBlockView(block: ContentBlock) -> impl IntoView {
    match block {
        ContentBlock::Heading { text, icon } => view! {
            <div class="block-heading">
                {icon.map(|kind| view! { <IconGlyph kind=kind class="heading-icon" /> })}
                <h3>{text}</h3>
            </div>
        }
        .into_any(),
        ContentBlock::Paragraph { text } => view! { <p class="block-paragraph">{text}</p> }.into_any(),
        ContentBlock::BulletList { items } => view! {
            <ul class="block-list">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect::<Vec<_>>()}
            </ul>
        }
        .into_any(),
        ContentBlock::Highlights { items } => view! { <HighlightGrid items=items /> }.into_any(),
        ContentBlock::CallToAction { label, trigger, target } => {
            let button = view! {
                <button class="cta-button" type="button" data-trigger=trigger.to_string()>
                    {label}
                </button>
            };
            match target {
                Some(target) => view! {
                    <a class="cta-link" href=target.to_string()>{button}</a>
                }
                .into_any(),
                None => button.into_any(),
            }
        }
    }
}

#[component]
fn HighlightGrid(items: Vec<Highlight>) -> impl IntoView {
    view! {
        <div class="highlight-grid">
            {items.into_iter().map(|item| view! {
                <div class="highlight">
                    {item.icon.map(|kind| view! { <IconGlyph kind=kind class="highlight-icon" /> })}
                    <div>
                        <h4>{item.title}</h4>
                        <p>{item.text}</p>
                    </div>
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}
