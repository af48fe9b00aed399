//! Cards
//!
//! Featured connection and success story cards.

use leptos::*;
use nefra_connect::feed::{FeaturedConnection, FeaturedStory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardSize {
    Large,
    #[default]
    Small,
}

/// Hero placement for the two flanking cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[component]
pub fn ConnectionCard(
    data: FeaturedConnection,
    #[prop(optional)]
    size: CardSize,
    #[prop(optional)]
    side: Option<Side>,
) -> impl IntoView {
    let size_class = match size {
        CardSize::Large => "large",
        CardSize::Small => "small",
    };
    let side_class = match side {
        Some(Side::Left) => " side-left",
        Some(Side::Right) => " side-right",
        None => "",
    };

    view! {
        <article class=format!("connection-card {}{} bg-white rounded-xl shadow overflow-hidden", size_class, side_class)>
            <div class="connection-image relative">
                <CardImage url=data.image_url.clone() alt=data.alt.clone() />
                {data.verified.then(|| view! {
                    <div class="verified-badge absolute top-2 right-2 bg-white/90 rounded-full px-2 py-1 text-xs font-medium">
                        "✓ Verified"
                    </div>
                })}
            </div>
            <div class="connection-body p-4">
                <h3 class="connection-name font-semibold">{data.name}</h3>
                <p class="connection-role text-sm text-gray-600">{data.role}</p>
                <div class="connection-meta text-xs text-gray-500 mt-2 space-x-1">
                    <span>{data.company}</span>
                    <span class="meta-sep">"•"</span>
                    <span>{data.industry}</span>
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn SuccessStoryCard(data: FeaturedStory) -> impl IntoView {
    view! {
        <article class="story-card bg-white rounded-xl shadow overflow-hidden">
            <div class="story-image">
                <CardImage url=data.image_url.clone() alt=data.title.clone() />
            </div>
            <div class="story-body p-4">
                <div class="story-metric text-sm font-semibold text-emerald-600">{data.metric}</div>
                <h4 class="story-title font-semibold mt-1">{data.title}</h4>
                <p class="story-outcome text-sm text-gray-600 mt-2">{data.outcome}</p>
                <div class="story-author text-xs text-gray-500 mt-3">
                    {format!("{} • {}", data.author, data.company)}
                </div>
            </div>
        </article>
    }
}

/// Lazy image, or a neutral block when the record has no URL
#[component]
fn CardImage(url: Option<String>, alt: String) -> impl IntoView {
    match url {
        Some(src) => view! {
            <img src=src alt=alt loading="lazy" class="w-full h-48 object-cover" />
        }.into_view(),
        None => view! {
            <div class="w-full h-48 bg-gray-200" aria-label=alt />
        }.into_view(),
    }
}
