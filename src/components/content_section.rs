//! Shared section chrome: anchored `<section>`, heading, divider, blurb.

use leptos::prelude::*;

use crate::content::{self, SectionCopy};

/// Anchored page section. `raised` picks the white surface instead of the
/// page background, so neighbouring sections alternate.
#[component]
pub fn ContentSection(copy: SectionCopy, #[prop(optional)] raised: bool, children: Children) -> impl IntoView {
    let surface = if raised { "bg-white dark:bg-slate-900" } else { "bg-light-bg dark:bg-dark-bg" };
    view! {
        <section id={copy.id.as_str()} class={format!("py-20 {surface}")}>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold text-text-primary-light dark:text-text-primary-dark mb-4">
                        {copy.heading}
                    </h2>
                    <div class="w-24 h-1 bg-primary-light dark:bg-primary-dark mx-auto"></div>
                    {copy.blurb.map(|blurb| view! {
                        <p class="text-text-secondary-light dark:text-text-secondary-dark max-w-2xl mx-auto mt-6">
                            {blurb}
                        </p>
                    })}
                </div>
                {children()}
            </div>
        </section>
    }
}

/// Anchor that opens off-site targets in a new tab.
#[component]
pub fn ExternalLink(href: &'static str, #[prop(optional)] classes: &'static str, children: Children) -> impl IntoView {
    let new_tab = content::opens_new_tab(href);
    view! {
        <a
            href=href
            class=classes
            target={new_tab.then_some("_blank")}
            rel={new_tab.then_some("noopener noreferrer")}
        >
            {children()}
        </a>
    }
}

/// Row of pill labels.
#[component]
pub fn TagList(tags: &'static [&'static str], pill_class: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tags.iter().map(|tag| view! { <span class=pill_class>{*tag}</span> }).collect_view()}
        </div>
    }
}
