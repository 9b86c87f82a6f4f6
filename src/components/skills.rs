//! Skill categories.

use leptos::prelude::*;

use crate::components::content_section::{ContentSection, TagList};
use crate::content;

const SKILL_CLASS: &str = "px-3 py-1 bg-primary-light/10 dark:bg-primary-dark/20 text-primary-light dark:text-primary-dark rounded-full text-sm font-medium";

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <ContentSection copy={content::SKILLS} raised=true>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                {content::SKILL_CATEGORIES
                    .iter()
                    .map(|category| {
                        view! {
                            <div class="skill-card bg-light-bg dark:bg-slate-800 p-6 rounded-lg shadow-lg">
                                <div class="flex items-center mb-4">
                                    <i class={format!("{} text-2xl text-primary-light dark:text-primary-dark mr-3", category.icon)}></i>
                                    <h3 class="text-xl font-semibold text-text-primary-light dark:text-text-primary-dark">
                                        {category.title}
                                    </h3>
                                </div>
                                <TagList tags={category.skills} pill_class=SKILL_CLASS/>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </ContentSection>
    }
}
