//! Professional experience timeline.

use leptos::prelude::*;

use crate::components::content_section::ContentSection;
use crate::content;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <ContentSection copy={content::HISTORY} raised=true>
            <div class="space-y-8">
                {content::ROLES
                    .iter()
                    .map(|role| {
                        view! {
                            <div class="bg-light-bg dark:bg-slate-800 p-6 rounded-lg shadow-lg">
                                <div class="flex flex-col md:flex-row md:justify-between md:items-start mb-4">
                                    <div>
                                        <h3 class="text-xl font-semibold text-text-primary-light dark:text-text-primary-dark">
                                            {role.role}
                                        </h3>
                                        <h4 class="text-lg text-primary-light dark:text-primary-dark font-medium">
                                            {role.company}
                                        </h4>
                                        <p class="text-text-secondary-light dark:text-text-secondary-dark">
                                            <i class="fas fa-map-marker-alt mr-2"></i>
                                            {role.location}
                                        </p>
                                    </div>
                                    <div class="mt-2 md:mt-0">
                                        <span class="px-3 py-1 bg-accent-light/10 dark:bg-accent-dark/20 text-accent-light dark:text-accent-dark rounded-full text-sm font-medium">
                                            {role.period}
                                        </span>
                                    </div>
                                </div>
                                <ul class="space-y-2">
                                    {role
                                        .achievements
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <li class="flex items-start text-text-secondary-light dark:text-text-secondary-dark">
                                                    <i class="fas fa-check-circle text-accent-light dark:text-accent-dark mr-3 mt-1 flex-shrink-0"></i>
                                                    {*item}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </ContentSection>
    }
}
