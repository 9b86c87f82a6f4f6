//! Featured project cards.

use leptos::prelude::*;

use crate::components::content_section::{ContentSection, ExternalLink, TagList};
use crate::content::{self, Project};

const ICON_LINK_CLASS: &str =
    "text-text-secondary-light dark:text-text-secondary-dark hover:text-primary-light dark:hover:text-primary-dark transition-colors";
const TECH_CLASS: &str = "px-2 py-1 bg-accent-light/10 dark:bg-accent-dark/20 text-accent-light dark:text-accent-dark rounded text-sm";
const TAG_CLASS: &str = "px-3 py-1 bg-primary-light/10 dark:bg-primary-dark/20 text-primary-light dark:text-primary-dark rounded-full text-sm font-medium";

fn project_card(project: &'static Project) -> impl IntoView {
    view! {
        <div class="project-card bg-white dark:bg-slate-800 rounded-lg shadow-lg overflow-hidden">
            <div class="p-6">
                <div class="flex justify-between items-start mb-4">
                    <h3 class="text-xl font-semibold text-text-primary-light dark:text-text-primary-dark">
                        {project.title}
                    </h3>
                    <div class="flex space-x-2">
                        {project.github.map(|href| view! {
                            <ExternalLink href=href classes=ICON_LINK_CLASS>
                                <i class="fab fa-github text-xl"></i>
                            </ExternalLink>
                        })}
                        {project.demo.map(|href| view! {
                            <ExternalLink href=href classes=ICON_LINK_CLASS>
                                <i class="fas fa-external-link-alt text-xl"></i>
                            </ExternalLink>
                        })}
                    </div>
                </div>

                <p class="text-text-secondary-light dark:text-text-secondary-dark mb-4">{project.description}</p>

                <div class="mb-4">
                    <h4 class="font-semibold text-text-primary-light dark:text-text-primary-dark mb-2">"Key Features:"</h4>
                    <ul class="list-disc list-inside text-text-secondary-light dark:text-text-secondary-dark">
                        {project.features.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
                    </ul>
                </div>

                <div class="mb-4">
                    <TagList tags={project.tech} pill_class=TECH_CLASS/>
                </div>
                <TagList tags={project.tags} pill_class=TAG_CLASS/>
            </div>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <ContentSection copy={content::WORK}>
            <div class="grid md:grid-cols-2 gap-8">
                {content::PROJECTS.iter().map(project_card).collect_view()}
            </div>
        </ContentSection>
    }
}
