//! Degrees, publications, certificates, and conference activities.

use leptos::prelude::*;

use crate::components::content_section::{ContentSection, ExternalLink};
use crate::content;

const CARD_CLASS: &str = "bg-white dark:bg-slate-800 rounded-lg shadow-lg";
const SUBHEADING_CLASS: &str = "text-2xl font-semibold text-text-primary-light dark:text-text-primary-dark mb-6";

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <ContentSection copy={content::ACADEMICS}>
            <div class="grid lg:grid-cols-3 gap-8">
                <div class="lg:col-span-2">
                    <h3 class=SUBHEADING_CLASS>"Academic Background"</h3>
                    <div class="space-y-6">
                        {content::DEGREES
                            .iter()
                            .map(|edu| {
                                view! {
                                    <div class={format!("{CARD_CLASS} p-6")}>
                                        <h4 class="text-xl font-semibold text-text-primary-light dark:text-text-primary-dark mb-2">
                                            {edu.degree}
                                        </h4>
                                        <p class="text-primary-light dark:text-primary-dark font-medium mb-2">
                                            {edu.university}
                                        </p>
                                        <p class="text-text-secondary-light dark:text-text-secondary-dark mb-2">
                                            {edu.period}" | GPA: "{edu.gpa}
                                        </p>
                                        <p class="text-text-secondary-light dark:text-text-secondary-dark">
                                            <strong>"Thesis:"</strong>" "{edu.thesis}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <h3 class={format!("{SUBHEADING_CLASS} mt-12")}>"Publications"</h3>
                    <div class="space-y-4">
                        {content::PUBLICATIONS
                            .iter()
                            .map(|publication| {
                                view! {
                                    <div class={format!("{CARD_CLASS} p-4")}>
                                        <h4 class="font-semibold text-text-primary-light dark:text-text-primary-dark mb-2">
                                            {publication.title}
                                        </h4>
                                        <p class="text-text-secondary-light dark:text-text-secondary-dark">
                                            {publication.venue}" ("{publication.year}")"
                                            {publication.doi.map(|href| view! {
                                                <ExternalLink href=href classes="text-primary-light dark:text-primary-dark ml-2 hover:underline">
                                                    <i class="fas fa-external-link-alt"></i>
                                                </ExternalLink>
                                            })}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div>
                    <h3 class=SUBHEADING_CLASS>"Certificates & Awards"</h3>
                    <div class="space-y-4">
                        {content::CERTIFICATES
                            .iter()
                            .map(|cert| {
                                view! {
                                    <div class={format!("{CARD_CLASS} p-4")}>
                                        <div class="flex items-center">
                                            <i class="fas fa-certificate text-accent-light dark:text-accent-dark mr-3"></i>
                                            <span class="text-text-primary-light dark:text-text-primary-dark">{*cert}</span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class={format!("mt-8 {CARD_CLASS} p-6")}>
                        <h4 class="font-semibold text-text-primary-light dark:text-text-primary-dark mb-4">
                            "Conference Activities"
                        </h4>
                        <ul class="space-y-2 text-text-secondary-light dark:text-text-secondary-dark">
                            {content::CONFERENCE_ACTIVITIES
                                .iter()
                                .map(|(icon, text)| {
                                    view! {
                                        <li>
                                            <i class={format!("{icon} text-accent-light dark:text-accent-dark mr-2")}></i>
                                            {*text}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </ContentSection>
    }
}
