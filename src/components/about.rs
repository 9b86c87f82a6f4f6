//! About section with the full-CV download.

use leptos::prelude::*;

use crate::components::content_section::ContentSection;
use crate::config::SiteConfig;
use crate::content;
use crate::util::browser::request_asset;

#[component]
pub fn About() -> impl IntoView {
    let cv = expect_context::<SiteConfig>().cv_asset;

    view! {
        <ContentSection copy={content::ABOUT}>
            <div class="grid md:grid-cols-2 gap-12 items-center">
                <div>
                    <h3 class="text-2xl font-semibold text-text-primary-light dark:text-text-primary-dark mb-6">
                        {content::ABOUT_SUBHEADING}
                    </h3>
                    {content::ABOUT_PARAGRAPHS
                        .iter()
                        .map(|para| {
                            view! {
                                <p class="text-text-secondary-light dark:text-text-secondary-dark mb-6 leading-relaxed">
                                    {*para}
                                </p>
                            }
                        })
                        .collect_view()}
                    <button
                        class="px-6 py-3 bg-primary-light dark:bg-primary-dark text-white rounded-lg hover:bg-blue-700 dark:hover:bg-blue-400 transition-colors"
                        on:click=move |_| request_asset(&cv)
                    >
                        <i class="fas fa-file-pdf mr-2"></i>
                        "Download Full CV"
                    </button>
                </div>
            </div>
        </ContentSection>
    }
}
