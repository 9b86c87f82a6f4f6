//! Page footer with quick links and back-to-top.

use leptos::prelude::*;

use crate::components::content_section::ExternalLink;
use crate::content;
use crate::util::scroll::{BrowserScroll, Navigator};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-900 dark:bg-slate-950 text-white py-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid md:grid-cols-3 gap-8">
                    <div>
                        <h3 class="text-2xl font-bold mb-4">{content::OWNER_NAME}</h3>
                        <p class="text-gray-300 mb-4">{content::FOOTER_BLURB}</p>
                        <div class="flex space-x-4">
                            {content::SOCIAL_LINKS
                                .iter()
                                .map(|&(icon, href)| {
                                    view! {
                                        <ExternalLink href=href classes="text-gray-300 hover:text-white transition-colors">
                                            <i class={format!("{icon} text-xl")}></i>
                                        </ExternalLink>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h4 class="text-lg font-semibold mb-4">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {content::FOOTER_LINKS
                                .iter()
                                .map(|&id| {
                                    view! {
                                        <li>
                                            <button
                                                class="text-gray-300 hover:text-white transition-colors"
                                                on:click=move |_| BrowserScroll.scroll_to(id)
                                            >
                                                {id.label()}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-lg font-semibold mb-4">"Specializations"</h4>
                        <ul class="space-y-2 text-gray-300">
                            {content::SPECIALIZATIONS
                                .iter()
                                .map(|item| view! { <li>"• "{*item}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="border-t border-gray-700 mt-8 pt-8 flex flex-col md:flex-row justify-between items-center">
                    <p class="text-gray-300 text-sm">{content::COPYRIGHT}</p>
                    <button
                        class="mt-4 md:mt-0 px-4 py-2 bg-primary-light hover:bg-blue-700 rounded-lg transition-colors"
                        on:click=move |_| BrowserScroll.scroll_to_top()
                    >
                        <i class="fas fa-arrow-up mr-2"></i>
                        "Back to Top"
                    </button>
                </div>
            </div>
        </footer>
    }
}
