//! Fixed top navigation: section links, theme toggle, and mobile menu.
//!
//! The scroll spy subscription is created when the bar mounts and dropped
//! when it unmounts.

use leptos::prelude::*;

use crate::app::ThemeStore;
use crate::content;
use crate::state::disclosure::DisclosureState;
use crate::state::sections::SectionId;
use crate::util::scroll::BrowserScroll;
#[cfg(feature = "csr")]
use crate::{config::SiteConfig, state::sections::SectionTracker, state::sections::watch_sections};

fn desktop_item_class(active: bool) -> &'static str {
    if active {
        "px-3 py-2 rounded-md text-sm font-medium transition-colors text-primary-light dark:text-primary-dark bg-blue-50 dark:bg-blue-900/20"
    } else {
        "px-3 py-2 rounded-md text-sm font-medium transition-colors text-text-secondary-light dark:text-text-secondary-dark hover:text-primary-light dark:hover:text-primary-dark"
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeStore>>();
    let disclosure = RwSignal::new(DisclosureState::default());
    let active = RwSignal::new(SectionId::Intro);

    #[cfg(feature = "csr")]
    {
        let trigger_line = expect_context::<SiteConfig>().trigger_line_px;
        let subscription =
            watch_sections(&BrowserScroll, BrowserScroll, SectionTracker::new(trigger_line), move |id| active.set(id));
        let subscription = StoredValue::new_local(Some(subscription));
        on_cleanup(move || drop(subscription.try_update_value(Option::take)));
    }

    let select = move |id: SectionId| disclosure.update(|d| d.navigate(&BrowserScroll, id));
    let on_toggle_theme = move |_| {
        theme.update(|store| {
            store.toggle();
        });
    };
    let on_toggle_menu = move |_| disclosure.update(DisclosureState::toggle);

    view! {
        <nav class="fixed top-0 w-full bg-white/90 dark:bg-slate-900/90 backdrop-blur-sm z-50 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-4">
                    <div class="text-2xl font-bold text-primary-light dark:text-primary-dark">
                        {content::OWNER_NAME}
                    </div>

                    <div class="hidden md:flex space-x-8">
                        {SectionId::ALL
                            .into_iter()
                            .map(|id| {
                                view! {
                                    <button
                                        class=move || desktop_item_class(active.get() == id)
                                        on:click=move |_| select(id)
                                    >
                                        {id.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex items-center space-x-4">
                        <button
                            class="p-2 rounded-lg bg-gray-100 dark:bg-gray-800 text-gray-600 dark:text-gray-300 hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
                            title="Toggle theme"
                            on:click=on_toggle_theme
                        >
                            <i class=move || theme.with(|store| store.theme().toggle_icon_class())></i>
                        </button>
                        <button
                            class="md:hidden p-2 rounded-lg bg-gray-100 dark:bg-gray-800 text-gray-600 dark:text-gray-300"
                            title="Menu"
                            on:click=on_toggle_menu
                        >
                            <i class=move || disclosure.get().icon_class()></i>
                        </button>
                    </div>
                </div>

                <Show when=move || disclosure.get().is_open()>
                    <div class="md:hidden py-4 border-t border-gray-200 dark:border-gray-700">
                        {SectionId::ALL
                            .into_iter()
                            .map(|id| {
                                view! {
                                    <button
                                        class="block w-full text-left px-3 py-2 text-base font-medium text-text-secondary-light dark:text-text-secondary-dark hover:text-primary-light dark:hover:text-primary-dark"
                                        on:click=move |_| select(id)
                                    >
                                        {id.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        </nav>
    }
}
