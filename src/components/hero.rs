//! Landing section with the rotating headline and primary actions.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::content;
use crate::state::sections::SectionId;
use crate::util::browser::request_asset;
use crate::util::scroll::{BrowserScroll, Navigator};
#[cfg(feature = "csr")]
use crate::{
    state::headline::{HeadlineAnimator, animate},
    util::schedule::{BrowserSleep, TaskSlot, spawn_local},
};

/// Hero section. `titles` overrides the configured headline titles; changing
/// it restarts the animation from the first title.
#[component]
pub fn Hero(#[prop(optional, into)] titles: Option<Signal<Vec<String>>>) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let titles = titles.unwrap_or_else(|| Signal::stored(config.headline_titles.clone()));
    let display = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    {
        let reveal = config.reveal_interval();
        let hold = config.hold_interval();
        let running = StoredValue::new(TaskSlot::default());
        Effect::new(move || {
            let titles = titles.get();
            running.update_value(|slot| {
                slot.replace(|| match HeadlineAnimator::new(titles, reveal, hold) {
                    Ok(animator) => Some(spawn_local(animate(animator, BrowserSleep, move |text| {
                        display.set(text.to_owned());
                    }))),
                    Err(e) => {
                        log::warn!("{e}");
                        display.set(String::new());
                        None
                    }
                });
            });
        });
        on_cleanup(move || {
            if running.try_update_value(TaskSlot::clear).is_none() {
                log::trace!("headline chain already released");
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        display.set(titles.with_untracked(|list| list.first().cloned().unwrap_or_default()));
    }

    let resume = config.resume_asset.clone();

    view! {
        <section id={SectionId::Intro.as_str()} class="min-h-screen flex items-center justify-center gradient-bg pt-20 md:pt-0">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <div class="fade-in">
                    <div class="mb-8">
                        <img
                            src={content::PORTRAIT_SRC}
                            alt={content::OWNER_NAME}
                            class="w-48 h-48 mx-auto rounded-full border-4 border-white shadow-2xl object-cover"
                        />
                    </div>
                    <h1 class="text-5xl md:text-7xl font-bold text-white mb-6">{content::OWNER_NAME}</h1>
                    <div class="text-2xl md:text-3xl text-blue-100 mb-4 h-12">
                        <span class="typing-animation">{move || display.get()}</span>
                    </div>
                    <p class="text-xl text-blue-100 mb-8 max-w-2xl mx-auto">{content::TAGLINE}</p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <button
                            class="px-8 py-4 bg-white text-primary-light font-semibold rounded-lg hover:bg-gray-100 transition-colors shadow-lg"
                            on:click=move |_| BrowserScroll.scroll_to(SectionId::Work)
                        >
                            <i class="fas fa-code mr-2"></i>
                            "View Projects"
                        </button>
                        <button
                            class="px-8 py-4 bg-transparent border-2 border-white text-white font-semibold rounded-lg hover:bg-white hover:text-primary-light transition-colors"
                            on:click=move |_| request_asset(&resume)
                        >
                            <i class="fas fa-download mr-2"></i>
                            "Download Resume"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
