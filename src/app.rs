//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{
    about::About, blog::Blog, contact_form::ContactForm, education::Education, experience::Experience,
    footer::Footer, hero::Hero, navigation::Navigation, projects::Projects, skills::Skills,
};
use crate::config::SiteConfig;
use crate::content;
use crate::state::preference::PreferenceStore;
use crate::util::dark_mode::BrowserTheme;

/// The process-wide theme store, provided as `RwSignal<ThemeStore>`.
pub type ThemeStore = PreferenceStore<BrowserTheme>;

/// Root application component.
///
/// Loads config, initializes the theme store once, and renders the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::load();
    let theme = RwSignal::new(ThemeStore::initialize(BrowserTheme::new(config.theme_storage_key.clone())));
    provide_context(config);
    provide_context(theme);

    view! {
        <Title text={content::OWNER_NAME}/>

        <div class="min-h-screen bg-light-bg dark:bg-dark-bg transition-colors duration-300">
            <Navigation/>
            <Hero/>
            <About/>
            <Blog/>
            <Skills/>
            <Projects/>
            <Experience/>
            <Education/>
            <ContactForm/>
            <Footer/>
        </div>
    }
}
