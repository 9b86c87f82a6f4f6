//! Contact section with the demo message form.

use leptos::prelude::*;

use crate::components::content_section::{ContentSection, ExternalLink};
use crate::config::SiteConfig;
use crate::content;
use crate::error::ContactError;
use crate::state::contact::{ContactBuffer, ContactField};
use crate::util::browser::acknowledge;

const INPUT_CLASS: &str = "w-full px-4 py-3 border border-gray-300 dark:border-gray-600 rounded-lg focus:ring-2 focus:ring-primary-light dark:focus:ring-primary-dark focus:border-transparent bg-white dark:bg-slate-800 text-text-primary-light dark:text-text-primary-dark";
const LABEL_CLASS: &str = "block text-text-primary-light dark:text-text-primary-dark font-medium mb-2";

fn single_line_input(
    field: ContactField,
    input_type: &'static str,
    placeholder: &'static str,
    buffer: RwSignal<ContactBuffer>,
) -> impl IntoView {
    view! {
        <div>
            <label class=LABEL_CLASS>{field.label()}</label>
            <input
                type=input_type
                name={field.as_str()}
                required=true
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=move || buffer.with(|b| b.field(field).to_owned())
                on:input=move |ev| buffer.update(|b| b.set_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let buffer = RwSignal::new(ContactBuffer::default());
    let error = RwSignal::new(None::<ContactError>);
    let acknowledgement = config.acknowledgement.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match buffer.try_update(|b| b.submit(&acknowledgement)) {
            Some(Ok(ack)) => {
                error.set(None);
                acknowledge(&ack.0);
            }
            Some(Err(e)) => error.set(Some(e)),
            None => {}
        }
    };

    view! {
        <ContentSection copy={content::REACH} raised=true>
            <div class="grid lg:grid-cols-2 gap-12">
                <form class="space-y-6" on:submit=on_submit>
                    {single_line_input(ContactField::Name, "text", "Your Name", buffer)}
                    {single_line_input(ContactField::Email, "email", "your.email@example.com", buffer)}
                    <div>
                        <label class=LABEL_CLASS>{ContactField::Message.label()}</label>
                        <textarea
                            name={ContactField::Message.as_str()}
                            required=true
                            rows="6"
                            class=INPUT_CLASS
                            placeholder="Tell me about your project or opportunity..."
                            prop:value=move || buffer.with(|b| b.message.clone())
                            on:input=move |ev| buffer.update(|b| b.set_field(ContactField::Message, event_target_value(&ev)))
                        ></textarea>
                    </div>
                    <Show when=move || error.get().is_some()>
                        <p class="text-sm text-red-600 dark:text-red-400">
                            {move || error.get().map(|e| e.to_string()).unwrap_or_default()}
                        </p>
                    </Show>
                    <button
                        type="submit"
                        class="w-full px-6 py-3 bg-primary-light dark:bg-primary-dark text-white font-semibold rounded-lg hover:bg-blue-700 dark:hover:bg-blue-400 transition-colors"
                    >
                        <i class="fas fa-paper-plane mr-2"></i>
                        "Send Message"
                    </button>
                    <p class="text-sm text-text-secondary-light dark:text-text-secondary-dark text-center">
                        <i class="fas fa-info-circle mr-1"></i>
                        {content::CONTACT_DEMO_NOTE}
                    </p>
                </form>
                <ContactInfo/>
            </div>
        </ContentSection>
    }
}

const CHANNEL_LINK_CLASS: &str =
    "text-text-secondary-light dark:text-text-secondary-dark hover:text-primary-light dark:hover:text-primary-dark";

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="bg-light-bg dark:bg-slate-800 p-8 rounded-lg shadow-lg">
            <h3 class="text-2xl font-semibold text-text-primary-light dark:text-text-primary-dark mb-6">
                "Let's Connect"
            </h3>
            <div class="space-y-6">
                {content::CONTACT_CHANNELS
                    .iter()
                    .map(|channel| {
                        view! {
                            <div class="flex items-center">
                                <i class={format!("{} text-2xl text-primary-light dark:text-primary-dark mr-4", channel.icon)}></i>
                                <div>
                                    <p class="font-medium text-text-primary-light dark:text-text-primary-dark">{channel.label}</p>
                                    {match channel.href {
                                        Some(href) => view! {
                                            <ExternalLink href=href classes=CHANNEL_LINK_CLASS>{channel.text}</ExternalLink>
                                        }
                                        .into_any(),
                                        None => view! {
                                            <p class="text-text-secondary-light dark:text-text-secondary-dark">{channel.text}</p>
                                        }
                                        .into_any(),
                                    }}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="mt-8 pt-6 border-t border-gray-200 dark:border-gray-700">
                <p class="text-text-secondary-light dark:text-text-secondary-dark mb-4">
                    "Follow me on social media for updates on my latest projects and insights:"
                </p>
                <div class="flex space-x-4">
                    {content::SOCIAL_LINKS
                        .iter()
                        .map(|&(icon, href)| {
                            view! {
                                <ExternalLink
                                    href=href
                                    classes="text-2xl text-text-secondary-light dark:text-text-secondary-dark hover:text-primary-light dark:hover:text-primary-dark transition-colors"
                                >
                                    <i class=icon></i>
                                </ExternalLink>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
