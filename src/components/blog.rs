//! Latest blog posts, linking out to Medium.

use leptos::prelude::*;

use crate::components::content_section::{ContentSection, ExternalLink, TagList};
use crate::content::{self, Article};

const TAG_CLASS: &str = "px-2 py-1 bg-primary-light/10 dark:bg-primary-dark/20 text-primary-light dark:text-primary-dark rounded text-xs font-medium";

fn article_card(post: &'static Article) -> impl IntoView {
    view! {
        <article class="bg-light-bg dark:bg-slate-800 rounded-lg shadow-lg overflow-hidden hover:shadow-xl transition-shadow duration-300">
            <div class="aspect-video overflow-hidden">
                <img
                    src={post.image}
                    alt={post.title}
                    class="w-full h-full object-cover hover:scale-105 transition-transform duration-300"
                />
            </div>
            <div class="p-6">
                <div class="flex items-center justify-between mb-3">
                    <span class="text-sm text-text-secondary-light dark:text-text-secondary-dark">{post.date}</span>
                    <span class="text-sm text-accent-light dark:text-accent-dark font-medium">{post.read_time}</span>
                </div>
                <h3 class="text-xl font-semibold text-text-primary-light dark:text-text-primary-dark mb-3 line-clamp-2">
                    {post.title}
                </h3>
                <p class="text-text-secondary-light dark:text-text-secondary-dark mb-4 line-clamp-3">
                    {post.description}
                </p>
                <div class="mb-4">
                    <TagList tags={post.tags} pill_class=TAG_CLASS/>
                </div>
                <ExternalLink
                    href={post.url}
                    classes="inline-flex items-center text-accent-light dark:text-accent-dark hover:text-accent-dark dark:hover:text-accent-light font-medium transition-colors"
                >
                    "Read on Medium"
                    <i class="fas fa-external-link-alt ml-2"></i>
                </ExternalLink>
            </div>
        </article>
    }
}

#[component]
pub fn Blog() -> impl IntoView {
    view! {
        <ContentSection copy={content::WRITING} raised=true>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                {content::ARTICLES.iter().map(article_card).collect_view()}
            </div>
            <div class="text-center mt-12">
                <ExternalLink
                    href={content::MEDIUM_PROFILE_URL}
                    classes="inline-flex items-center px-6 py-3 bg-primary-light dark:bg-primary-dark text-white font-semibold rounded-lg hover:bg-blue-700 dark:hover:bg-blue-400 transition-colors"
                >
                    <i class="fab fa-medium mr-2"></i>
                    "View All Posts"
                </ExternalLink>
            </div>
        </ContentSection>
    }
}
