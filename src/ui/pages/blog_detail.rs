//! Single blog post, loaded from `/blogs/{id}`.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::core::{BlogsSection, TrustedHtml};
use crate::ui::context::use_site_context;
use crate::ui::common::ErrorMessageStatic;
use crate::ui::icon::{Icon, icons};
use crate::ui::section::{section_view, use_section_request};
use crate::ui::sections::RichText;

#[component]
pub fn BlogDetailPage() -> impl IntoView {
    let params = use_params_map();

    // Remount per id so the previous post's loader is disposed
    move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        view! { <BlogPostView id=id /> }
    }
}

#[component]
fn BlogPostView(id: String) -> impl IntoView {
    let ctx = use_site_context();
    let post = use_section_request::<BlogsSection>(ctx.client.blog_post_request(&id));

    view! {
        <div class="blog-page">
            <A href="/#blogs" attr:class="btn-base btn-outline mb-6">
                <Icon name=icons::CHEVRON_LEFT class="w-4 h-4"/>
                <span>"Back"</span>
            </A>
            {section_view(post, |data: BlogsSection| match data.first().cloned() {
                None => view! { <ErrorMessageStatic message="This article is not available.".to_string() /> }.into_any(),
                Some(post) => view! {
                    <Title text=post.post_title.clone() />
                    <article class="blog-article">
                        {(!post.post_photo.is_empty()).then(|| view! {
                            <img src=post.post_photo.clone() alt=post.post_title.clone() class="blog-article-image" />
                        })}
                        <div class="blog-card-meta">
                            <span class="flex items-center gap-1">
                                <Icon name=icons::CALENDAR class="w-4 h-4"/>
                                {post.published_on()}
                            </span>
                            <span class="flex items-center gap-1">
                                <Icon name=icons::CLOCK class="w-4 h-4"/>
                                {format!("{} min read", post.reading_minutes())}
                            </span>
                        </div>
                        <h1 class="title-xl">{post.post_title.clone()}</h1>
                        <p class="blog-article-lead">{post.post_content_short.clone()}</p>
                        <RichText html=TrustedHtml::sanitize(&post.post_content) class="rich-text blog-article-body" />
                    </article>
                }
                .into_any(),
            })}
        </div>
    }
}
