//! Blog teasers with client-side pagination.

use leptos::prelude::*;
use leptos_router::components::A;

use super::{SectionHeading, anchors};
use crate::core::sections::{BLOGS_PER_PAGE, page_count, page_slice};
use crate::core::{BlogPost, BlogsSection as Blogs};
use crate::ui::context::use_site_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::section::{section_view, use_section};

/// Teaser card linking to the post's detail page
#[component]
pub fn BlogCard(post: BlogPost) -> impl IntoView {
    view! {
        <article class="blog-card">
            {(!post.post_photo.is_empty()).then(|| view! {
                <img src=post.post_photo.clone() alt=post.post_title.clone() class="blog-card-image" />
            })}
            <div class="blog-card-body">
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
                <h3 class="title-md">{post.post_title.clone()}</h3>
                <p class="line-clamp-3 grow">{post.post_content_short.clone()}</p>
                <A href=post.path() attr:class="btn-base btn-secondary mt-4">
                    "Read Article"
                    <Icon name=icons::CHEVRON_RIGHT class="w-4 h-4"/>
                </A>
            </div>
        </article>
    }
}

#[component]
pub fn BlogsSection() -> impl IntoView {
    let ctx = use_site_context();
    let blogs = use_section::<Blogs>();
    let page = RwSignal::new(1_usize);

    let go_to_page = Callback::new(move |target: usize| {
        page.set(target);
        ctx.scroll_to(anchors::BLOGS);
    });

    view! {
        <section id=anchors::BLOGS class="section section-light">
            <SectionHeading
                heading="Insights & Articles".to_string()
                subheading="Explore our latest thoughts, industry trends, and expert opinions".to_string()
            />
            {section_view(blogs, move |data: Blogs| {
                let pages = page_count(data.blogs.len(), BLOGS_PER_PAGE);
                let posts = data.blogs;

                view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {move || {
                            page_slice(&posts, page.get(), BLOGS_PER_PAGE)
                                .iter()
                                .map(|post| view! { <BlogCard post=post.clone() /> })
                                .collect_view()
                        }}
                    </div>
                    {(pages > 1).then(|| view! {
                        <nav class="pagination" aria-label="Blog pages">
                            <button
                                class="pagination-step"
                                aria-label="Previous page"
                                disabled=move || page.get() <= 1
                                on:click=move |_| go_to_page.run(page.get_untracked().saturating_sub(1).max(1))
                            >
                                <Icon name=icons::CHEVRON_LEFT class="w-5 h-5"/>
                            </button>
                            {(1..=pages).map(|number| view! {
                                <button
                                    class="pagination-page"
                                    class:pagination-current=move || page.get() == number
                                    aria-label=format!("Page {number}")
                                    on:click=move |_| go_to_page.run(number)
                                >
                                    {number}
                                </button>
                            }).collect_view()}
                            <button
                                class="pagination-step"
                                aria-label="Next page"
                                disabled=move || page.get() >= pages
                                on:click=move |_| go_to_page.run((page.get_untracked() + 1).min(pages))
                            >
                                <Icon name=icons::CHEVRON_RIGHT class="w-5 h-5"/>
                            </button>
                        </nav>
                    })}
                }
            })}
        </section>
    }
}
