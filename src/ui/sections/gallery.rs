//! Photo grid with a lightbox.

use leptos::prelude::*;

use super::{SectionHeading, anchors};
use crate::core::GallerySection as Gallery;
use crate::core::viewport::{next_index, prev_index};
use crate::ui::context::use_site_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::section::{section_view, use_section};

const LIGHTBOX_ID: &str = "gallery-lightbox";

#[component]
pub fn GallerySection() -> impl IntoView {
    let ctx = use_site_context();
    let gallery = use_section::<Gallery>();
    let selected = RwSignal::new(None::<usize>);

    let count = move || {
        gallery
            .state
            .with(|state| state.data().map_or(0, |data| data.property_photos.len()))
    };
    let step = move |forward: bool| {
        let len = count();
        selected.update(|current| {
            if let Some(index) = current {
                *index = if forward { next_index(*index, len) } else { prev_index(*index, len) };
            }
        });
    };

    #[cfg(not(feature = "ssr"))]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if selected.get_untracked().is_none() {
                return;
            }
            match ev.key().as_str() {
                "Escape" => selected.set(None),
                "ArrowRight" => step(true),
                "ArrowLeft" => step(false),
                _ => {}
            }
        });
        on_cleanup(move || handle.remove());
    }

    let fullscreen = Callback::new(move |_: ()| {
        ctx.viewport.toggle_fullscreen(LIGHTBOX_ID);
    });

    view! {
        <section id=anchors::GALLERY class="section section-light">
            {section_view(gallery, move |data: Gallery| {
                let heading = data.heading();
                let photos = data.property_photos;

                if photos.is_empty() {
                    return view! {
                        <SectionHeading heading=heading />
                        <p class="text-center text-muted">"No images available"</p>
                    }
                    .into_any();
                }

                let thumbnails = photos.iter().enumerate().map(|(index, photo)| view! {
                    <img
                        src=photo.photo.clone()
                        alt=format!("Gallery {}", index + 1)
                        class="gallery-thumb"
                        on:click=move |_| selected.set(Some(index))
                    />
                }).collect_view();

                view! {
                    <SectionHeading heading=heading />
                    <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">{thumbnails}</div>

                    {move || selected.get().and_then(|index| photos.get(index).cloned()).map(|photo| view! {
                        <div id=LIGHTBOX_ID class="lightbox" role="dialog" aria-label="Photo viewer">
                            <button class="lightbox-close" aria-label="Close" on:click=move |_| selected.set(None)>
                                <Icon name=icons::X class="w-6 h-6"/>
                            </button>
                            <button class="lightbox-fullscreen" aria-label="Toggle fullscreen" on:click=move |_| fullscreen.run(())>
                                <Icon name=icons::MAXIMIZE class="w-6 h-6"/>
                            </button>
                            <button class="lightbox-prev" aria-label="Previous photo" on:click=move |_| step(false)>
                                <Icon name=icons::CHEVRON_LEFT class="w-8 h-8"/>
                            </button>
                            <img src=photo.photo alt="Lightbox" class="lightbox-image" />
                            <button class="lightbox-next" aria-label="Next photo" on:click=move |_| step(true)>
                                <Icon name=icons::CHEVRON_RIGHT class="w-8 h-8"/>
                            </button>
                        </div>
                    })}
                }
                .into_any()
            })}
        </section>
    }
}
