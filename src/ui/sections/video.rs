use leptos::prelude::*;

use super::anchors;
use crate::core::VideoSection;
use crate::ui::context::use_site_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::section::{quiet_section_view, use_section};

const PLAYER_ID: &str = "video-tour-player";

/// Embedded YouTube tour; hidden while loading, on failure and when no video is set
#[component]
pub fn VideoTour() -> impl IntoView {
    let ctx = use_site_context();
    let video = use_section::<VideoSection>();
    let muted = RwSignal::new(true);

    let fullscreen = Callback::new(move |_: ()| {
        ctx.viewport.toggle_fullscreen(PLAYER_ID);
    });

    view! {
        <section id=anchors::VIDEO class="section flex justify-center">
            {quiet_section_view(video, move |data: VideoSection| {
                data.featured().cloned().map(|featured| view! {
                    <div id=PLAYER_ID class="video-frame">
                        <iframe
                            src=move || featured.embed_url(muted.get())
                            title="Property Tour"
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; fullscreen"
                            allowfullscreen=true
                            class="w-full aspect-video"
                            {..leptos::attr::loading("lazy")}
                        ></iframe>
                        <div class="video-controls">
                            <button
                                class="video-control"
                                aria-label=move || if muted.get() { "Unmute" } else { "Mute" }
                                on:click=move |_| muted.update(|m| *m = !*m)
                            >
                                {move || if muted.get() {
                                    view! { <Icon name=icons::VOLUME_OFF/> }.into_any()
                                } else {
                                    view! { <Icon name=icons::VOLUME/> }.into_any()
                                }}
                            </button>
                            <button class="video-control" aria-label="Toggle fullscreen" on:click=move |_| fullscreen.run(())>
                                <Icon name=icons::MAXIMIZE/>
                            </button>
                        </div>
                    </div>
                })
            })}
        </section>
    }
}
