//! Sticky navigation bar and hero banner.

use leptos::prelude::*;

use super::anchors;
use crate::core::HeaderSection;
use crate::core::viewport::header_condensed;
use crate::ui::context::use_site_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::section::{section_view, use_section};

struct MenuItem {
    name: &'static str,
    target: &'static str,
    children: &'static [(&'static str, &'static str)],
}

const MENU: &[MenuItem] = &[
    MenuItem { name: "Home", target: anchors::HERO, children: &[] },
    MenuItem {
        name: "Properties",
        target: anchors::ABOUT,
        children: &[
            ("About the Property", anchors::ABOUT),
            ("Property Info", anchors::PROPERTY_INFO),
            ("About the Builder", anchors::BUILDER),
        ],
    },
    MenuItem {
        name: "Layouts",
        target: anchors::UNIT_LAYOUTS,
        children: &[
            ("Unit Layouts", anchors::UNIT_LAYOUTS),
            ("Floor Plans", anchors::FLOOR_PLANS),
            ("Master Layout", anchors::MASTER_LAYOUT),
        ],
    },
    MenuItem { name: "Amenities", target: anchors::AMENITIES, children: &[] },
    MenuItem { name: "Gallery", target: anchors::GALLERY, children: &[] },
    MenuItem { name: "Contact", target: anchors::CONTACT, children: &[] },
];

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_site_context();
    let header = use_section::<HeaderSection>();

    let scroll_y = RwSignal::new(0.0_f64);
    let mobile_open = RwSignal::new(false);
    let open_dropdown = RwSignal::new(None::<usize>);

    #[cfg(not(feature = "ssr"))]
    {
        let viewport = ctx.viewport.clone();
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            scroll_y.set(viewport.scroll_y());
        });
        on_cleanup(move || handle.remove());
    }

    let condensed = Memo::new(move |_| header_condensed(scroll_y.get()));

    let go_to = {
        let ctx = ctx.clone();
        Callback::new(move |target: &'static str| {
            ctx.scroll_to(target);
            mobile_open.set(false);
            open_dropdown.set(None);
        })
    };

    let toggle_dropdown = move |index: usize| {
        open_dropdown.update(|open| {
            *open = if *open == Some(index) { None } else { Some(index) };
        });
    };

    let menu_entries = move |mobile: bool| {
        MENU.iter()
            .enumerate()
            .map(|(index, item)| {
                let has_children = !item.children.is_empty();
                let target = item.target;
                let children = item.children.iter().map(|&(name, child)| view! {
                    <a
                        href=format!("#{child}")
                        class="nav-dropdown-item"
                        on:click=move |ev| {
                            ev.prevent_default();
                            go_to.run(child);
                        }
                    >
                        {name}
                    </a>
                }).collect_view();

                view! {
                    <div class=if mobile { "nav-mobile-item" } else { "nav-item" }>
                        <button
                            class="nav-link"
                            class:nav-link-active=move || open_dropdown.get() == Some(index)
                            on:click=move |_| {
                                if has_children {
                                    toggle_dropdown(index)
                                } else {
                                    go_to.run(target)
                                }
                            }
                        >
                            {item.name}
                            {has_children.then(|| view! {
                                <span
                                    class="nav-chevron"
                                    class:rotate-180=move || open_dropdown.get() == Some(index)
                                >
                                    <Icon name=icons::CHEVRON_DOWN class="w-4 h-4"/>
                                </span>
                            })}
                        </button>
                        {has_children.then(|| view! {
                            <div
                                class="nav-dropdown"
                                class:nav-dropdown-open=move || open_dropdown.get() == Some(index)
                            >
                                {children}
                            </div>
                        })}
                    </div>
                }
            })
            .collect_view()
    };

    let enquire = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        go_to.run(anchors::CONTACT);
    };

    section_view(header, move |data: HeaderSection| {
        let hero = data.hero_image().map(str::to_string).unwrap_or_default();
        let name = data.property_name.clone();

        view! {
            <header
                class="site-header"
                class:site-header-condensed=move || condensed.get()
            >
                <nav class="container mx-auto px-4 flex justify-between items-center h-20">
                    <a href="/" class="block shrink-0">
                        <img
                            src=data.logo.clone()
                            alt=name.clone()
                            class=move || if condensed.get() { "h-12" } else { "h-16" }
                        />
                    </a>

                    <div class="hidden lg:flex items-center gap-1">{menu_entries(false)}</div>

                    <a href="#contact" class="hidden lg:inline-flex btn-base btn-primary" on:click=enquire>
                        "Enquire Now"
                    </a>

                    <button
                        type="button"
                        class="lg:hidden btn-icon"
                        aria-label="Toggle menu"
                        on:click=move |_| mobile_open.update(|open| *open = !*open)
                    >
                        {move || if mobile_open.get() {
                            view! { <Icon name=icons::X class="w-6 h-6"/> }.into_any()
                        } else {
                            view! { <Icon name=icons::MENU class="w-6 h-6"/> }.into_any()
                        }}
                    </button>
                </nav>

                <Show when=move || mobile_open.get()>
                    <div class="lg:hidden nav-mobile">
                        {menu_entries(true)}
                        <a href="#contact" class="btn-base btn-primary w-full" on:click=enquire>
                            "Enquire Now"
                        </a>
                    </div>
                </Show>
            </header>

            <section id=anchors::HERO class="hero">
                <img src=hero alt=name.clone() class="hero-image" />
                <div class="hero-overlay"></div>
                <div class="hero-content container mx-auto px-4">
                    {(!data.property_type_price_range_text.is_empty()).then(|| view! {
                        <div class="hero-badge">{data.property_type_price_range_text.clone()}</div>
                    })}
                    <h1 class="hero-title">{data.hero_banner_heading.clone()}</h1>
                    <p class="hero-subtitle">{data.hero_banner_subheading.clone()}</p>

                    <div class="flex flex-wrap gap-4">
                        <a href="#contact" class="btn-base btn-primary btn-lg" on:click=enquire>
                            "Book a Site Visit"
                        </a>
                        <a
                            href="#gallery"
                            class="btn-base btn-secondary btn-lg"
                            on:click=move |ev| {
                                ev.prevent_default();
                                go_to.run(anchors::GALLERY);
                            }
                        >
                            "View Gallery"
                        </a>
                    </div>

                    <div class="hero-facts">
                        <div class="hero-fact">
                            <div class="hero-fact-value">{data.property_area_min_max.clone()}</div>
                            <div class="hero-fact-label">"Area Range"</div>
                        </div>
                        <div class="hero-fact">
                            <div class="hero-fact-value">"Premium Location"</div>
                            <div class="hero-fact-label">{data.address()}</div>
                        </div>
                    </div>
                </div>
            </section>
        }
    })
}
