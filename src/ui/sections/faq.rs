use leptos::prelude::*;

use super::{SectionHeading, anchors};
use crate::core::FaqSection as Faqs;
use crate::core::html::to_plain_text;
use crate::ui::icon::{Icon, icons};
use crate::ui::section::{section_view, use_section};

/// Opening the open question closes it; opening another one replaces it.
fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) { None } else { Some(clicked) }
}

/// Accordion of frequently asked questions
#[component]
pub fn FaqSection() -> impl IntoView {
    let faqs = use_section::<Faqs>();
    let open = RwSignal::new(None::<usize>);

    view! {
        <section id=anchors::FAQ class="section section-light">
            {section_view(faqs, move |data: Faqs| view! {
                <SectionHeading heading=data.heading() />
                <div class="max-w-4xl mx-auto space-y-6">
                    {data.faqs.iter().enumerate().map(|(index, faq)| {
                        let answer = to_plain_text(&faq.faq_content);
                        let is_open = move || open.get() == Some(index);
                        view! {
                            <div class="faq-item">
                                <button
                                    class="faq-question"
                                    aria-expanded=move || is_open().to_string()
                                    on:click=move |_| open.update(|o| *o = toggle(*o, index))
                                >
                                    <span>{faq.faq_title.clone()}</span>
                                    {move || if is_open() {
                                        view! { <Icon name=icons::CHEVRON_DOWN/> }.into_any()
                                    } else {
                                        view! { <Icon name=icons::CHEVRON_RIGHT/> }.into_any()
                                    }}
                                </button>
                                <Show when=is_open>
                                    <div class="faq-answer">{answer.clone()}</div>
                                </Show>
                            </div>
                        }
                    }).collect_view()}
                </div>
            })}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_question_open_at_a_time() {
        let open = toggle(None, 2);
        assert_eq!(open, Some(2));
        assert_eq!(toggle(open, 0), Some(0));
        assert_eq!(toggle(open, 2), None);
    }
}
