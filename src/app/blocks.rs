use leptos::prelude::*;

use crate::contact::ContactLink;
use crate::i18n::Language;
use crate::page::{Block, Collection, Icon, Item, LanguageOption, Layout, Pricing};
use crate::reveal::{stagger_style, Reveal};

/// Renders one page block, fading it in after the blocks before it.
#[component]
pub fn BlockView(block: Block, index: usize, reveal: RwSignal<Reveal>) -> impl IntoView {
    let inner = match block {
        Block::LanguageSwitcher { label, options } => {
            view! { <LanguageSwitcher label options /> }.into_any()
        }
        Block::Title { title, role } => view! {
            <div class="text-center mb-8">
                <h1 class="text-4xl font-semibold text-gray-800 mb-4">
                    {title}
                    <span class="block text-xl font-normal text-gray-600 mt-2">{role}</span>
                </h1>
            </div>
        }
        .into_any(),
        Block::Paragraph(text) => {
            view! { <p class="text-lg text-gray-700 mb-6 leading-relaxed">{text}</p> }.into_any()
        }
        Block::Collection(collection) => view! { <CollectionView collection /> }.into_any(),
        Block::Pricing(pricing) => view! { <PricingView pricing /> }.into_any(),
        Block::Contacts { heading, links } => view! { <ContactRow heading links /> }.into_any(),
    };

    view! {
        <div class=move || reveal.get().class() style=stagger_style(index)>
            {inner}
        </div>
    }
}

/// Inline outline icon; needs no icon font or sprite sheet.
#[component]
fn IconSvg(icon: Icon, class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

#[component]
fn LanguageSwitcher(label: String, options: Vec<LanguageOption>) -> impl IntoView {
    let language = expect_context::<RwSignal<Language>>();
    view! {
        <nav class="flex justify-end mb-4" aria-label=label>
            <div class="flex space-x-2">
                {options
                    .into_iter()
                    .map(|option| {
                        let lang = option.language;
                        view! {
                            <button
                                class=if option.active {
                                    "px-3 py-1 rounded-md bg-primary text-white"
                                } else {
                                    "px-3 py-1 rounded-md bg-gray-200"
                                }
                                aria-pressed=if option.active { "true" } else { "false" }
                                on:click=move |_| language.set(lang)
                            >
                                {lang.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}

#[component]
fn CollectionView(collection: Collection) -> impl IntoView {
    let Collection {
        heading,
        layout,
        items,
        note,
        ..
    } = collection;

    let heading = heading
        .map(|h| view! { <h2 class="text-xl font-semibold text-gray-800 mb-4">{h}</h2> });
    let body = match layout {
        Layout::Badges => view! {
            <ol class="flex flex-wrap justify-center gap-3 mb-6">
                {items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li class="flex items-center gap-2 bg-white/90 rounded-lg p-3 shadow-sm">
                                <IconSvg icon=item.icon class="h-5 w-5 text-gray-700" />
                                <span class="text-sm font-medium">{item.body}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        }
        .into_any(),
        Layout::Checklist => view! {
            <ol class="space-y-3">
                {items
                    .into_iter()
                    .map(|item| view! { <MarkedItem item marker="h-5 w-5 shrink-0 mt-0.5 text-green-500" /> })
                    .collect_view()}
            </ol>
        }
        .into_any(),
        Layout::Bullets => view! {
            <div class="bg-white/90 rounded-lg p-5 shadow-sm">
                <ol class="space-y-3">
                    {items
                        .into_iter()
                        .map(|item| view! { <MarkedItem item marker="h-4 w-4 shrink-0 mt-1 text-amber-500" /> })
                        .collect_view()}
                </ol>
            </div>
        }
        .into_any(),
        Layout::Cards => view! {
            <ol class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li class="bg-white rounded-lg p-4 shadow-sm hover:shadow-md hover:-translate-y-1 transition">
                                <h3 class="text-lg font-medium text-gray-800 mb-2">{item.title}</h3>
                                <p class="text-gray-600 text-sm">{item.body}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        }
        .into_any(),
    };
    let note = note.map(|n| view! { <p class="text-gray-600 text-center">{n}</p> });

    view! {
        <section class="mb-8">
            {heading}
            {body}
            {note}
        </section>
    }
}

#[component]
fn MarkedItem(item: Item, marker: &'static str) -> impl IntoView {
    view! {
        <li class="flex items-start gap-3">
            <IconSvg icon=item.icon class=marker />
            <p class="text-gray-600">{item.body}</p>
        </li>
    }
}

#[component]
fn PricingView(pricing: Pricing) -> impl IntoView {
    let Pricing {
        heading,
        cards,
        cta,
        booking,
    } = pricing;
    view! {
        <section class="bg-gray-50/80 rounded-xl p-6 mb-8">
            <h2 class="text-2xl font-semibold text-gray-800 mb-6">{heading}</h2>
            <ol class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-6">
                {cards
                    .into_iter()
                    .map(|card| {
                        view! {
                            <li class="bg-white rounded-lg p-4 shadow-sm flex flex-col">
                                <h3 class="text-lg font-medium text-gray-800">{card.name}</h3>
                                <p class="text-2xl font-semibold text-primary my-2">{card.price}</p>
                                <p class="text-gray-600 text-sm">{card.description}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
            {booking
                .map(|link| {
                    view! {
                        <div class="text-center">
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-block bg-primary text-white px-6 py-3 rounded-md font-medium hover:opacity-90 transition"
                            >
                                {cta}
                            </a>
                        </div>
                    }
                })}
        </section>
    }
}

#[component]
fn ContactRow(heading: String, links: &'static [ContactLink]) -> impl IntoView {
    view! {
        <div class="flex justify-center space-x-6 mb-6">
            <h3 class="sr-only">{heading}</h3>
            {links
                .iter()
                .map(|link| {
                    view! {
                        <a
                            href=link.href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex flex-col items-center gap-1 text-gray-600 hover:text-gray-900 hover:scale-110 active:scale-95 transition duration-200"
                        >
                            <IconSvg icon=link.icon class="h-6 w-6" />
                            <span class="text-xs">{link.label}</span>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
