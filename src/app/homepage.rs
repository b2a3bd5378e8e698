use leptos::prelude::*;
use leptos_meta::{Html, Title};
use leptos_router::hooks::{use_params_map, use_query_map};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::config::LANGUAGE_STORAGE_KEY;
use crate::config::{SiteConfig, SiteVariant};
use crate::contact::CONTACT_LINKS;
use crate::i18n::{initial_language, Language, Localizer};
use crate::page::present;
use crate::reveal::Reveal;

use super::blocks::BlockView;
use super::NotFound;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    view! { <Portfolio variant=config.variant /> }
}

/// Preview of any variant by slug, independent of the build's default.
#[component]
pub fn VariantPage() -> impl IntoView {
    let params = use_params_map();
    let variant = move || {
        params
            .get()
            .get("variant")
            .unwrap_or_default()
            .parse::<SiteVariant>()
            .ok()
    };
    move || match variant() {
        Some(variant) => view! { <Portfolio variant /> }.into_any(),
        None => view! { <NotFound /> }.into_any(),
    }
}

#[component]
fn Portfolio(variant: SiteVariant) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let query = use_query_map();
    let requested = query.with_untracked(|query| query.get("lang"));
    let language = RwSignal::new(initial_language(
        requested.as_deref(),
        None,
        config.default_language,
    ));
    provide_context(language);

    // client-side navigation to another ?lang= switches in place
    Effect::watch(
        move || query.with(|query| query.get("lang")),
        move |lang, _, _| {
            if let Some(code) = lang {
                language.set(Language::from_code_or_default(code));
            }
        },
        false,
    );

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) =
            use_local_storage::<Language, JsonSerdeWasmCodec>(LANGUAGE_STORAGE_KEY);
        Effect::watch(
            || (),
            move |_, _, _| {
                language.set(initial_language(
                    requested.as_deref(),
                    Some(stored.get_untracked()),
                    config.default_language,
                ));
            },
            true,
        );
        Effect::watch(
            move || language.get(),
            move |lang, _, _| set_stored.set(*lang),
            false,
        );
    }

    let page = Memo::new(move |_| {
        let page = present(&Localizer::new(variant, language.get()), CONTACT_LINKS);
        if !page.missing.is_empty() {
            log::warn!(
                "{variant}/{}: rendering placeholders for {}",
                page.language,
                page.missing.join(", ")
            );
        }
        page
    });

    let reveal = RwSignal::new(Reveal::default());
    Effect::new(move |_| {
        reveal.update(|r| {
            r.mount();
        });
    });

    view! {
        <Title text=move || page.with(|p| p.document_title.clone()) />
        <Html attr:lang=move || language.get().code() />
        <div class="max-w-3xl mx-auto">
            <div class="backdrop-blur-sm bg-white/80 rounded-2xl shadow-lg p-8 sm:p-12">
                {move || {
                    page.get()
                        .blocks
                        .into_iter()
                        .enumerate()
                        .map(|(index, block)| view! { <BlockView block index reveal /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
