mod blocks;
mod homepage;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::config::{SiteConfig, BUILD_TIME};
use homepage::{HomePage, VariantPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="generated" content=BUILD_TIME />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gradient-to-br from-slate-50 to-gray-200 font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(SiteConfig::from_build());

    view! {
        <Router>
            <main class="min-h-screen px-4 py-12 sm:px-6 lg:px-8">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/variant/:variant") view=VariantPage />
                </Routes>
            </main>
        </Router>
    }
}

/// Flags the server response as 404; a no-op outside a server render.
#[cfg(feature = "ssr")]
fn mark_not_found() {
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    mark_not_found();

    view! {
        <Title text="Page not found" />
        <div class="max-w-3xl mx-auto text-center">
            <h1 class="text-2xl font-semibold text-gray-800 mb-4">"Page not found."</h1>
            <A href="/" attr:class="text-gray-600 hover:text-gray-900 underline">
                "Back to the home page"
            </A>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos_axum::ResponseOptions;

    #[test]
    fn test_not_found_sets_404_status() {
        let owner = Owner::new();
        owner.with(|| {
            let response = ResponseOptions::default();
            provide_context(response.clone());
            mark_not_found();
            assert_eq!(
                response.0.read().status,
                Some(http::StatusCode::NOT_FOUND)
            );
        });
    }

    #[test]
    fn test_not_found_without_response_is_harmless() {
        Owner::new().with(mark_not_found);
    }
}
