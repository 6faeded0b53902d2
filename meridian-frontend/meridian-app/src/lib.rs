pub mod components;
pub(crate) mod main_nav;
pub mod routes;

use crate::components::footer::Footer;
use crate::main_nav::MainNav;
use crate::routes::home_page::HomePage;
use crate::routes::legal::privacy_policy::PrivacyPolicy;
use crate::routes::not_found::NotFound;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/meridian.css" />
        <Title text="Meridian" />
        <div class="min-h-screen flex flex-col bg-[color:var(--color-bg)] text-[color:var(--color-text)]">
            <Router>
                <MainNav />
                <main class="flex-1 p-4">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/privacy-policy") view=PrivacyPolicy />
                    </Routes>
                </main>
                <Footer />
            </Router>
        </div>
    }
}
