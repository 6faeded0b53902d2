use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page Not Found - Meridian" />
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center space-y-6 p-4">
            <div class="text-6xl font-bold tracking-widest">"404"</div>
            <p class="text-lg text-[color:var(--color-text)]/80">
                "This page has drifted off the map."
            </p>
            <A href="/" attr:class="btn btn-primary px-6 py-2">
                "Return home"
            </A>
        </div>
    }
}
