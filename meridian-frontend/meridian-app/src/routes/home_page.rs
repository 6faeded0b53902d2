use leptos::prelude::*;
use leptos_meta::{Meta, Title};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Meridian" />
        <Meta name="description" content="Meridian - find your bearings." />
        <div class="container mx-auto flex flex-col items-center justify-center min-h-[60vh] text-center space-y-4">
            <h1 class="hero-title text-5xl font-extrabold tracking-tight">"Find your bearings"</h1>
            <p class="text-lg text-[color:var(--color-text)]/80 max-w-2xl">
                "Meridian keeps your course steady. We keep your data boring: collected sparingly, shared with no one."
            </p>
        </div>
    }
}
