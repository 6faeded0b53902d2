use crate::components::brand::BrandMark;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="mt-8 border-t border-white/10 bg-black/40">
            <div class="container mx-auto flex flex-col items-center gap-2 p-6 text-sm text-[color:var(--color-text)]/70">
                <BrandMark inverted=true />
                <p>"© 2026 Meridian. All rights reserved."</p>
                <A href="/privacy-policy" attr:class="hover:underline">
                    "Privacy Policy"
                </A>
            </div>
        </footer>
    }
}
