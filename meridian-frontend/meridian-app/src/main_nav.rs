use crate::components::brand::BrandMark;
use icondata as i;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_router::components::A;

/// The route every "Home" control in the app navigates to.
pub const HOME_PATH: &str = "/";

#[component]
pub fn MainNav() -> impl IntoView {
    view! {
        <header>
            <div class="header flex items-center justify-between gap-4 px-4 py-3 border-b border-white/10">
                <A href=HOME_PATH attr:class="flex items-center gap-2">
                    <BrandMark />
                    <span class="text-xl font-bold tracking-wide">"Meridian"</span>
                </A>
                <A
                    href=HOME_PATH
                    attr:class="nav-item flex items-center gap-1 rounded-lg px-3 py-1 transition-colors duration-200 hover:bg-white/10"
                >
                    <Icon icon=i::AiHomeOutlined />
                    "Home"
                </A>
            </div>
        </header>
    }
}
