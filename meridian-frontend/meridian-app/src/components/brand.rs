use leptos::prelude::*;

/// The Meridian logo image. The same asset is used in the header and the
/// footer; the footer inverts it to white with a CSS filter. If the asset
/// fails to load the alt text still renders, so nothing here can break the
/// page.
#[component]
pub fn BrandMark(#[prop(optional)] inverted: bool) -> impl IntoView {
    view! {
        <img
            src="/logo.svg"
            alt="Meridian logo"
            class=if inverted {
                "h-8 w-8 brightness-0 invert"
            } else {
                "h-8 w-8"
            }
        />
    }
}
