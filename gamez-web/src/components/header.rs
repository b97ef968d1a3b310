use crate::dom;
use gamez_core::Route;
use yew::prelude::*;

/// Id of the element the skip link moves focus to.
pub const MAIN_ID: &str = "main";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub brand: AttrValue,
    pub active: Route,
    pub on_select: Callback<Route>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_brand = {
        let cb = p.on_select.clone();
        Callback::from(move |_: MouseEvent| cb.emit(Route::Home))
    };

    // The fragment is the route, so skipping moves focus instead of linking to `#main`.
    let on_skip = Callback::from(|_: MouseEvent| {
        if !dom::focus_element(MAIN_ID) {
            log::warn!("skip link target #{MAIN_ID} not found");
        }
    });

    let items = Route::ALL.into_iter().map(|route| {
        let active = route == p.active;
        let onclick = {
            let cb = p.on_select.clone();
            Callback::from(move |_: MouseEvent| cb.emit(route))
        };
        html! {
            <li key={route.token()}>
                <button
                    type="button"
                    class={classes!("nav-item", active.then_some("active"))}
                    data-nav={route.token()}
                    aria-current={active.then_some("page")}
                    {onclick}
                >
                    { route.nav_label() }
                </button>
            </li>
        }
    });

    html! {
        <header role="banner" class="hub-header">
            <button type="button" class="sr-only skip-link" data-testid="skip-link" onclick={on_skip}>
                { "Skip to content" }
            </button>
            <div class="header-content">
                <button type="button" class="brand" data-nav="brand" onclick={on_brand}>
                    { p.brand.clone() }
                </button>
                <nav aria-label="Primary">
                    <ul class="nav-list">{ for items }</ul>
                </nav>
            </div>
        </header>
    }
}
