use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub brand: AttrValue,
}

#[function_component(Footer)]
pub fn footer(p: &Props) -> Html {
    html! {
        <footer class="hub-footer">
            <p>{ format!("© 2025 {}. All rights reserved.", p.brand) }</p>
        </footer>
    }
}
