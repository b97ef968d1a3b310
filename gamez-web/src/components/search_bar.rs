use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub value: AttrValue,
    pub placeholder: AttrValue,
    pub on_input: Callback<String>,
}

/// Controlled text input; the owning page keeps the query.
#[function_component(SearchBar)]
pub fn search_bar(p: &Props) -> Html {
    let oninput = {
        let cb = p.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    html! {
        <div class="search-bar" role="search">
            <label for="hub-search" class="sr-only">{ p.placeholder.clone() }</label>
            <input
                id="hub-search"
                type="search"
                data-testid="search"
                placeholder={p.placeholder.clone()}
                value={p.value.clone()}
                {oninput}
            />
        </div>
    }
}
