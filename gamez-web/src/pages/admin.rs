use crate::components::catalog_grid::{CardModel, CatalogGrid};
use crate::components::search_bar::SearchBar;
use gamez_core::HubData;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AdminPageProps {
    pub data: Rc<HubData>,
}

#[function_component(AdminPage)]
pub fn admin_page(p: &AdminPageProps) -> Html {
    let query = use_state(String::new);
    let on_input = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let cards: Vec<CardModel> = p
        .data
        .catalog
        .admin_links(&query)
        .into_iter()
        .filter_map(CardModel::admin)
        .collect();
    let empty_message = format!("No backend links match \"{}\".", *query);

    html! {
        <section class="page admin" id="admin" aria-labelledby="admin-title">
            <h2 id="admin-title">{ "Backend links" }</h2>
            <SearchBar
                value={AttrValue::from((*query).clone())}
                placeholder="Search backend links..."
                {on_input}
            />
            <CatalogGrid {cards} empty_message={AttrValue::from(empty_message)} />
        </section>
    }
}
