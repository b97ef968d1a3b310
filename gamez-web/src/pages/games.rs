use crate::components::catalog_grid::{CardModel, CatalogGrid};
use crate::components::search_bar::SearchBar;
use gamez_core::HubData;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GamesPageProps {
    pub data: Rc<HubData>,
}

/// Game catalog with a live name filter. The query resets when the page unmounts.
#[function_component(GamesPage)]
pub fn games_page(p: &GamesPageProps) -> Html {
    let query = use_state(String::new);
    let on_input = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let cards: Vec<CardModel> = p
        .data
        .catalog
        .filter(&query)
        .into_iter()
        .map(CardModel::play)
        .collect();
    let empty_message = format!("No games match \"{}\".", *query);

    html! {
        <section class="page games" id="games" aria-labelledby="games-title">
            <h2 id="games-title">{ format!("{} games", p.data.site.brand) }</h2>
            <SearchBar
                value={AttrValue::from((*query).clone())}
                placeholder="Search games..."
                {on_input}
            />
            <CatalogGrid {cards} empty_message={AttrValue::from(empty_message)} />
        </section>
    }
}
