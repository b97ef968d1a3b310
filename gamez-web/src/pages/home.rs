//! Credit-rate landing page.

use crate::paths::asset_path;
use gamez_core::{CreditGroup, CreditTile, HubData, Perk, Route, Step};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HomePageProps {
    pub data: Rc<HubData>,
    pub on_select: Callback<Route>,
}

#[function_component(HomePage)]
pub fn home_page(p: &HomePageProps) -> Html {
    let data = &p.data;
    let browse = {
        let cb = p.on_select.clone();
        Callback::from(move |_: MouseEvent| cb.emit(Route::Games))
    };

    let platform_stat = format!("{}+", data.catalog.len());

    html! {
        <section class="page home" id="home" aria-labelledby="home-title">
            <div class="hero">
                <h1 id="home-title">{ format!("{} credits", data.site.brand) }</h1>
                <p class="tagline">
                    { "Neon-soaked gaming drops, backend portals, and a glow that stays true to the brand." }
                </p>
                if !data.site.pills.is_empty() {
                    <ul class="pills">
                        { for data.site.pills.iter().map(|pill| html! {
                            <li key={pill.clone()} class="pill">{ pill.clone() }</li>
                        }) }
                    </ul>
                }
                <dl class="stats">
                    <div class="stat" data-stat="platforms">
                        <dt>{ "Platforms" }</dt>
                        <dd>{ platform_stat }</dd>
                    </div>
                    { for data.site.highlights.iter().map(|item| html! {
                        <div class="stat">
                            <dt>{ item.label.clone() }</dt>
                            <dd>{ item.value.clone() }</dd>
                        </div>
                    }) }
                </dl>
                <button type="button" class="cta" data-nav="games" onclick={browse}>
                    { "Browse games" }
                </button>
            </div>
            { for data.credits.groups().into_iter().map(|group| {
                let tiles = data.credits.tiles(group, &data.catalog);
                credit_group(group, &tiles)
            }) }
            if !data.site.perks.is_empty() {
                <ul class="perks">{ for data.site.perks.iter().map(perk_card) }</ul>
            }
            if !data.site.steps.is_empty() {
                <section class="steps" aria-labelledby="steps-title">
                    <h2 id="steps-title">{ "How it works" }</h2>
                    <ol>{ for data.site.steps.iter().enumerate().map(|(i, step)| step_item(i + 1, step)) }</ol>
                </section>
            }
        </section>
    }
}

fn credit_group(group: &CreditGroup, tiles: &[CreditTile]) -> Html {
    html! {
        <article class="credit-group">
            <header>
                <h2>{ group.title.clone() }</h2>
                if !group.description.is_empty() {
                    <p>{ group.description.clone() }</p>
                }
                <p class="rate">{ group.rate.clone() }</p>
                if !group.rate_lines.is_empty() {
                    <ul class="rate-lines">
                        { for group.rate_lines.iter().map(|line| html! {
                            <li key={line.clone()}>{ line.clone() }</li>
                        }) }
                    </ul>
                }
            </header>
            <ul class="credit-tiles">
                { for tiles.iter().map(credit_tile) }
            </ul>
        </article>
    }
}

fn credit_tile(tile: &CreditTile) -> Html {
    let logo = tile.logo.as_deref().map_or_else(
        || html! { <div class="logo-placeholder">{ tile.name.clone() }</div> },
        |src| html! { <img src={asset_path(src)} alt={tile.name.clone()} loading="lazy" /> },
    );
    html! {
        <li key={tile.name.clone()} class="credit-tile">
            { logo }
            <p>{ tile.name.clone() }</p>
        </li>
    }
}

fn perk_card(perk: &Perk) -> Html {
    html! {
        <li key={perk.title.clone()} class="perk">
            <h3>{ perk.title.clone() }</h3>
            <p>{ perk.body.clone() }</p>
        </li>
    }
}

fn step_item(number: usize, step: &Step) -> Html {
    html! {
        <li key={step.title.clone()} class="step" data-step={number.to_string()}>
            <span class="step-number" aria-hidden="true">{ number.to_string() }</span>
            <h3>{ step.title.clone() }</h3>
            <p>{ step.detail.clone() }</p>
        </li>
    }
}
