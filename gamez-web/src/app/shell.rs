//! View container: renders exactly one view for the current navigation state.

use crate::a11y::{view_announcement, visible_focus_css};
use crate::components::{
    background::BackgroundMedia, footer::Footer, header::{Header, MAIN_ID},
    intro_video::IntroVideo,
};
use crate::pages::{admin::AdminPage, games::GamesPage, home::HomePage};
use crate::paths::asset_path;
use gamez_core::{HubData, NavEvent, NavState, Route, View};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ShellProps {
    pub state: NavState,
    pub data: Rc<HubData>,
    pub on_event: Callback<NavEvent>,
}

#[function_component(Shell)]
pub fn shell(p: &ShellProps) -> Html {
    let view = p.state.view();
    let data = &p.data;
    let brand = AttrValue::from(data.site.brand.clone());

    let on_select = p.on_event.reform(NavEvent::Select);

    let body = match view {
        View::Intro => {
            let on_exit = p.on_event.reform(NavEvent::IntroFinished);
            html! {
                <IntroVideo src={asset_path(&data.site.intro.src)} {on_exit} />
            }
        }
        View::Page(route) => {
            let page = match route {
                Route::Home => html! {
                    <HomePage data={Rc::clone(data)} on_select={on_select.clone()} />
                },
                Route::Games => html! { <GamesPage data={Rc::clone(data)} /> },
                Route::Admin => html! { <AdminPage data={Rc::clone(data)} /> },
            };
            let notice = p.state.notice().map(|failure| {
                let dismiss = p.on_event.reform(|_: MouseEvent| NavEvent::DismissNotice);
                html! {
                    <div class="media-notice" role="status">
                        <span>{ failure.notice() }</span>
                        <button type="button" aria-label="Dismiss" onclick={dismiss}>{ "×" }</button>
                    </div>
                }
            });
            html! {
                <>
                    <Header brand={brand.clone()} active={route} {on_select} />
                    <main id={MAIN_ID} role="main" tabindex="-1">
                        { notice.unwrap_or_default() }
                        { page }
                    </main>
                    <Footer brand={brand.clone()} />
                </>
            }
        }
    };

    html! {
        <div class="hub-shell" data-view={view.name()}>
            <style>{ visible_focus_css() }</style>
            <BackgroundMedia config={data.site.background.clone()} />
            <div id="route-status" class="sr-only" aria-live="polite">
                { view_announcement(view) }
            </div>
            { body }
        </div>
    }
}
