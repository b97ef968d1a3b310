pub mod bootstrap;
pub mod shell;

pub use shell::{Shell, ShellProps};

#[cfg(target_arch = "wasm32")]
use crate::router::{BrowserHash, use_hash_listener};
#[cfg(target_arch = "wasm32")]
use gamez_core::{NavEvent, RouteStore};
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Root component: owns the route store and mirrors its state into Yew.
#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let data = use_memo((), |_| bootstrap::load_hub_data());
    let intro = data.site.intro.active();
    let store = use_mut_ref(|| RouteStore::open(BrowserHash, intro));
    let snapshot = {
        let store = store.clone();
        use_state(move || store.borrow().state().clone())
    };

    let on_event = {
        let store = store.clone();
        let snapshot = snapshot.clone();
        use_callback((), move |event: NavEvent, _| {
            let mut store = store.borrow_mut();
            store.dispatch(event);
            snapshot.set(store.state().clone());
        })
    };

    {
        let store = store.clone();
        let snapshot = snapshot.clone();
        use_hash_listener(Callback::from(move |()| {
            let mut store = store.borrow_mut();
            store.sync();
            snapshot.set(store.state().clone());
        }));
    }

    html! {
        <Shell state={(*snapshot).clone()} data={Rc::clone(&data)} {on_event} />
    }
}
