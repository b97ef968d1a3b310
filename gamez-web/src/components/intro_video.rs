//! Full-screen intro clip shown before the first page.
//!
//! Every way out of the clip (end, error, rejected `play()`, skip) is reported
//! through `on_exit`. The navigation state ignores all but the first.

use gamez_core::{IntroExit, MediaFailure};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub src: AttrValue,
    pub on_exit: Callback<IntroExit>,
}

#[function_component(IntroVideo)]
pub fn intro_video(p: &Props) -> Html {
    let video_ref = use_node_ref();

    {
        let video_ref = video_ref.clone();
        let on_exit = p.on_exit.clone();
        use_effect_with(p.src.clone(), move |_| {
            start_playback(&video_ref, &on_exit);
            || ()
        });
    }

    let onended = {
        let cb = p.on_exit.clone();
        Callback::from(move |_: Event| cb.emit(IntroExit::Completed))
    };
    let onerror = {
        let cb = p.on_exit.clone();
        Callback::from(move |_: Event| {
            log::warn!("intro media failed to load");
            cb.emit(IntroExit::Failed(MediaFailure::Load));
        })
    };
    let on_skip = {
        let cb = p.on_exit.clone();
        Callback::from(move |_: MouseEvent| cb.emit(IntroExit::Skipped))
    };

    html! {
        <section class="intro" aria-label="Intro">
            <video
                ref={video_ref}
                class="intro-video"
                src={p.src.clone()}
                autoplay=true
                muted=true
                playsinline=true
                preload="auto"
                {onended}
                {onerror}
            />
            <button type="button" class="intro-skip" data-testid="intro-skip" onclick={on_skip}>
                { "Skip intro" }
            </button>
        </section>
    }
}

/// Browsers may reject autoplay; a rejected promise counts as a failed intro.
#[cfg(target_arch = "wasm32")]
fn start_playback(video_ref: &NodeRef, on_exit: &Callback<IntroExit>) {
    use wasm_bindgen_futures::JsFuture;

    let Some(video) = video_ref.cast::<web_sys::HtmlMediaElement>() else {
        return;
    };
    video.set_muted(true);

    let fail = {
        let on_exit = on_exit.clone();
        move |err: wasm_bindgen::JsValue| {
            let reason = crate::dom::js_error_message(&err);
            log::warn!("intro playback rejected: {reason}");
            on_exit.emit(IntroExit::Failed(MediaFailure::Playback(reason)));
        }
    };

    match video.play() {
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                fail(err);
            }
        }),
        Err(err) => fail(err),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn start_playback(_video_ref: &NodeRef, _on_exit: &Callback<IntroExit>) {}
