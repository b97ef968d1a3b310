use crate::paths::asset_path;
use gamez_core::BackgroundConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub config: BackgroundConfig,
}

/// Looping backdrop video. Falls back to the poster image once the video errors.
#[function_component(BackgroundMedia)]
pub fn background_media(p: &Props) -> Html {
    let failed = use_state(|| false);

    let poster = p.config.poster.as_deref().map(asset_path);
    let video = p.config.video.as_deref().filter(|_| !*failed).map(asset_path);

    let body = if let Some(src) = video {
        let onerror = {
            let failed = failed.clone();
            Callback::from(move |_: Event| {
                log::warn!("background video failed, using poster");
                failed.set(true);
            })
        };
        html! {
            <video
                class="background-video"
                src={src}
                poster={poster}
                autoplay=true
                muted=true
                loop=true
                playsinline=true
                {onerror}
            />
        }
    } else if let Some(src) = poster {
        html! { <img class="background-poster" src={src} alt="" /> }
    } else {
        Html::default()
    };

    html! {
        <div class="background" aria-hidden="true">{ body }</div>
    }
}
