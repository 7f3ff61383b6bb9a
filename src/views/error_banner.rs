use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
}

/// Banner superpuesto al mapa (a lo sumo uno)
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div class="map-error-banner" role="alert">
            <span class="map-error-banner__icon">{"⚠️"}</span>
            <span class="map-error-banner__text">{ props.message.clone() }</span>
        </div>
    }
}
