// ============================================================================
// MAP VIEW - Superficie del mapa + banner de error condicional
// ============================================================================

use yew::prelude::*;
use crate::hooks::use_map;
use crate::viewmodels::MapPhase;
use super::ErrorBanner;

#[function_component(MapView)]
pub fn map_view() -> Html {
    let map_handle = use_map();
    let state = (*map_handle.state).clone();

    let wrapper_class = classes!(
        "map-wrapper",
        (state.phase == MapPhase::Initializing).then_some("map-wrapper--loading")
    );

    html! {
        <div class={wrapper_class}>
            <div id={map_handle.container_id.clone()} class="map-container"></div>
            {
                match state.error {
                    Some(message) => html! { <ErrorBanner {message} /> },
                    None => html! {},
                }
            }
        </div>
    }
}
