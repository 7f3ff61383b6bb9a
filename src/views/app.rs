// ============================================================================
// APP VIEW - Componente raíz
// ============================================================================

use yew::prelude::*;
use super::MapView;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <main class="app">
            <MapView />
        </main>
    }
}
