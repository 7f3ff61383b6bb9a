// ============================================================================
// USE MAP HOOK - Conecta el MapViewModel con el ciclo de vida de Yew
// ============================================================================
// mount en el primer render, unmount en el cleanup del effect
// ============================================================================

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use yew::prelude::*;
use crate::config::CONFIG;
use crate::maps::web::MapboxBackend;
use crate::maps::MapEventSink;
use crate::models::{Court, MapEvent};
use crate::services::CourtService;
use crate::viewmodels::{MapPhase, MapViewModel};

type SharedMapViewModel = Rc<RefCell<MapViewModel<MapboxBackend>>>;

/// Estado local del hook (lo que la vista observa)
#[derive(Clone, PartialEq)]
pub struct MapState {
    pub phase: MapPhase,
    pub error: Option<String>,
}

impl MapState {
    fn from_view_model(vm: &MapViewModel<MapboxBackend>) -> Self {
        Self {
            phase: vm.phase(),
            error: vm.error_message().map(str::to_string),
        }
    }
}

/// Handle del hook
#[derive(Clone)]
pub struct UseMapHandle {
    pub state: UseStateHandle<MapState>,
    pub container_id: String,
}

#[hook]
pub fn use_map() -> UseMapHandle {
    let state = use_state(|| MapState {
        phase: MapPhase::Uninitialized,
        error: None,
    });

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let courts = CourtService::bundled_courts().map(|courts| Rc::<[Court]>::from(courts.to_vec()));
            let vm: SharedMapViewModel = Rc::new(RefCell::new(MapViewModel::new(
                MapboxBackend,
                CONFIG.clone(),
                courts,
            )));

            let events = event_sink(Rc::downgrade(&vm), state.clone());
            {
                let mut vm = vm.borrow_mut();
                vm.mount(events);
                state.set(MapState::from_view_model(&vm));
            }

            move || {
                if let Ok(mut vm) = vm.try_borrow_mut() {
                    vm.unmount();
                }
            }
        });
    }

    UseMapHandle {
        state,
        container_id: CONFIG.map_config.container_id.clone(),
    }
}

/// Entrega eventos del widget al ViewModel y publica cambios de estado.
/// Guarda un Weak: el widget (dueño del sink) no mantiene vivo al ViewModel.
fn event_sink(vm: Weak<RefCell<MapViewModel<MapboxBackend>>>, state: UseStateHandle<MapState>) -> MapEventSink {
    Rc::new(move |event: MapEvent| {
        let Some(vm) = vm.upgrade() else {
            log::debug!("evento {} después de desmontar", event.name());
            return;
        };
        let Ok(mut vm) = vm.try_borrow_mut() else {
            log::warn!("⚠️ Evento {} descartado: ViewModel ocupado", event.name());
            return;
        };

        let before = MapState::from_view_model(&vm);
        vm.handle_event(event);
        let after = MapState::from_view_model(&vm);
        if after != before {
            state.set(after);
        }
    })
}
