use std::cell::RefCell;
use wasm_bindgen::prelude::*;

pub mod error;
pub mod game;
pub mod settings;

use game::map;
use game::Game;
use settings::MapSettings;

thread_local! {
    static GAME: RefCell<Option<Game>> = RefCell::new(None);
}

fn with_game_mut<R>(f: impl FnOnce(&mut Game) -> R) -> Result<R, &'static str> {
    GAME.with(|cell| {
        let mut opt = cell.borrow_mut();
        match opt.as_mut() {
            Some(game) => Ok(f(game)),
            None => Err("game not initialized"),
        }
    })
}

fn install(game: error::Result<Game>) -> String {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    match game {
        Ok(game) => {
            let summary = format!("{} bodies", game.bodies().len());
            GAME.with(|g| {
                *g.borrow_mut() = Some(game);
            });
            summary
        }
        Err(e) => e.to_string(),
    }
}

#[wasm_bindgen]
pub fn init_game(seed: u64) -> String {
    install(Game::new(seed))
}

#[wasm_bindgen]
pub fn init_game_with_settings(seed: u64, settings_toml: &str) -> String {
    install(MapSettings::from_toml_str(settings_toml).and_then(|s| Game::with_settings(seed, s)))
}

#[wasm_bindgen]
pub fn tick() -> String {
    match with_game_mut(|game| game.tick().to_string()) {
        Ok(v) => v,
        Err(e) => e.to_string(),
    }
}

/// JSON `{"x":..,"y":..}` of where body `id` will be after `turns` turns.
#[wasm_bindgen]
pub fn next_position(id: u32, turns: u32) -> String {
    let predicted = with_game_mut(|game| game.predict_position(id, turns));
    match predicted {
        Ok(Some(point)) => serde_json::to_string(&point).unwrap_or_else(|_| "{}".to_string()),
        Ok(None) => format!("no body with id {id}"),
        Err(e) => e.to_string(),
    }
}

#[wasm_bindgen]
pub fn map_json() -> String {
    match with_game_mut(|game| map::map_json(game.bodies())) {
        Ok(v) => v,
        Err(e) => e.to_string(),
    }
}

#[wasm_bindgen]
pub fn generate_map(seed: u64) -> String {
    match map::map_from_seed(seed) {
        Ok(bodies) => map::map_json(&bodies),
        Err(e) => e.to_string(),
    }
}

#[wasm_bindgen]
pub fn map_report(seed: u64) -> String {
    map::map_report(seed)
}
