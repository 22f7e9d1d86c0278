//! Browser bindings for the Life simulation.
//!
//! Build with `wasm-pack build crates/life-web --target web --out-dir
//! ../../web/public/pkg`; the page served by `life-server` loads the
//! resulting module and drives it through [`Game`]:
//!
//! ```js
//! import init, { Game } from "./pkg/life_web.js";
//! await init();
//! const game = new Game("board", JSON.stringify({ fps: 12 }));
//! game.bind_controls("play", "pause", "restart");
//! ```

mod canvas;
mod session;

use std::rc::Rc;

use life_core::{Driver, GameConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

pub use canvas::CanvasSurface;
use session::Session;

/// Module start hook: installs the panic hook and announces itself.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    web_sys::console::log_1(&format!("life-web {} loaded", env!("CARGO_PKG_VERSION")).into());
}

/// One game session bound to a canvas element.
#[wasm_bindgen]
pub struct Game {
    session: Rc<Session>,
    controls: Vec<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl Game {
    /// Attach to the canvas with id `canvas_id`.
    ///
    /// `config_json` is an optional JSON object of game settings; missing
    /// fields take their defaults. The board is sized from the canvas and
    /// its first generation is drawn immediately.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: Option<String>) -> Result<Game, JsValue> {
        let config = match config_json.as_deref() {
            Some(json) => GameConfig::from_json(json),
            None => Ok(GameConfig::default()),
        }
        .map_err(to_js)?;

        let canvas = document()?
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{canvas_id}'")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(JsValue::from)?;

        let layout = config.layout(canvas.width(), canvas.height()).map_err(to_js)?;
        let surface = CanvasSurface::new(&canvas)?;
        let rng = StdRng::seed_from_u64(entropy_seed());
        let driver = Driver::new(&config, layout, surface, rng);

        Ok(Self {
            session: Session::new(driver),
            controls: Vec::new(),
        })
    }

    /// Start advancing generations.
    pub fn play(&self) -> Result<(), JsValue> {
        self.session.play()
    }

    /// Stop advancing generations.
    pub fn pause(&self) -> Result<(), JsValue> {
        self.session.pause()
    }

    /// Stop, then draw a freshly seeded board in place of the current one.
    pub fn restart(&self) -> Result<(), JsValue> {
        self.session.restart()
    }

    /// Whether generations are advancing.
    #[wasm_bindgen(getter)]
    pub fn playing(&self) -> bool {
        self.session.is_playing()
    }

    /// Generations since the last restart, saturating at `u32::MAX`.
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u32 {
        u32::try_from(self.session.generation()).unwrap_or(u32::MAX)
    }

    /// Wire the play, pause and restart buttons by element id.
    pub fn bind_controls(
        &mut self,
        play_id: &str,
        pause_id: &str,
        restart_id: &str,
    ) -> Result<(), JsValue> {
        self.bind(play_id, Session::play)?;
        self.bind(pause_id, Session::pause)?;
        self.bind(restart_id, Session::restart)?;
        Ok(())
    }
}

impl Game {
    fn bind(&mut self, id: &str, action: fn(&Session) -> Result<(), JsValue>) -> Result<(), JsValue> {
        let button = document()?
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{id}'")))?;
        let session = Rc::clone(&self.session);
        let handler = Closure::<dyn FnMut()>::new(move || {
            if let Err(e) = action(&session) {
                web_sys::console::error_1(&e);
            }
        });
        button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        self.controls.push(handler);
        Ok(())
    }
}

fn document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no global document"))
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Seed for the board RNG, mixed from `Math.random` and the clock.
fn entropy_seed() -> u64 {
    js_sys::Math::random().to_bits() ^ js_sys::Date::now().to_bits().rotate_left(17)
}
