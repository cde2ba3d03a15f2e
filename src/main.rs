//! Cue Toy entry point
//!
//! Drives the simulation once per frame: a canvas front end in the browser,
//! a scripted headless run natively.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use cue_toy::SimConfig;
    use cue_toy::renderer::{RenderSink, render_frame};
    use cue_toy::sim::{Color, SimState, TickInput, tick};

    /// Canvas-backed render sink
    struct CanvasSink<'a> {
        ctx: &'a CanvasRenderingContext2d,
    }

    impl RenderSink for CanvasSink<'_> {
        fn disc(&mut self, center: Vec2, radius: f32, color: Color) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.fill();
            self.ctx.close_path();
        }

        fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
            self.ctx.set_stroke_style_str(&color.to_css());
            self.ctx.begin_path();
            self.ctx.move_to(from.x as f64, from.y as f64);
            self.ctx.line_to(to.x as f64, to.y as f64);
            self.ctx.stroke();
            self.ctx.close_path();
        }
    }

    /// Game instance holding all state
    struct Game {
        state: SimState,
        input: TickInput,
        ctx: CanvasRenderingContext2d,
    }

    impl Game {
        fn new(config: SimConfig, ctx: CanvasRenderingContext2d) -> Self {
            Self {
                state: SimState::new(config),
                input: TickInput::default(),
                ctx,
            }
        }

        /// Advance one frame and clear one-shot inputs
        fn update(&mut self) {
            tick(&mut self.state, &self.input);
            self.input.press = false;
            self.input.release = false;
        }

        fn render(&self) {
            let arena = self.state.arena();
            self.ctx
                .clear_rect(0.0, 0.0, arena.x as f64, arena.y as f64);
            render_frame(&self.state, &mut CanvasSink { ctx: &self.ctx });
        }
    }

    /// Mouse position in arena space
    fn arena_pos(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(
            (event.client_x() as f64 - rect.x()) as f32,
            (event.client_y() as f64 - rect.y()) as f32,
        )
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no #canvas element")?
            .dyn_into()?;

        let config = SimConfig::default().with_seed(js_sys::Date::now() as u64);
        canvas.set_width(config.width as u32);
        canvas.set_height(config.height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let game = Rc::new(RefCell::new(Game::new(config, ctx)));
        setup_input(&window, &canvas, game.clone())?;
        start_loop(game);

        log::info!("Cue Toy started");
        Ok(())
    }

    fn setup_input(
        window: &web_sys::Window,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Mouse move
        {
            let game = game.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().input.pointer = Some(arena_pos(&canvas, &event));
            });
            window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.press = true;
            });
            window.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse up / leaving the page both release the cue
        for event_name in ["mouseup", "mouseout"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.release = true;
            });
            window.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(f: &Closure<dyn FnMut()>) {
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(f.as_ref().unchecked_ref());
        }
    }

    fn start_loop(game: Rc<RefCell<Game>>) {
        let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();

        *g.borrow_mut() = Some(Closure::new(move || {
            {
                let mut game = game.borrow_mut();
                game.update();
                game.render();
            }
            if let Some(cb) = f.borrow().as_ref() {
                request_animation_frame(cb);
            }
        }));

        if let Some(cb) = g.borrow().as_ref() {
            request_animation_frame(cb);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use cue_toy::renderer::{VertexSink, render_frame};
    use cue_toy::sim::{SimState, TickInput, tick};
    use cue_toy::{ConfigError, SimConfig};

    /// Frames simulated after the shot
    const RUN_FRAMES: u32 = 600;

    /// Load config from an optional JSON file path
    pub fn load_config(path: Option<&str>) -> Result<SimConfig, String> {
        let Some(path) = path else {
            return Ok(SimConfig::default());
        };
        let json = std::fs::read_to_string(path).map_err(|e| format!("reading {path}: {e}"))?;
        SimConfig::from_json(&json).map_err(|e: ConfigError| format!("{path}: {e}"))
    }

    /// Grab the cue, pull it back, let go, and watch the table settle
    pub fn run(config: SimConfig) -> Result<(), ConfigError> {
        let origin = config.origin;
        let mut state = SimState::try_new(config)?;

        let script = [
            TickInput {
                pointer: Some(origin),
                press: true,
                ..Default::default()
            },
            TickInput {
                pointer: Some(origin + Vec2::new(-20.0, 60.0)),
                ..Default::default()
            },
            TickInput {
                release: true,
                ..Default::default()
            },
        ];

        let mut cue_hits = 0;
        let mut pair_hits = 0;
        let mut wall_hits = 0;
        let mut resets = 0;

        let idle = TickInput::default();
        for input in script.iter().chain(std::iter::repeat_n(&idle, RUN_FRAMES as usize)) {
            let report = tick(&mut state, input);
            if let Some(vel) = report.shot {
                log::info!("Launched cue at {vel}");
            }
            cue_hits += report.collisions.cue_hits;
            pair_hits += report.collisions.pair_hits;
            wall_hits += report.wall_hits;
            resets += u32::from(report.cue_reset);
        }

        let mut sink = VertexSink::new();
        render_frame(&state, &mut sink);

        log::info!(
            "{} frames: {cue_hits} cue hits, {pair_hits} pair hits, {wall_hits} wall hits, \
             {resets} cue resets",
            state.frame
        );
        log::info!(
            "Table speed {:.3}, last frame {} vertices ({} bytes)",
            state.total_speed(),
            sink.vertex_count(),
            sink.as_bytes().len()
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Cue Toy (native) starting...");

    let path = std::env::args().nth(1);
    let outcome = headless::load_config(path.as_deref())
        .and_then(|config| headless::run(config).map_err(|e| e.to_string()));
    if let Err(e) = outcome {
        log::error!("Invalid config: {e}");
        std::process::exit(1);
    }
}
