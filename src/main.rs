//! Stellar Quiz entry point
//!
//! Wasm: sets up the canvas, input handlers, and the frame loop.
//! Native: runs a headless demo session against the embedded question table.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Embedded question table; columns `question,A,B,C,D,answer[,feedback]`
const QUESTION_TABLE: &str = include_str!("../assets/questions.csv");

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use stellar_quiz::consts::*;
    use stellar_quiz::quiz;
    use stellar_quiz::render::Renderer;
    use stellar_quiz::settings::Settings;
    use stellar_quiz::sim::{GameState, TickInput, tick};
    use stellar_quiz::ui::Layout;

    /// App instance holding all state
    struct App {
        state: GameState,
        layout: Layout,
        input: TickInput,
        renderer: Renderer,
        settings: Settings,
        accumulator: f32,
        last_time: f64,
    }

    impl App {
        /// Run fixed-rate ticks for the elapsed frame time
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
                let input = self.input;
                tick(&mut self.state, &input, &self.layout);
                // a click applies to exactly one tick
                self.input.click = None;
                self.accumulator -= TICK_DT;
                substeps += 1;
            }
        }

        fn render(&self) {
            self.renderer.draw(&self.state, &self.layout, &self.settings);
        }

        /// Rebuild geometry and the particle field for a new canvas size
        fn resize(&mut self, width: f32, height: f32) {
            self.layout = Layout::compute(width, height);
            self.state.reset_particles(width, height, &self.settings);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Stellar Quiz starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = match document.get_element_by_id("canvas") {
            Some(el) => el.dyn_into().expect("not a canvas"),
            None => {
                let c: HtmlCanvasElement = document
                    .create_element("canvas")
                    .expect("create canvas")
                    .dyn_into()
                    .expect("not a canvas");
                c.set_id("canvas");
                let _ = c.set_attribute(
                    "style",
                    "position:fixed; left:0; top:0; width:100%; height:100%; display:block;",
                );
                document
                    .body()
                    .expect("no body")
                    .append_child(&c)
                    .expect("append canvas");
                c
            }
        };

        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0) as f32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0) as f32;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let pool = quiz::parse_table(super::QUESTION_TABLE);
        log::info!("Loaded {} questions", pool.len());

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        log::info!("Session seed: {}", seed);

        let renderer = Renderer::new(&canvas).expect("Failed to create renderer");
        let app = Rc::new(RefCell::new(App {
            state: GameState::new(seed, pool, &settings, width, height),
            layout: Layout::compute(width, height),
            input: TickInput::default(),
            renderer,
            settings,
            accumulator: 0.0,
            last_time: 0.0,
        }));

        setup_input_handlers(&canvas, app.clone());
        setup_resize_handler(&canvas, app.clone());

        request_animation_frame(app);

        log::info!("Stellar Quiz running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse move - track the cursor for hover styling
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                a.input.cursor = Some(Vec2::new(event.offset_x() as f32, event.offset_y() as f32));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let p = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                let mut a = app.borrow_mut();
                a.input.cursor = Some(p);
                a.input.click = Some(p);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch tap
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let p = Vec2::new(
                        touch.client_x() as f32 - rect.left() as f32,
                        touch.client_y() as f32 - rect.top() as f32,
                    );
                    let mut a = app.borrow_mut();
                    a.input.cursor = Some(p);
                    a.input.click = Some(p);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let width = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(800.0) as f32;
            let height = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(600.0) as f32;
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            app.borrow_mut().resize(width, height);
            log::info!("Resized to {}x{}", width as u32, height as u32);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            frame(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                TICK_DT
            };
            a.last_time = time;

            a.update(dt);
            a.render();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use stellar_quiz::quiz;
    use stellar_quiz::settings::Settings;
    use stellar_quiz::sim::{GameState, Phase, TickInput, tick};
    use stellar_quiz::ui::Layout;

    env_logger::init();
    log::info!("Stellar Quiz (native) starting...");

    let pool = quiz::parse_table(QUESTION_TABLE);
    log::info!("Loaded {} questions", pool.len());

    // Headless demo session: always picks option A, then reports the summary.
    let layout = Layout::compute(1280.0, 720.0);
    let settings = Settings::default();
    let mut state = GameState::new(0xC0FFEE, pool, &settings, layout.width, layout.height);

    let click = |p: Vec2| TickInput {
        cursor: Some(p),
        click: Some(p),
    };

    tick(&mut state, &click(layout.start.shape.center()), &layout);

    let mut guard = 0u32;
    while state.phase != Phase::Result {
        let input = match state.phase {
            Phase::Question => click(layout.answer_center(stellar_quiz::OptionKey::A)),
            _ => TickInput::default(),
        };
        tick(&mut state, &input, &layout);

        guard += 1;
        if guard > 10_000 {
            log::error!("Demo session failed to finish");
            return;
        }
    }

    log::info!(
        "Demo session finished: {}/{} correct ({}%) - {}",
        state.score,
        state.total(),
        state.percent(),
        state.result_message()
    );
    log::info!("Run with `trunk serve` for the browser version");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
