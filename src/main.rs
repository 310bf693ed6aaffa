//! Carrom Life entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, PointerEvent};

    use carrom_life::Settings;
    use carrom_life::life::LifeState;
    use carrom_life::renderer::{Canvas2d, draw_carrom, draw_life};
    use carrom_life::sim::{self, CarromState};

    /// Carrom board bound to its canvas
    struct CarromView {
        state: CarromState,
        renderer: Canvas2d,
    }

    /// Game of Life grid bound to its canvas
    struct LifeView {
        state: LifeState,
        renderer: Canvas2d,
    }

    /// All page state, shared by the frame loop and event closures
    struct App {
        carrom: Option<CarromView>,
        life: Option<LifeView>,
    }

    impl App {
        fn frame(&mut self, time: f64) {
            if let Some(view) = self.carrom.as_mut() {
                sim::tick(&mut view.state);
                draw_carrom(&view.state, &mut view.renderer);
            }

            if let Some(view) = self.life.as_mut() {
                let stepped = view.state.advance(time);
                if view.state.take_dirty() || stepped {
                    draw_life(&view.state, &mut view.renderer);
                }
            }
        }
    }

    fn context_2d(canvas: &HtmlCanvasElement) -> CanvasRenderingContext2d {
        canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context")
    }

    fn find_canvas(id: &str) -> Option<HtmlCanvasElement> {
        let document = web_sys::window()?.document()?;
        document.get_element_by_id(id)?.dyn_into().ok()
    }

    fn setup_carrom(canvas: HtmlCanvasElement) -> CarromView {
        let window = web_sys::window().expect("no window");
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let settings = Settings::load(&canvas);
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let state = CarromState::new(&settings, Vec2::new(width as f32, height as f32), seed);

        CarromView {
            state,
            renderer: Canvas2d::new(context_2d(&canvas)),
        }
    }

    fn setup_life(canvas: HtmlCanvasElement) -> LifeView {
        let settings = Settings::load(&canvas);
        canvas.set_width(settings.life_width);
        canvas.set_height(settings.life_height);

        LifeView {
            state: LifeState::new(&settings),
            renderer: Canvas2d::new(context_2d(&canvas)),
        }
    }

    fn client_pos(event: &MouseEvent) -> Vec2 {
        Vec2::new(event.client_x() as f32, event.client_y() as f32)
    }

    fn offset_pos(event: &MouseEvent) -> Vec2 {
        Vec2::new(event.offset_x() as f32, event.offset_y() as f32)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Carrom Life starting...");

        let carrom_canvas = find_canvas("carrom");
        let life_canvas = find_canvas("life");
        if carrom_canvas.is_none() && life_canvas.is_none() {
            log::error!("No #carrom or #life canvas on the page");
            return;
        }

        let app = Rc::new(RefCell::new(App {
            carrom: carrom_canvas.clone().map(setup_carrom),
            life: life_canvas.clone().map(setup_life),
        }));

        if carrom_canvas.is_some() {
            setup_carrom_handlers(app.clone());
        }
        if let Some(canvas) = life_canvas {
            setup_life_handlers(&canvas, app.clone());
        }

        request_animation_frame(app);

        log::info!("Carrom Life running!");
    }

    fn setup_carrom_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");

        // Pointer move - trajectory preview follows the pointer
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                if let Some(view) = app.borrow_mut().carrom.as_mut() {
                    sim::pointer_move(&mut view.state, client_pos(&event));
                }
            });
            let _ = window
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer down - select bodies under the pointer
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                if let Some(view) = app.borrow_mut().carrom.as_mut() {
                    sim::pointer_down(&mut view.state, client_pos(&event));
                }
            });
            let _ = window
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer up - launch whatever was selected
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                if let Some(view) = app.borrow_mut().carrom.as_mut() {
                    sim::pointer_up(&mut view.state, client_pos(&event));
                }
            });
            let _ = window
                .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_life_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse down - stamp and start painting
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if let Some(view) = app.borrow_mut().life.as_mut() {
                    view.state.pointer_down(offset_pos(&event));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - paint while held
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if let Some(view) = app.borrow_mut().life.as_mut() {
                    view.state.pointer_move(offset_pos(&event));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                if let Some(view) = app.borrow_mut().life.as_mut() {
                    view.state.pointer_up();
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
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
    env_logger::init();
    log::info!("Carrom Life (native) starting...");
    log::info!("Native mode runs a headless demo - build for wasm32 to play in a browser");

    headless::run(carrom_life::Settings::load());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use carrom_life::Settings;
    use carrom_life::life::LifeState;
    use carrom_life::renderer::{Renderer, draw_carrom, draw_life};
    use carrom_life::sim::{self, CarromState};

    const BOARD: Vec2 = Vec2::new(1280.0, 720.0);
    const FRAMES: u32 = 600;
    /// 60 Hz display refresh
    const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Counts draw calls instead of drawing
    #[derive(Default)]
    struct DrawCounter {
        shapes: usize,
    }

    impl Renderer for DrawCounter {
        fn clear(&mut self, _size: Vec2) {}
        fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: &str) {
            self.shapes += 1;
        }
        fn stroke_circle(&mut self, _center: Vec2, _radius: f32, _color: &str) {
            self.shapes += 1;
        }
        fn line(&mut self, _from: Vec2, _to: Vec2, _color: &str) {
            self.shapes += 1;
        }
        fn cell(&mut self, _origin: Vec2, _size: f32, _fill: &str, _stroke: &str) {
            self.shapes += 1;
        }
    }

    pub fn run(settings: Settings) {
        let seed = settings.seed.unwrap_or(42);
        let mut carrom = CarromState::new(&settings, BOARD, seed);
        let mut life = LifeState::new(&settings);
        let mut counter = DrawCounter::default();

        // Flick the first body toward the center of the board
        if let Some(start) = carrom.bodies.first().map(|b| b.pos) {
            let release = start + (start - BOARD / 2.0).normalize_or_zero() * 150.0;
            sim::pointer_down(&mut carrom, start);
            sim::pointer_move(&mut carrom, release);
            sim::pointer_up(&mut carrom, release);
        }

        // Seed a few blocks in the middle of the grid
        let middle = Vec2::new(settings.life_width as f32, settings.life_height as f32) / 2.0;
        life.pointer_down(middle);
        life.pointer_move(middle + Vec2::new(settings.cell_size as f32 * 2.0, 0.0));
        life.pointer_up();

        for frame in 0..FRAMES {
            sim::tick(&mut carrom);
            draw_carrom(&carrom, &mut counter);

            let stepped = life.advance(frame as f64 * FRAME_MS);
            if life.take_dirty() || stepped {
                draw_life(&life, &mut counter);
            }
        }

        log::info!(
            "Carrom: {} frames, kinetic energy {:.3}, {} bodies held",
            carrom.frame,
            carrom.kinetic_energy(),
            carrom.dragging().count()
        );
        log::info!(
            "Life: {} generations, population {}",
            life.generation,
            life.grid.population()
        );
        log::info!("Issued {} draw calls", counter.shapes);
    }
}
