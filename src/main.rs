//! Moonhop entry point
//!
//! Wires the simulation to the browser: canvas surface, DOM input
//! handlers, and a requestAnimationFrame loop whose pending request is
//! cancelled on teardown so no stray tick fires after stop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use glam::Vec2;
    use moonhop::consts::*;
    use moonhop::render::CanvasSurface;
    use moonhop::score_history::ScoreHistory;
    use moonhop::sim::{GamePhase, GameState, Services, TickInput, render_frame, tick};
    use moonhop::wallet::LivesWallet;
    use moonhop::{Controller, Key, WalletStatus};

    /// Game instance holding all per-session state
    struct Game {
        state: GameState,
        controller: Controller,
        wallet: LivesWallet,
        history: ScoreHistory,
        surface: CanvasSurface,
        /// Cached wallet flags shown on the menu; refreshed at phase
        /// boundaries, never queried mid-frame
        wallet_status: WalletStatus,
        last_phase: GamePhase,
        start_was_held: bool,
        last_timestamp: f64,
        fps: u32,
    }

    impl Game {
        fn new(surface: CanvasSurface) -> Self {
            let wallet = LivesWallet::load();
            let wallet_status = wallet.status();
            Self {
                state: GameState::new(),
                controller: Controller::new(),
                wallet,
                history: ScoreHistory::load(),
                surface,
                wallet_status,
                last_phase: GamePhase::Menu,
                start_was_held: false,
                last_timestamp: 0.0,
                fps: 0,
            }
        }

        /// One frame: elapsed time, input snapshot, tick, draw
        fn frame(&mut self, time: f64) {
            let dt_ms = if self.last_timestamp > 0.0 {
                (time - self.last_timestamp) as f32
            } else {
                0.0
            };
            self.last_timestamp = time;
            if dt_ms > 0.0 {
                self.fps = (1000.0 / dt_ms).round() as u32;
            }

            let start_held = self
                .controller
                .any_pressed(&[Key::Enter, Key::Space]);
            let input = TickInput {
                steer_left: self.controller.any_pressed(&[Key::Left, Key::A]),
                steer_right: self.controller.any_pressed(&[Key::Right, Key::D]),
                start: start_held && !self.start_was_held,
                // The pending click is consumed here, exactly once per tick
                click: self.controller.take_click(),
                wallet: self.wallet_status,
            };
            self.start_was_held = start_held;

            let mut services = Services {
                wallet: &mut self.wallet,
                scores: &mut self.history,
            };
            tick(&mut self.state, &input, &mut services, dt_ms);

            // Credit state can change at every transition (a life was
            // spent, a top-up landed); refresh the menu snapshot there
            if self.state.phase != self.last_phase {
                self.wallet_status = self.wallet.status();
                self.last_phase = self.state.phase;
            }

            render_frame(
                &self.state,
                self.wallet_status,
                &mut self.surface,
                Some(self.fps),
            );
        }
    }

    /// Owns the pending frame request. `stop` cancels it and drops the
    /// callback, guaranteeing no tick fires after teardown.
    struct FrameLoop {
        handle: Rc<RefCell<Option<i32>>>,
        callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
    }

    impl FrameLoop {
        fn start(game: Rc<RefCell<Game>>) -> Self {
            let handle: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
            let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                Rc::new(RefCell::new(None));

            let handle_inner = handle.clone();
            let callback_inner = callback.clone();
            *callback.borrow_mut() = Some(Closure::new(move |time: f64| {
                game.borrow_mut().frame(time);

                // Re-arm unconditionally unless stopped: overlays keep
                // animating while the simulation is frozen
                if handle_inner.borrow().is_some() {
                    let id = request_frame(callback_inner.borrow().as_ref().unwrap());
                    *handle_inner.borrow_mut() = Some(id);
                }
            }));

            let id = request_frame(callback.borrow().as_ref().unwrap());
            *handle.borrow_mut() = Some(id);

            Self { handle, callback }
        }

        fn stop(&self) {
            if let Some(id) = self.handle.borrow_mut().take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(id);
                }
                log::info!("frame loop stopped");
            }
            self.callback.borrow_mut().take();
        }
    }

    fn request_frame(callback: &Closure<dyn FnMut(f64)>) -> i32 {
        web_sys::window()
            .expect("no window")
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .expect("requestAnimationFrame failed")
    }

    thread_local! {
        static FRAME_LOOP: RefCell<Option<FrameLoop>> = const { RefCell::new(None) };
    }

    /// Stop the loop and cancel the pending frame request
    pub fn shutdown() {
        FRAME_LOOP.with(|slot| {
            if let Some(frame_loop) = slot.borrow_mut().take() {
                frame_loop.stop();
            }
        });
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Moonhop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(GAME_WIDTH as u32);
        canvas.set_height(GAME_HEIGHT as u32);

        let ctx = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let game = Rc::new(RefCell::new(Game::new(CanvasSurface::new(ctx))));

        setup_input_handlers(&canvas, game.clone());

        let frame_loop = FrameLoop::start(game);
        FRAME_LOOP.with(|slot| *slot.borrow_mut() = Some(frame_loop));

        log::info!("Moonhop running");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Keyboard: unmapped codes fall through untouched so the browser
        // keeps its defaults for keys the game does not use
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mapped = game.borrow_mut().controller.key_down(&event.code());
                if mapped {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().controller.key_up(&event.code());
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer: the menu reacts to clicks only, so there is no
        // hover tracking
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                game.borrow_mut().controller.record_click(pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Cancel the pending frame request and tear the loop down
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn stop_game() {
    wasm_game::shutdown();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use moonhop::render::NullSurface;
    use moonhop::services::FreePlay;
    use moonhop::sim::{GamePhase, GameState, Services, TickInput, render_frame, tick};

    env_logger::init();
    log::info!("Moonhop (native) starting - headless demo run");

    let mut state = GameState::new();
    let mut gate = FreePlay;
    let mut sink = FreePlay;
    let mut surface = NullSurface;

    // Start a run, then simulate ~60 fps frames until it ends
    let start = TickInput {
        start: true,
        wallet: moonhop::WalletStatus {
            can_play: true,
            unlimited_plays: true,
            lives: None,
        },
        ..Default::default()
    };
    {
        let mut services = Services {
            wallet: &mut gate,
            scores: &mut sink,
        };
        tick(&mut state, &start, &mut services, 16.0);
    }

    let mut frames = 0u32;
    while state.phase == GamePhase::Playing && frames < 100_000 {
        let mut services = Services {
            wallet: &mut gate,
            scores: &mut sink,
        };
        tick(&mut state, &TickInput::default(), &mut services, 16.0);
        render_frame(&state, start.wallet, &mut surface, None);
        frames += 1;
    }

    println!(
        "Run over after {} frames: {} points",
        frames,
        state.scoreboard.total_points()
    );
}
