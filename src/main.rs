//! Gapflap entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, HtmlImageElement};

    use gapflap::Settings;
    use gapflap::renderer::{CanvasSurface, Sprites, draw_frame};
    use gapflap::sim::{GameState, TickInput, resolve, step};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        surface: CanvasSurface,
        sprites: Sprites<HtmlImageElement>,
        input: TickInput,
        start_screen: Option<HtmlElement>,
    }

    impl Game {
        /// One display refresh: move, draw, then check collisions
        fn frame(&mut self) {
            let input = self.input.clone();
            let mut events = step(&mut self.state, &input);
            draw_frame(&mut self.surface, &self.state, &self.sprites, &self.settings);
            resolve(&mut self.state, &mut events);

            // Clear one-shot inputs after processing
            self.input.flap = false;

            if events.started {
                self.set_start_screen_visible(false);
            }
            if events.crashed {
                self.set_start_screen_visible(true);
            }
        }

        fn set_start_screen_visible(&self, visible: bool) {
            if let Some(ref el) = self.start_screen {
                let display = if visible { "flex" } else { "none" };
                let _ = el.style().set_property("display", display);
            }
        }
    }

    fn load_image(src: &str) -> HtmlImageElement {
        let image = HtmlImageElement::new().expect("failed to create image");
        image.set_src(src);
        image
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Gapflap starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let settings = Settings::load();
        let tuning = settings.tuning.clone();

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(tuning.screen_width as u32);
        canvas.set_height(tuning.screen_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let sprites = Sprites {
            avatar: load_image("bird.gif"),
            pipe_top: load_image("pipeTop.png"),
            pipe_bottom: load_image("pipeBottom.png"),
            pipe_fill: load_image("pipeBottom.png"),
        };

        let start_screen = document
            .get_element_by_id("startScreen")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        let seed = settings.resolve_seed(js_sys::Date::now() as u64);
        let game = Rc::new(RefCell::new(Game {
            state: GameState::with_tuning(seed, tuning),
            settings,
            surface: CanvasSurface::new(ctx),
            sprites,
            input: TickInput::default(),
            start_screen,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Gapflap running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "Space" => {
                        event.prevent_default();
                        g.input.flap = true;
                    }
                    "KeyA" => {
                        g.input.autopilot = !g.input.autopilot;
                        log::info!("Autopilot: {}", g.input.autopilot);
                    }
                    _ => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Start button
        if let Some(btn) = document.get_element_by_id("startButton") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().input.flap = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();

        // Keep the loop alive in every phase
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use anyhow::Context;
    use clap::Parser;

    use gapflap::Settings;
    use gapflap::sim::{GameState, TickInput, tick};

    /// Run the simulation without a display and report how it went
    #[derive(Debug, Parser)]
    #[command(name = "gapflap", version, about)]
    pub struct Args {
        /// Number of ticks to simulate
        #[arg(long, default_value_t = 3600)]
        pub ticks: u64,
        /// RNG seed (overrides the settings file)
        #[arg(long)]
        pub seed: Option<u64>,
        /// Settings JSON file
        #[arg(long)]
        pub config: Option<PathBuf>,
        /// Let the demo pilot fly; otherwise the avatar flaps once and falls
        #[arg(long)]
        pub autopilot: bool,
    }

    #[derive(Debug, Default)]
    pub struct Summary {
        pub runs: u32,
        pub crashes: u32,
        pub obstacles_cleared: u32,
        pub longest_run: u64,
    }

    pub fn run(args: &Args) -> anyhow::Result<Summary> {
        let settings = match &args.config {
            Some(path) => Settings::load_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => Settings::default(),
        };

        let clock_seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        let seed = args.seed.unwrap_or(settings.resolve_seed(clock_seed));
        log::info!("Simulating {} ticks with seed {}", args.ticks, seed);

        let mut state = GameState::with_tuning(seed, settings.tuning);
        let mut summary = Summary::default();

        for i in 0..args.ticks {
            let input = TickInput {
                flap: i == 0,
                autopilot: args.autopilot,
            };
            let events = tick(&mut state, &input);

            if events.started {
                summary.runs += 1;
            }
            if events.retired.is_some() {
                summary.obstacles_cleared += 1;
            }
            if events.crashed {
                summary.crashes += 1;
            }
            summary.longest_run = summary.longest_run.max(state.frame);
        }

        Ok(summary)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::init();
    let args = headless::Args::parse();
    let summary = headless::run(&args)?;

    println!("runs:              {}", summary.runs);
    println!("crashes:           {}", summary.crashes);
    println!("obstacles cleared: {}", summary.obstacles_cleared);
    println!("longest run:       {} ticks", summary.longest_run);
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::headless::{Args, run};

    #[test]
    fn test_single_flap_crashes_into_first_obstacle() {
        // Resting on the floor is never inside a gap, so the first obstacle
        // always ends the run, whatever the seed
        let args = Args {
            ticks: 600,
            seed: Some(11),
            config: None,
            autopilot: false,
        };
        let summary = run(&args).unwrap();

        assert_eq!(summary.runs, 1);
        assert_eq!(summary.crashes, 1);
        assert_eq!(summary.obstacles_cleared, 0);
        assert!(summary.longest_run > 100 && summary.longest_run < 200);
    }

    #[test]
    fn test_autopilot_keeps_playing() {
        let args = Args {
            ticks: 2000,
            seed: Some(4),
            config: None,
            autopilot: true,
        };
        let summary = run(&args).unwrap();

        // The pilot restarts after every crash
        assert!(summary.runs >= 1);
        assert!(summary.runs >= summary.crashes);
        assert!(summary.runs - summary.crashes <= 1);
    }
}
