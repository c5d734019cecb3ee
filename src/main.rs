//! Minimal windowed host for the arcball controller.
//!
//! Opens a window, forwards pointer, wheel, resize and key events through an
//! [`InputProcessor`] into an [`ArcballController`] and logs the resulting
//! eye position. Rendering is left to real hosts.
//!
//! Usage: `arcball-viewer [options.toml]`

use std::{path::Path, sync::Arc};

use arcball::{
    camera::ArcballController,
    input::{InputEvent, InputProcessor},
    options::Options,
};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

/// Pixels per wheel "line" for touchpads reporting pixel deltas.
const PIXELS_PER_LINE: f32 = 100.0;

struct ViewerApp {
    options: Options,
    window: Option<Arc<Window>>,
    controller: Option<ArcballController>,
    input: InputProcessor,
}

impl ViewerApp {
    fn new(options: Options) -> Self {
        let input = InputProcessor::from_options(&options);
        Self {
            options,
            window: None,
            controller: None,
            input,
        }
    }

    fn dispatch(&mut self, event: InputEvent) {
        let Some(controller) = &mut self.controller else {
            return;
        };
        let Some(cmd) = self.input.handle_event(event) else {
            return;
        };
        controller.execute(cmd);
        log::trace!("{cmd:?} -> eye {}", controller.eye());
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Arcball")
            .with_inner_size(winit::dpi::LogicalSize::new(800, 600));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        match ArcballController::from_options(
            &self.options.camera,
            size.width as f32,
            size.height as f32,
        ) {
            Ok(controller) => {
                log::info!("arcball ready, eye at {}", controller.eye());
                self.controller = Some(controller);
            }
            Err(e) => {
                log::error!("{e}");
                event_loop.exit();
                return;
            }
        }
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                // Minimized windows report 0x0; the controller ignores it.
                self.dispatch(InputEvent::Resized {
                    width: size.width as f32,
                    height: size.height as f32,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.dispatch(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let pressed = state == ElementState::Pressed;
                self.dispatch(InputEvent::MouseButton {
                    button: button.into(),
                    pressed,
                });
                if !pressed {
                    if let Some(controller) = &self.controller {
                        log::info!(
                            "eye {} distance {:.3}",
                            controller.eye(),
                            controller.distance()
                        );
                    }
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => {
                        pos.y as f32 / PIXELS_PER_LINE
                    }
                };
                self.dispatch(InputEvent::Scroll { delta });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if let PhysicalKey::Code(code) = event.physical_key {
                    let key_str = format!("{code:?}");
                    if let (Some(cmd), Some(controller)) = (
                        self.input.handle_key_press(&key_str),
                        &mut self.controller,
                    ) {
                        controller.execute(cmd);
                        log::info!("{cmd:?}, eye {}", controller.eye());
                    }
                }
            }

            _ => (),
        }
    }
}

fn load_options() -> Options {
    let Some(arg) = std::env::args().nth(1) else {
        return Options::default();
    };
    match Options::load(Path::new(&arg)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}; falling back to defaults");
            Options::default()
        }
    }
}

fn main() {
    env_logger::init();

    let mut app = ViewerApp::new(load_options());

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Wait);

    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("event loop error: {e}");
        std::process::exit(1);
    }
}
