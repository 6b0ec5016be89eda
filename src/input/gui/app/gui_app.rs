use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::{
    error::EventLoopError,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::Window,
};

use crate::core::actions::render_walk::{curve_animation::CurveAnimation, ports::tick_scheduler::TickOutcome};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

/// Winit application driving one animation tick per redraw.
///
/// While the curve is unfinished a redraw is requested every time the
/// event loop goes idle, so ticks follow the display refresh. Once it is
/// finished the window only redraws on demand.
pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    animation: CurveAnimation,
    egui_ctx: Context,
    egui_state: EguiWinitState,
    redraw_pending: bool,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        animation: CurveAnimation,
    ) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            window,
            presenter,
            animation,
            egui_ctx,
            egui_state,
            redraw_pending: true,
        }
    }

    fn tick(&mut self) {
        if self.animation.is_complete() {
            return;
        }

        if self.animation.tick(self.presenter.canvas_mut()) == TickOutcome::Complete {
            log::info!("Curve complete: {} segments", self.animation.drawn_segments());
            self.redraw_pending = true;
        }
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let iterations = self.animation.sequence().iterations();
        let drawn = self.animation.drawn_segments();
        let total = self.animation.total_segments();
        let render_speed = self.animation.render_speed();
        let status = if self.animation.is_complete() { "Done" } else { "Rendering..." };

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Dragon Curve")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(status);
                    ui.separator();
                    ui.label(format!("Iterations: {}", iterations));
                    ui.label(format!("Segments: {} / {}", drawn, total));
                    ui.label(format!("Render speed: {} segments/frame", render_speed));
                    ui.add(egui::ProgressBar::new(drawn as f32 / total as f32));
                });
        })
    }

    fn redraw(&mut self) -> Result<(), pixels::Error> {
        self.tick();

        let mut egui_output = self.update_ui();
        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state.handle_platform_output(self.window, platform_output);

        if egui_output.viewport_output.values().any(|v| v.repaint_delay.is_zero()) {
            self.redraw_pending = true;
        }

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    /// Runs the event loop. Does not return until the window is closed.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), EventLoopError> {
        let window = self.window;

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                if self.egui_state.on_window_event(window, event).repaint {
                    self.redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        log::info!(
                            "Window closed after {} of {} segments",
                            self.animation.drawn_segments(),
                            self.animation.total_segments()
                        );
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        if let Err(e) = self.redraw() {
                            log::error!("Render error: {e}");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        self.presenter.resize_surface(size.width, size.height);
                        self.redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        self.presenter.resize_surface(size.width, size.height);
                        self.redraw_pending = true;
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if self.redraw_pending || !self.animation.is_complete() {
                    self.redraw_pending = false;
                    window.request_redraw();
                }
            }
            _ => {}
        })
    }
}
