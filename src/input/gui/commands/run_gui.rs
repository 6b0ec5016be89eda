use std::error::Error;
use std::marker::PhantomData;

use winit::{dpi::LogicalSize, event_loop::EventLoop, window::{Window, WindowBuilder}};

use crate::core::actions::rasterize::rasterize_segments::rasterize_segments_rayon;
use crate::core::actions::render_walk::curve_animation::CurveAnimation;
use crate::core::actions::walk_path::trace_path::trace_path;
use crate::core::fractals::dragon::{algorithm::generate_turn_sequence, dragon_config::DragonConfig};
use crate::input::gui::{
    app::{gui_app::GuiApp, ports::presenter::GuiPresenterPort},
    commands::ports::presenter_factory::GuiPresenterFactoryPort,
};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: DragonConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: DragonConfig) -> Self {
        Self { presenter_factory, config, _phantom: PhantomData }
    }

    /// Opens the window and animates the curve until the window is closed.
    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let config = self.config;
        config.validate()?;

        let sequence = generate_turn_sequence(config.iterations)?;
        log::info!("Iterations: {} ({} turns)", config.iterations, sequence.len());

        let mut canvas = config.blank_canvas()?;
        let trace = trace_path(&sequence, config.start, config.segment_length, config.initial_facing);
        rasterize_segments_rayon(&mut canvas, &trace, config.trace_style);

        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Dragon Curve")
                .with_inner_size(LogicalSize::new(f64::from(config.width), f64::from(config.height)))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window, canvas)?;
        let animation = CurveAnimation::from_config(sequence, &config);
        let app = GuiApp::new(window, &event_loop, presenter, animation);

        app.run(event_loop)?;

        Ok(())
    }
}
