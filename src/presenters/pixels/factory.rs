use winit::window::Window;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Default)]
pub struct PixelsPresenterFactory {}

impl PixelsPresenterFactory {
    pub fn new() -> Self {
        Self {}
    }
}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(&self, window: &'static Window, canvas: PixelBuffer) -> Result<PixelsPresenter, pixels::Error> {
        PixelsPresenter::new(window, canvas)
    }
}
