use egui::Context as EguiContext;

use crate::core::data::pixel_buffer::PixelBuffer;

pub trait GuiPresenterPort {
    /// Off-screen canvas the animation draws into.
    fn canvas_mut(&mut self) -> &mut PixelBuffer;
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;
    fn resize_surface(&mut self, width: u32, height: u32);
}
