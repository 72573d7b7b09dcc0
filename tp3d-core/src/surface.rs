/// Drawing-surface abstraction consumed by the frame pipeline.
///
/// Models a 2D path-drawing surface: the pipeline draws each visible
/// triangle by tracing a three-point path in pixel coordinates, then
/// filling and outlining it. Colors are `#rrggbb` strings.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Erase the whole surface at the start of a frame
    fn clear(&mut self);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn set_fill(&mut self, color: &str);
    fn set_stroke(&mut self, color: &str);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);
}
