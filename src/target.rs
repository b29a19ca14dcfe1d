/// Something that can show an image given its location.
pub trait DisplayTarget {
    fn set_image(&mut self, location: &str);
}

/// Host facility that finds a display target by its identifier.
///
/// Consulted on every tick, so targets may come and go between ticks.
pub trait TargetLookup {
    fn find_target(&mut self, id: &str) -> Option<&mut dyn DisplayTarget>;
}
