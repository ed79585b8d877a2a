/// Something that can hand the dashboard a fresh garden.
pub trait GardenSource {
    fn next_garden(&mut self) -> Vec<i32>;
}
