pub mod preset;
pub mod random;
pub mod traits;

pub use preset::PresetGarden;
pub use random::RandomGarden;
pub use traits::GardenSource;
