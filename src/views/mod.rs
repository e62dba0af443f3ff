pub mod appliances;
pub mod assistant;
pub mod predict;
pub mod shared;

pub use appliances::ApplianceView;
pub use assistant::AssistantView;
pub use predict::PredictView;
