pub use super::save::Entity as Save;
pub use super::solar_system::Entity as SolarSystem;
pub use super::star::Entity as Star;
