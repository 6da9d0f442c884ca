//! Ports - Interfaces the application depends on
//!
//! Implemented by infrastructure adapters (provider client, asset table) and
//! by the presentation layer (sound output).

mod ambient_sound_port;
mod condition_assets_port;
mod weather_port;

#[cfg(test)]
pub use ambient_sound_port::MockAmbientSoundPort;
pub use ambient_sound_port::AmbientSoundPort;
#[cfg(test)]
pub use condition_assets_port::MockConditionAssetsPort;
pub use condition_assets_port::{ConditionAssets, ConditionAssetsPort};
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
