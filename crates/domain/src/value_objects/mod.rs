//! Value Objects - Immutable, identity-less domain primitives

mod city_name;
mod condition_label;
mod humidity;

pub use city_name::CityName;
pub use condition_label::ConditionLabel;
pub use humidity::{Humidity, InvalidHumidity};
