//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather client behind the [`WeatherProvider`] seam
//! - City resolution, current-conditions presentation and asset selection
//! - The screen pipeline that renders the latest query and drops stale ones
//!
//! It is used by `cityweather-cli`, but can also be reused by other binaries or services.

pub mod assets;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod presenter;
pub mod provider;
pub mod resolver;
pub mod screen;
pub mod view;

pub use assets::{AssetSelection, BackgroundAsset, Category, ForegroundAsset, select_assets};
pub use config::{Config, Endpoints};
pub use error::{Endpoint, LookupError, TransportCause};
pub use format::format_epoch_seconds;
pub use model::{Condition, Coordinate, GeocodeMatch, WeatherSnapshot};
pub use presenter::{Presentation, present};
pub use provider::{OpenWeatherClient, WeatherProvider};
pub use resolver::resolve;
pub use screen::{RenderSink, SearchOutcome, WeatherScreen};
pub use view::WeatherView;
