use cityweather_core::{RenderSink, WeatherView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Prints rendered views to stdout and notifications to stderr.
#[derive(Debug)]
pub struct TerminalSink {
    format: OutputFormat,
}

impl TerminalSink {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl RenderSink for TerminalSink {
    fn render(&self, view: &WeatherView) {
        match self.format {
            OutputFormat::Text => print!("{}", text_block(view)),
            OutputFormat::Json => match serde_json::to_string_pretty(view) {
                Ok(json) => println!("{json}"),
                Err(e) => tracing::error!("Failed to encode view as JSON: {e}"),
            },
        }
    }

    fn notify(&self, message: &str) {
        eprintln!("! {message}");
    }
}

fn text_block(view: &WeatherView) -> String {
    let scene = match (view.foreground, view.background) {
        (Some(fg), Some(bg)) => format!("{fg} on {bg}"),
        _ => "N/A".to_string(),
    };

    let rows = [
        ("Temperature", view.temperature.clone()),
        ("Real feel", view.feels_like.clone()),
        ("Min / Max", format!("{} / {}", view.temp_min, view.temp_max)),
        ("Humidity", view.humidity.clone()),
        ("Pressure", view.pressure.clone()),
        ("Wind", view.wind_speed.clone()),
        ("Sunrise", view.sunrise.clone()),
        ("Sunset", view.sunset.clone()),
        ("Lat / Lon", format!("{} / {}", view.latitude, view.longitude)),
        ("Scene", scene),
    ];

    let mut out = format!("{}: {}\n", view.city, view.description);
    for (label, value) in rows {
        out.push_str(&format!("  {label:<12} {value}\n"));
    }
    out
}
