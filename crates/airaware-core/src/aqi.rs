//! Air-quality figures shown on the dashboard.
//!
//! All of it is fixed sample data; nothing is measured or predicted.

/// AQI band, following the US EPA breakpoints the dashboard copy refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AqiCategory {
    Good,
    Moderate,
    Unhealthy,
    Hazardous,
}

impl AqiCategory {
    pub fn from_aqi(aqi: u32) -> Self {
        match aqi {
            0..=50 => AqiCategory::Good,
            51..=100 => AqiCategory::Moderate,
            101..=200 => AqiCategory::Unhealthy,
            _ => AqiCategory::Hazardous,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// Range of index values covered by this band
    pub fn range(&self) -> &'static str {
        match self {
            AqiCategory::Good => "0-50",
            AqiCategory::Moderate => "51-100",
            AqiCategory::Unhealthy => "101-200",
            AqiCategory::Hazardous => "201+",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AqiCategory::Good => {
                "Air quality is considered satisfactory, and air pollution poses little or no risk."
            }
            AqiCategory::Moderate => {
                "Air quality is acceptable; however, some pollutants may be a concern for a small number of people."
            }
            AqiCategory::Unhealthy => {
                "Everyone may begin to experience health effects; members of sensitive groups may experience more serious effects."
            }
            AqiCategory::Hazardous => {
                "Health warnings of emergency conditions. The entire population is more likely to be affected."
            }
        }
    }

    pub const ALL: [AqiCategory; 4] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::Unhealthy,
        AqiCategory::Hazardous,
    ];
}

/// Series shown on the hourly and forecast charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    #[default]
    Aqi,
    Pm25,
    Pm10,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Aqi, Metric::Pm25, Metric::Pm10];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Aqi => "AQI",
            Metric::Pm25 => "PM2.5",
            Metric::Pm10 => "PM10",
        }
    }

    /// Cycle AQI -> PM2.5 -> PM10 -> AQI
    pub fn next(self) -> Self {
        match self {
            Metric::Aqi => Metric::Pm25,
            Metric::Pm25 => Metric::Pm10,
            Metric::Pm10 => Metric::Aqi,
        }
    }

    pub fn hourly(&self, reading: &HourlyReading) -> u32 {
        match self {
            Metric::Aqi => reading.aqi,
            Metric::Pm25 => reading.pm25,
            Metric::Pm10 => reading.pm10,
        }
    }

    pub fn forecast(&self, day: &ForecastDay) -> u32 {
        match self {
            Metric::Aqi => day.aqi,
            Metric::Pm25 => day.pm25,
            Metric::Pm10 => day.pm10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourlyReading {
    pub time: &'static str,
    pub pm25: u32,
    pub pm10: u32,
    pub aqi: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastDay {
    pub day: &'static str,
    pub aqi: u32,
    pub pm25: u32,
    pub pm10: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conditions {
    pub location: &'static str,
    pub temperature_c: i32,
    pub humidity_pct: u32,
    pub wind_kmh: u32,
    pub condition: &'static str,
    pub aqi: u32,
}

impl Conditions {
    pub fn category(&self) -> AqiCategory {
        AqiCategory::from_aqi(self.aqi)
    }
}

pub const HOURLY_READINGS: [HourlyReading; 8] = [
    HourlyReading { time: "00:00", pm25: 12, pm10: 22, aqi: 42 },
    HourlyReading { time: "03:00", pm25: 15, pm10: 25, aqi: 48 },
    HourlyReading { time: "06:00", pm25: 35, pm10: 55, aqi: 78 },
    HourlyReading { time: "09:00", pm25: 45, pm10: 75, aqi: 95 },
    HourlyReading { time: "12:00", pm25: 30, pm10: 60, aqi: 82 },
    HourlyReading { time: "15:00", pm25: 22, pm10: 40, aqi: 65 },
    HourlyReading { time: "18:00", pm25: 18, pm10: 30, aqi: 55 },
    HourlyReading { time: "21:00", pm25: 14, pm10: 24, aqi: 45 },
];

pub const FORECAST: [ForecastDay; 7] = [
    ForecastDay { day: "Today", aqi: 55, pm25: 18, pm10: 30 },
    ForecastDay { day: "Tomorrow", aqi: 62, pm25: 22, pm10: 35 },
    ForecastDay { day: "Wed", aqi: 45, pm25: 14, pm10: 24 },
    ForecastDay { day: "Thu", aqi: 70, pm25: 27, pm10: 42 },
    ForecastDay { day: "Fri", aqi: 58, pm25: 20, pm10: 32 },
    ForecastDay { day: "Sat", aqi: 40, pm25: 12, pm10: 20 },
    ForecastDay { day: "Sun", aqi: 35, pm25: 10, pm10: 18 },
];

pub const CURRENT_CONDITIONS: Conditions = Conditions {
    location: "New York City",
    temperature_c: 22,
    humidity_pct: 65,
    wind_kmh: 12,
    condition: "Partly Cloudy",
    aqi: 55,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollutantReading {
    pub name: &'static str,
    pub value: u32,
    pub unit: &'static str,
}

pub const POLLUTANT_READINGS: [PollutantReading; 4] = [
    PollutantReading { name: "PM2.5", value: 18, unit: "µg/m³" },
    PollutantReading { name: "PM10", value: 32, unit: "µg/m³" },
    PollutantReading { name: "O3 (Ozone)", value: 48, unit: "ppb" },
    PollutantReading { name: "NO2", value: 15, unit: "ppb" },
];

/// Share of current pollution by source, in percent
pub const POLLUTION_SOURCES: [(&str, u64); 4] = [
    ("Traffic Emissions", 45),
    ("Industrial Activity", 30),
    ("Residential Heating", 15),
    ("Natural Sources", 10),
];

pub const HEALTH_RECOMMENDATIONS: [&str; 3] = [
    "It's a moderate air quality day. Sensitive individuals should consider reducing prolonged outdoor activities.",
    "Keep windows closed during peak traffic hours to avoid outdoor pollution entering your home.",
    "Using air purifiers indoors can help reduce exposure to particulate matter.",
];

/// Hourly reading with the highest value of `metric`
pub fn peak_reading(metric: Metric) -> &'static HourlyReading {
    HOURLY_READINGS
        .iter()
        .max_by_key(|r| metric.hourly(r))
        .unwrap_or(&HOURLY_READINGS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_breakpoints() {
        assert_eq!(AqiCategory::from_aqi(0), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(50), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(51), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_aqi(100), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_aqi(101), AqiCategory::Unhealthy);
        assert_eq!(AqiCategory::from_aqi(200), AqiCategory::Unhealthy);
        assert_eq!(AqiCategory::from_aqi(201), AqiCategory::Hazardous);
    }

    #[test]
    fn test_current_conditions_are_moderate() {
        assert_eq!(CURRENT_CONDITIONS.category(), AqiCategory::Moderate);
        assert_eq!(CURRENT_CONDITIONS.category().label(), "Moderate");
    }

    #[test]
    fn test_pollution_sources_sum_to_whole() {
        let total: u64 = POLLUTION_SOURCES.iter().map(|(_, pct)| pct).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_peak_reading() {
        let peak = peak_reading(Metric::Aqi);
        assert_eq!(peak.time, "09:00");
        assert_eq!(peak.aqi, 95);
        assert_eq!(Metric::Pm10.hourly(peak_reading(Metric::Pm10)), 75);
    }

    #[test]
    fn test_metric_cycles_through_all_series() {
        let mut metric = Metric::default();
        let mut seen = Vec::new();
        for _ in 0..Metric::ALL.len() {
            seen.push(metric);
            metric = metric.next();
        }
        assert_eq!(seen, Metric::ALL);
        assert_eq!(metric, Metric::Aqi);
    }

    #[test]
    fn test_metric_selects_forecast_series() {
        let tomorrow = &FORECAST[1];
        assert_eq!(Metric::Aqi.forecast(tomorrow), 62);
        assert_eq!(Metric::Pm25.forecast(tomorrow), 22);
        assert_eq!(Metric::Pm10.forecast(tomorrow), 35);
    }

    #[test]
    fn test_pollutant_readings_match_todays_forecast() {
        let today = &FORECAST[0];
        assert_eq!(POLLUTANT_READINGS[0].value, today.pm25);
        assert_eq!(POLLUTANT_READINGS[1].value, today.pm10);
        assert_eq!(POLLUTANT_READINGS[3].unit, "ppb");
    }
}
