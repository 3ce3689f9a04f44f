//! Colour-coded rendering of single weather values.

/// ANSI escape sequences used in reports.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub reset: &'static str,
    pub red: &'static str,
    pub blue: &'static str,
    pub green: &'static str,
    pub magenta: &'static str,
    pub bold: &'static str,
}

pub const PALETTE: Palette = Palette {
    reset: "\x1b[0m",
    red: "\x1b[31m",
    blue: "\x1b[34m",
    green: "\x1b[32m",
    magenta: "\x1b[35m",
    bold: "\x1b[1m",
};

/// A measurement that may arrive as a number or as text.
///
/// Text that does not parse becomes NaN, which falls through every threshold.
pub trait Reading {
    fn reading(&self) -> f64;
}

impl Reading for f64 {
    fn reading(&self) -> f64 {
        *self
    }
}

impl Reading for &str {
    fn reading(&self) -> f64 {
        self.trim().parse().unwrap_or(f64::NAN)
    }
}

impl Reading for String {
    fn reading(&self) -> f64 {
        self.as_str().reading()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempClass {
    Hot,
    Cold,
    Moderate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindClass {
    Calm,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainClass {
    Heavy,
    Moderate,
    None,
    Plain,
}

pub fn classify_temp(temp: f64) -> TempClass {
    if temp > 30.0 {
        TempClass::Hot
    } else if temp < 7.0 {
        TempClass::Cold
    } else {
        TempClass::Moderate
    }
}

pub fn classify_wind(wind: f64) -> WindClass {
    if wind < 10.0 {
        WindClass::Calm
    } else {
        WindClass::Plain
    }
}

pub fn classify_rain(rain: f64) -> RainClass {
    if rain > 5.0 {
        RainClass::Heavy
    } else if rain > 1.0 {
        RainClass::Moderate
    } else if rain == 0.0 {
        RainClass::None
    } else {
        RainClass::Plain
    }
}

pub fn color_temp(temp: impl Reading) -> String {
    let temp = temp.reading();
    let color = match classify_temp(temp) {
        TempClass::Hot => PALETTE.red,
        TempClass::Cold => PALETTE.blue,
        TempClass::Moderate => PALETTE.green,
    };
    paint(color, &format!("{temp:.1}°C"))
}

pub fn color_wind(wind: impl Reading) -> String {
    let wind = wind.reading();
    let text = format!("{wind:.1} m/s");
    match classify_wind(wind) {
        WindClass::Calm => paint(PALETTE.green, &text),
        WindClass::Plain => text,
    }
}

pub fn color_rain(rain: impl Reading) -> String {
    let rain = rain.reading();
    let text = format!("{rain:.1} mm");
    match classify_rain(rain) {
        RainClass::Heavy => paint(PALETTE.red, &text),
        RainClass::Moderate => paint(PALETTE.blue, &text),
        RainClass::None => paint(PALETTE.green, &text),
        RainClass::Plain => text,
    }
}

/// Lower-cased description, highlighted for clear skies and thunderstorms.
pub fn color_condition(desc: &str) -> String {
    let desc = desc.to_lowercase();
    if desc.contains("clear") {
        paint(PALETTE.green, &desc)
    } else if desc.contains("thunderstorm") {
        paint(PALETTE.magenta, &format!("⚡ {desc}"))
    } else {
        desc
    }
}

pub fn bold(text: &str) -> String {
    paint(PALETTE.bold, text)
}

fn paint(color: &str, text: &str) -> String {
    format!("{color}{text}{}", PALETTE.reset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_thresholds() {
        assert_eq!(classify_temp(30.1), TempClass::Hot);
        assert_eq!(classify_temp(30.0), TempClass::Moderate);
        assert_eq!(classify_temp(7.0), TempClass::Moderate);
        assert_eq!(classify_temp(6.9), TempClass::Cold);
        assert_eq!(classify_temp(-12.0), TempClass::Cold);
    }

    #[test]
    fn wind_thresholds() {
        assert_eq!(classify_wind(9.9), WindClass::Calm);
        assert_eq!(classify_wind(10.0), WindClass::Plain);
    }

    #[test]
    fn rain_thresholds() {
        assert_eq!(classify_rain(0.0), RainClass::None);
        assert_eq!(classify_rain(0.5), RainClass::Plain);
        assert_eq!(classify_rain(1.0), RainClass::Plain);
        assert_eq!(classify_rain(3.0), RainClass::Moderate);
        assert_eq!(classify_rain(5.0), RainClass::Moderate);
        assert_eq!(classify_rain(6.0), RainClass::Heavy);
    }

    #[test]
    fn temperature_rendering() {
        assert_eq!(color_temp(31.0), "\x1b[31m31.0°C\x1b[0m");
        assert_eq!(color_temp(30.0), "\x1b[32m30.0°C\x1b[0m");
        assert_eq!(color_temp(-2.5), "\x1b[34m-2.5°C\x1b[0m");
    }

    #[test]
    fn wind_rendering() {
        assert_eq!(color_wind(3.2), "\x1b[32m3.2 m/s\x1b[0m");
        assert_eq!(color_wind(12.0), "12.0 m/s");
    }

    #[test]
    fn rain_rendering() {
        assert_eq!(color_rain(0.0), "\x1b[32m0.0 mm\x1b[0m");
        assert_eq!(color_rain(0.5), "0.5 mm");
        assert_eq!(color_rain(3.0), "\x1b[34m3.0 mm\x1b[0m");
        assert_eq!(color_rain(6.0), "\x1b[31m6.0 mm\x1b[0m");
    }

    #[test]
    fn text_inputs_are_parsed_before_classification() {
        assert_eq!(color_temp("31.0"), color_temp(31.0));
        assert_eq!(color_wind(String::from("10")), "10.0 m/s");
        assert_eq!(color_rain(" 0 "), color_rain(0.0));
    }

    #[test]
    fn unparsable_text_is_not_highlighted_as_extreme() {
        assert_eq!(color_temp("n/a"), "\x1b[32mNaN°C\x1b[0m");
        assert_eq!(color_rain("n/a"), "NaN mm");
    }

    #[test]
    fn condition_rendering() {
        assert_eq!(color_condition("Clear Sky"), "\x1b[32mclear sky\x1b[0m");
        assert_eq!(
            color_condition("thunderstorm with rain"),
            "\x1b[35m⚡ thunderstorm with rain\x1b[0m"
        );
        assert_eq!(color_condition("Overcast Clouds"), "overcast clouds");
    }
}
