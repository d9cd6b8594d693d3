use std::fmt;
use std::str::FromStr;

use phf::phf_map;
use serde::Deserialize;

use crate::error::ConfigError;

/// 主题配色（十六进制 RGB，不带 `#`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// 答案小节标题颜色
    pub accent: &'static str,
    /// 分隔线颜色
    pub rule: &'static str,
}

const BLUE: Palette = Palette {
    accent: "4C84EA",
    rule: "667EEA",
};

static PALETTES: phf::Map<&'static str, Palette> = phf_map! {
    "blue" => BLUE,
    "green" => Palette { accent: "10B981", rule: "34D399" },
    "red" => Palette { accent: "FF4B4B", rule: "FF7B7B" },
};

/// 文档主题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Blue,
    Green,
    Red,
}

impl Theme {
    pub fn name(self) -> &'static str {
        match self {
            Theme::Blue => "blue",
            Theme::Green => "green",
            Theme::Red => "red",
        }
    }

    pub fn palette(self) -> Palette {
        PALETTES.get(self.name()).copied().unwrap_or(BLUE)
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blue" => Ok(Theme::Blue),
            "green" => Ok(Theme::Green),
            "red" => Ok(Theme::Red),
            other => Err(ConfigError::unknown_value("theme", other)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_theme_has_palette() {
        for theme in [Theme::Blue, Theme::Green, Theme::Red] {
            assert!(PALETTES.contains_key(theme.name()));
        }
        assert_eq!(Theme::Blue.palette().accent, "4C84EA");
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!("Green".parse::<Theme>().unwrap(), Theme::Green);
        assert!("purple".parse::<Theme>().is_err());
    }
}
