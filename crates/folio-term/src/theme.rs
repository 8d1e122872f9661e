//! Terminal colour themes.
//!
//! A fixed table of named token sets. Lookup is by normalised name:
//! lowercase, with `-` and `_` treated as spaces, so `solarized-dark`,
//! `Solarized_Dark` and `Solarized Dark` are the same theme.

/// An ASCII-art logo printed with a theme, one colour per line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Banner {
    pub art: &'static str,
    pub colors: &'static [&'static str],
    /// In `0.0..=1.0`; blends the banner colours towards the background.
    pub opacity: f32,
}

/// A named set of colour tokens (`#rrggbb`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub foreground: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub prompt: &'static str,
    pub error: &'static str,
    pub border: &'static str,
    pub bar_bg: &'static str,
    /// Gradient stops for the filled part of skill bars.
    pub bar_fill: [&'static str; 2],
    pub banner: Option<Banner>,
}

pub const DEFAULT_THEME: &str = "Default";

const KALI_BLUE: &str = "#367bf0";
const ARCH_DARK: &str = "#1793d1";
const ARCH_LIGHT: &str = "#73d0ff";
const UBUNTU_ORANGE: &str = "#e95420";
const DEBIAN_RED: &str = "#d70a53";
const FEDORA_DARK: &str = "#3c6eb4";
const FEDORA_LIGHT: &str = "#51a2da";

pub static THEMES: [Theme; 13] = [
    Theme {
        name: "Default",
        background: "#0f1419",
        foreground: "#e5e7eb",
        muted: "#9ca3af",
        accent: "#06b6d4",
        prompt: "#10b981",
        error: "#f87171",
        border: "#1e2328",
        bar_bg: "#374151",
        bar_fill: ["#10b981", "#06b6d4"],
        banner: None,
    },
    Theme {
        name: "Dracula",
        background: "#282a36",
        foreground: "#f8f8f2",
        muted: "#6272a4",
        accent: "#bd93f9",
        prompt: "#50fa7b",
        error: "#ff5555",
        border: "#44475a",
        bar_bg: "#44475a",
        bar_fill: ["#50fa7b", "#8be9fd"],
        banner: None,
    },
    Theme {
        name: "Gruvbox",
        background: "#282828",
        foreground: "#ebdbb2",
        muted: "#928374",
        accent: "#fe8019",
        prompt: "#b8bb26",
        error: "#fb4934",
        border: "#3c3836",
        bar_bg: "#3c3836",
        bar_fill: ["#b8bb26", "#83a598"],
        banner: None,
    },
    Theme {
        name: "Nord",
        background: "#2e3440",
        foreground: "#eceff4",
        muted: "#4c566a",
        accent: "#88c0d0",
        prompt: "#a3be8c",
        error: "#bf616a",
        border: "#3b4252",
        bar_bg: "#3b4252",
        bar_fill: ["#a3be8c", "#88c0d0"],
        banner: None,
    },
    Theme {
        name: "Solarized Dark",
        background: "#002b36",
        foreground: "#839496",
        muted: "#586e75",
        accent: "#2aa198",
        prompt: "#859900",
        error: "#dc322f",
        border: "#073642",
        bar_bg: "#073642",
        bar_fill: ["#859900", "#2aa198"],
        banner: None,
    },
    Theme {
        name: "Monokai",
        background: "#272822",
        foreground: "#f8f8f2",
        muted: "#75715e",
        accent: "#66d9ef",
        prompt: "#a6e22e",
        error: "#f92672",
        border: "#3e3d32",
        bar_bg: "#3e3d32",
        bar_fill: ["#a6e22e", "#66d9ef"],
        banner: None,
    },
    Theme {
        name: "Cyberpunk",
        background: "#0a0e27",
        foreground: "#00ff9f",
        muted: "#7b68ee",
        accent: "#ff1493",
        prompt: "#00ffff",
        error: "#ff0055",
        border: "#1a1e3e",
        bar_bg: "#1a1e3e",
        bar_fill: ["#00ffff", "#ff1493"],
        banner: None,
    },
    Theme {
        name: "One Dark",
        background: "#282c34",
        foreground: "#abb2bf",
        muted: "#5c6370",
        accent: "#61afef",
        prompt: "#98c379",
        error: "#e06c75",
        border: "#3e4451",
        bar_bg: "#3e4451",
        bar_fill: ["#98c379", "#61afef"],
        banner: None,
    },
    Theme {
        name: "Kali",
        background: "#0d1117",
        foreground: "#ffffff",
        muted: "#6e7681",
        accent: "#367bf0",
        prompt: "#00ff00",
        error: "#ff0000",
        border: "#30363d",
        bar_bg: "#30363d",
        bar_fill: ["#00ff00", "#367bf0"],
        banner: Some(Banner {
            art: include_str!("../banners/kali.txt"),
            colors: &[KALI_BLUE; 21],
            opacity: 0.25,
        }),
    },
    Theme {
        name: "Arch",
        background: "#0a0e14",
        foreground: "#b3b1ad",
        muted: "#626a73",
        accent: "#1793d1",
        prompt: "#73d0ff",
        error: "#ff3333",
        border: "#1f2430",
        bar_bg: "#1f2430",
        bar_fill: ["#73d0ff", "#1793d1"],
        banner: Some(Banner {
            art: include_str!("../banners/arch.txt"),
            colors: &[
                ARCH_DARK, ARCH_DARK, ARCH_DARK, ARCH_DARK, ARCH_DARK, ARCH_DARK, ARCH_LIGHT,
                ARCH_LIGHT, ARCH_LIGHT, ARCH_LIGHT, ARCH_LIGHT, ARCH_LIGHT, ARCH_LIGHT, ARCH_DARK,
                ARCH_DARK, ARCH_DARK, ARCH_DARK, ARCH_DARK, ARCH_DARK,
            ],
            opacity: 0.3,
        }),
    },
    Theme {
        name: "Ubuntu",
        background: "#300a24",
        foreground: "#ffffff",
        muted: "#aea79f",
        accent: "#e95420",
        prompt: "#77216f",
        error: "#cc0000",
        border: "#5e2750",
        bar_bg: "#5e2750",
        bar_fill: ["#77216f", "#e95420"],
        banner: Some(Banner {
            art: include_str!("../banners/ubuntu.txt"),
            colors: &[UBUNTU_ORANGE; 20],
            opacity: 0.28,
        }),
    },
    Theme {
        name: "Debian",
        background: "#1a0000",
        foreground: "#d0d0d0",
        muted: "#808080",
        accent: "#d70a53",
        prompt: "#ff5555",
        error: "#ff0000",
        border: "#4a0000",
        bar_bg: "#4a0000",
        bar_fill: ["#ff5555", "#d70a53"],
        banner: Some(Banner {
            art: include_str!("../banners/debian.txt"),
            colors: &[DEBIAN_RED; 17],
            opacity: 0.3,
        }),
    },
    Theme {
        name: "Fedora",
        background: "#0b1015",
        foreground: "#e8e8e8",
        muted: "#7c7c7c",
        accent: "#3c6eb4",
        prompt: "#51a2da",
        error: "#cc0000",
        border: "#294172",
        bar_bg: "#294172",
        bar_fill: ["#51a2da", "#3c6eb4"],
        banner: Some(Banner {
            art: include_str!("../banners/fedora.txt"),
            colors: &[
                FEDORA_DARK, FEDORA_DARK, FEDORA_DARK, FEDORA_DARK, FEDORA_LIGHT, FEDORA_LIGHT,
                FEDORA_LIGHT, FEDORA_DARK, FEDORA_DARK, FEDORA_DARK,
            ],
            opacity: 0.3,
        }),
    },
];

/// All theme names in table order.
pub fn theme_names() -> impl Iterator<Item = &'static str> {
    THEMES.iter().map(|t| t.name)
}

pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}

/// Lowercase and collapse `-`/`_` to spaces.
pub fn normalize_theme_name(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect()
}

/// Resolve user input to a theme, or `None` when nothing matches.
pub fn find_theme(input: &str) -> Option<&'static Theme> {
    let wanted = normalize_theme_name(input);
    THEMES
        .iter()
        .find(|t| normalize_theme_name(t.name) == wanted)
}

/// Exact-name lookup, used for persisted preferences.
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.name == name)
}

/// Parse `#rrggbb` into its components.
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
