use ratatui::style::{Color, Modifier, Style};

const EMERALD: Color = Color::Rgb(52, 211, 153);
const EMERALD_DIM: Color = Color::Rgb(16, 122, 87);
const ZINC_100: Color = Color::Rgb(244, 244, 245);
const ZINC_300: Color = Color::Rgb(212, 212, 216);
const ZINC_500: Color = Color::Rgb(113, 113, 122);
const ZINC_700: Color = Color::Rgb(63, 63, 70);
const BACKGROUND: Color = Color::Rgb(10, 10, 10);

#[derive(Debug, Clone)]
pub struct Theme {
    // Overall background color to paint the full frame
    pub background_color: Color,
    // Chat message styles
    pub user_prefix_style: Style,
    pub user_text_style: Style,
    pub model_prefix_style: Style,
    pub model_text_style: Style,
    pub timestamp_style: Style,

    // Chrome
    pub title_style: Style,
    pub subtitle_style: Style,
    pub header_border_style: Style,
    pub typing_indicator_style: Style,
    pub footer_style: Style,

    // Input area
    pub input_border_style: Style,
    pub input_disabled_border_style: Style,
    pub input_title_style: Style,
    pub input_text_style: Style,
    pub input_placeholder_style: Style,
}

impl Theme {
    pub fn dark_default() -> Self {
        Theme {
            background_color: BACKGROUND,
            user_prefix_style: Style::default()
                .fg(EMERALD)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(ZINC_100),
            model_prefix_style: Style::default()
                .fg(ZINC_300)
                .add_modifier(Modifier::BOLD),
            model_text_style: Style::default().fg(ZINC_300),
            timestamp_style: Style::default().fg(ZINC_500),

            title_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            subtitle_style: Style::default().fg(ZINC_500),
            header_border_style: Style::default().fg(ZINC_700),
            typing_indicator_style: Style::default().fg(EMERALD_DIM),
            footer_style: Style::default().fg(ZINC_700),

            input_border_style: Style::default().fg(EMERALD),
            input_disabled_border_style: Style::default().fg(ZINC_700),
            input_title_style: Style::default().fg(ZINC_500),
            input_text_style: Style::default().fg(ZINC_100),
            input_placeholder_style: Style::default().fg(ZINC_500),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark_default()
    }
}
