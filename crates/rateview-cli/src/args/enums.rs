use clap::ValueEnum;
use rateview_types::RelativeStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// "3 hours ago"
    Long,
    /// "3h ago"
    Short,
}

impl From<StyleArg> for RelativeStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Long => RelativeStyle::Long,
            StyleArg::Short => RelativeStyle::Short,
        }
    }
}
