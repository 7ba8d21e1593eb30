use crate::args::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;

/// Human-readable rendering of a view
pub trait PlainView {
    fn plain(&self, color: bool) -> Result<String>;
}

/// Output settings shared by every handler
pub struct HandlerContext {
    pub format: OutputFormat,
    pub color: bool,
}

impl HandlerContext {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: format == OutputFormat::Plain && std::io::stdout().is_terminal(),
        }
    }

    /// Print one view: a plain line, or one compact JSON document per line
    pub fn render<T>(&self, view: &T) -> Result<()>
    where
        T: Serialize + PlainView,
    {
        println!("{}", self.to_line(view)?);
        Ok(())
    }

    fn to_line<T>(&self, view: &T) -> Result<String>
    where
        T: Serialize + PlainView,
    {
        match self.format {
            OutputFormat::Plain => view.plain(self.color),
            OutputFormat::Json => Ok(serde_json::to_string(view)?),
        }
    }
}
