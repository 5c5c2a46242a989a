use std::fmt;

use ru_date::DateErr;

#[derive(Debug, Clone, PartialEq)]
pub enum ToolErr {
    Date(DateErr),
    Config {
        message: String,
    },
    Args {
        message: String,
    },
    Json {
        message: String,
    },
}

impl From<DateErr> for ToolErr {
    fn from(value: DateErr) -> Self {
        Self::Date(value)
    }
}

impl From<serde_json::Error> for ToolErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json {
            message: value.to_string(),
        }
    }
}

/// Ошибки настроек приходят строкой
impl From<String> for ToolErr {
    fn from(value: String) -> Self {
        Self::Config { message: value }
    }
}

impl fmt::Display for ToolErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolErr::Date(err) => write!(f, "{err}"),
            ToolErr::Config { message } => write!(f, "config: {message}"),
            ToolErr::Args { message } => write!(f, "args: {message}"),
            ToolErr::Json { message } => write!(f, "json: {message}"),
        }
    }
}

impl std::error::Error for ToolErr {}
