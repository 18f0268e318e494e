use std::{collections::BTreeMap, fmt, io, path::Path, sync::Arc};

#[derive(Debug, Clone)]
pub struct ConvertError {
    pub key: &'static str,
    pub args: BTreeMap<&'static str, String>,
    pub causes: Vec<ConvertCause>,
}

#[derive(Debug, Clone)]
pub enum ConvertCause {
    Convert(Box<ConvertError>),
    Std(Arc<dyn std::error::Error + Send + Sync>),
}

impl ConvertError {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            args: BTreeMap::new(),
            causes: Vec::new(),
        }
    }

    pub fn with_arg(mut self, k: &'static str, v: impl ToString) -> Self {
        self.args.insert(k, v.to_string());
        self
    }

    pub fn push_convert(mut self, cause: ConvertError) -> Self {
        self.causes.push(ConvertCause::Convert(Box::new(cause)));
        self
    }

    pub fn push_std(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.causes.push(ConvertCause::Std(Arc::new(cause)));
        self
    }

    pub fn read_input_dir(dir: &Path, cause: io::Error) -> Self {
        Self::new("read-input-dir").with_arg("path", dir.display()).push_std(cause)
    }

    pub fn read_dir_entry(dir: &Path, cause: io::Error) -> Self {
        Self::new("read-dir-entry").with_arg("path", dir.display()).push_std(cause)
    }

    pub fn create_archive(path: &Path, cause: io::Error) -> Self {
        Self::new("create-archive").with_arg("path", path.display()).push_std(cause)
    }

    /// `code` is `None` when the tool died from a signal.
    pub fn tool_failed(program: &str, code: Option<i32>) -> Self {
        let code = code.map_or_else(|| "signal".to_string(), |c| c.to_string());
        Self::new("tool-failed").with_arg("program", program).with_arg("code", code)
    }

    pub fn tool_spawn(program: &str, reason: &str) -> Self {
        Self::new("tool-spawn").with_arg("program", program).with_arg("reason", reason)
    }

    pub fn write_report(path: &Path, cause: ConvertError) -> Self {
        Self::new("write-report").with_arg("path", path.display()).push_convert(cause)
    }

    pub fn save_config(cause: confy::ConfyError) -> Self {
        Self::new("save-config").push_std(cause)
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.key)?;
        let mut first = true;
        for (k, v) in &self.args {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{k}={v}")?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.causes.iter().find_map(|c| match c {
            ConvertCause::Convert(e) => Some(e.as_ref() as &dyn std::error::Error),
            ConvertCause::Std(e) => Some(e.as_ref() as &(dyn std::error::Error + 'static)),
        })
    }
}

impl From<io::Error> for ConvertError {
    fn from(err: io::Error) -> Self {
        ConvertError::new("io-error").push_std(err)
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::new("serde_json::Error").push_std(err)
    }
}
