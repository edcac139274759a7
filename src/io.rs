use std::io::Write;

use crate::args::Format;

#[derive(Debug)]
pub enum IoErrorType {
    File(std::io::Error),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    StringOnly(String),
}
impl std::fmt::Display for IoErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorType::File(error) => write!(f, "- File IO Error:\n{}", error),
            IoErrorType::SerdeJson(error) => write!(f, "- JSON Serialization/Deserialization Error:\n{}", error),
            IoErrorType::SerdeYaml(error) => write!(f, "- YAML Serialization/Deserialization Error:\n{}", error),
            IoErrorType::TomlSer(error) => write!(f, "- TOML Serialization Error:\n{}", error),
            IoErrorType::TomlDe(error) => write!(f, "- TOML Deserialization Error:\n{}", error),
            IoErrorType::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}

/// Custom verbose IO error struct.
#[derive(Debug)]
pub struct IoError {
    /// Filepath facing an error.
    pub file: Option<String>,
    /// Error cause.
    pub cause: IoErrorType,
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "- Error with file: {}\n{}", file, self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

/// Open a file with verbose errors.
pub fn open(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::open(path).map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)})
}

/// Create a file with verbose errors.
pub fn create(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::create(path).map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)})
}

/// Read from string with verbose errors
pub fn read_to_string(path: &str) -> IoResult<String> {
    std::fs::read_to_string(path).map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)})
}

/// Write string to file with verbose errors.
pub fn write_to_file(path: &str, buffer: &str) -> IoResult<()> {
    let mut f = create(path)?;
    f.write_all(buffer.as_bytes()).map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)})
}

/// Read in cfg files from the supported filetypes.
pub fn read_cfg_file<T>(path: &str) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    let file_error = |cause| IoError{file: Some(path.to_string()), cause};
    match Format::from_path(path) {
        Some(Format::Json) => serde_json::from_reader(open(path)?).map_err(|error| file_error(IoErrorType::SerdeJson(error))),
        Some(Format::Toml) => toml::from_str(&read_to_string(path)?).map_err(|error| file_error(IoErrorType::TomlDe(error))),
        Some(Format::Yaml) => serde_yaml::from_reader(open(path)?).map_err(|error| file_error(IoErrorType::SerdeYaml(error))),
        None => {
            let supported_filetypes = vec!["json", "toml", "yaml", "yml"];
            let error_string = format!("Unsupported filetype for config file: {}\nSupported filetypes: {:?}", path, supported_filetypes);
            Err(file_error(IoErrorType::StringOnly(error_string)))
        },
    }
}

/// Serialize a value in the requested format.
pub fn to_cfg_string<T>(value: &T, format: Format) -> IoResult<String>
where T: serde::Serialize
{
    let serial_error = |cause| IoError{file: None, cause};
    match format {
        Format::Json => serde_json::to_string_pretty(value).map_err(|error| serial_error(IoErrorType::SerdeJson(error))),
        Format::Toml => toml::to_string_pretty(value).map_err(|error| serial_error(IoErrorType::TomlSer(error))),
        Format::Yaml => serde_yaml::to_string(value).map_err(|error| serial_error(IoErrorType::SerdeYaml(error))),
    }
}
