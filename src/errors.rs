use custom_error::custom_error;

custom_error! {
    pub ConfigError
    EmptyFilename = "Filename cannot be empty.",
    InvalidStatusCode{code: u16} = "Invalid HTTP response code: {code}.",
    InvalidVariable{name: String, value: String} = "Failed to parse ${name} value '{value}'.",
    FileRead{path: String, error: std::io::Error} = "Could not read configuration file {path}. Error: {error}",
    FileParse{path: String, error: serde_json::Error} = "Could not parse configuration file {path}. Error: {error}",
}

custom_error! {
    pub MaintenanceError
    ContentRead{path: String, error: std::io::Error} = "Could not read maintenance template {path}: {error}",
    ResponseWrite{path: String, content_type: String} = "Could not serve maintenance template {path}: invalid content type '{content_type}'",
}
