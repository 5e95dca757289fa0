/// Loading rules for a single secret
pub struct SecretConfig {
    /// Environment variable holding the secret
    pub name: String,
    pub required: bool,
    /// Minimum length (None = no minimum)
    pub min_length: Option<usize>,
}

impl SecretConfig {
    pub fn env_var(name: &str) -> Self {
        Self {
            name: name.to_string(),
            required: true,
            min_length: None,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }
}
