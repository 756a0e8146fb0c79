//! Contact form data: validation and the WhatsApp deep link it turns into.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor complete todos los campos")]
    MissingField,
    #[error("Por favor ingrese un correo electrónico válido")]
    InvalidEmail,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingField => "missing-field",
            ValidationError::InvalidEmail => "invalid-email",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactForm {
    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            service: self.service.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Stops at the first failure: missing fields are reported before a bad email.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [&self.name, &self.email, &self.phone, &self.service, &self.message];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(ValidationError::MissingField);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    pub fn whatsapp_message(&self) -> String {
        let form = self.trimmed();
        format!(
            "Hola VEFOD, me interesa cotizar un servicio:\n\n\
             *Nombre:* {}\n\
             *Email:* {}\n\
             *Teléfono:* {}\n\
             *Servicio:* {}\n\n\
             *Mensaje:*\n\
             {}\n\n\
             Por favor contáctenme para más información.",
            form.name, form.email, form.phone, form.service, form.message
        )
    }

    pub fn deep_link(&self) -> String {
        whatsapp_link(
            config::WHATSAPP_HOST,
            config::WHATSAPP_RECIPIENT,
            &self.whatsapp_message(),
        )
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn whatsapp_link(host: &str, recipient: &str, text: &str) -> String {
    format!("https://{}/{}/?text={}", host, recipient, urlencoding::encode(text))
}
