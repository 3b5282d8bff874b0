//! Contact form and simulated delivery

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

use crate::error::{FolioError, Result};
use crate::traits::{ContactMessage, MessageSender};
use crate::view::{PortfolioView, SubmitOutcome, ViewEvent};

/// Delay used by [`SimulatedSender`] unless configured otherwise
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

pub const SENDING_LABEL: &str = "Mengirim...";
pub const SENT_MESSAGE: &str = "Pesan berhasil terkirim! Terima kasih telah menghubungi saya.";
pub const FAILED_MESSAGE: &str = "Gagal mengirim pesan. Silakan coba lagi.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

/// Contents of the contact form as typed by the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn with_field(mut self, field: FormField, value: String) -> Self {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
        self
    }

    /// Check required fields and return the message to send
    pub fn validate(&self) -> Result<ContactMessage> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() {
            return Err(FolioError::InvalidInput("Name is required".to_string()));
        }
        if !is_plausible_email(email) {
            return Err(FolioError::InvalidInput(format!(
                "Invalid email address: '{}'",
                email
            )));
        }
        if message.is_empty() {
            return Err(FolioError::InvalidInput("Message is required".to_string()));
        }

        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Stand-in for a real transport: waits, then reports success
#[derive(Debug, Clone)]
pub struct SimulatedSender {
    delay: Duration,
}

impl SimulatedSender {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSender {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl MessageSender for SimulatedSender {
    fn send(&self, message: &ContactMessage) -> Result<()> {
        std::thread::sleep(self.delay);
        info!(
            name = %message.name,
            email = %message.email,
            length = message.message.len(),
            "contact form submitted"
        );
        Ok(())
    }
}

/// Run the submit flow for the form held by `view`
pub fn submit(view: PortfolioView, sender: &dyn MessageSender) -> PortfolioView {
    let view = view.apply(ViewEvent::SubmitStart);

    let outcome = match view.form.validate().and_then(|msg| sender.send(&msg)) {
        Ok(()) => SubmitOutcome::Sent,
        Err(err) => SubmitOutcome::Failed(err.to_string()),
    };

    view.apply(ViewEvent::SubmitSettled(outcome))
}
