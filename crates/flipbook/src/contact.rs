//! Contact form: field validation, submission status and the EmailJS payload.

use log::debug;
use serde::Serialize;

use crate::error::FormError;

pub const MESSAGE_LIMIT: usize = 1000;
/// How long a success or error banner stays before the form comes back.
pub const STATUS_RESET_MS: u64 = 5000;

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// EmailJS account the site sends through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailJsAccount {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

pub const SITE_ACCOUNT: EmailJsAccount = EmailJsAccount {
    service_id: "service_dzj0fa2",
    template_id: "template_3kqu18e",
    public_key: "JVcDcowpyoY1HnUQO",
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub user_name: String,
    pub user_email: String,
    pub interest: String,
    pub message: String,
}

impl ContactForm {
    /// Live "n/1000 characters" counter text.
    pub fn counter_label(&self) -> String {
        format!("{}/{MESSAGE_LIMIT} characters", self.message.chars().count())
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.user_name.trim().is_empty() {
            return Err(FormError::Missing("user_name"));
        }
        if self.user_email.trim().is_empty() {
            return Err(FormError::Missing("user_email"));
        }
        if !is_plausible_email(self.user_email.trim()) {
            return Err(FormError::InvalidEmail(self.user_email.clone()));
        }
        if self.message.trim().is_empty() {
            return Err(FormError::Missing("message"));
        }
        let len = self.message.chars().count();
        if len > MESSAGE_LIMIT {
            return Err(FormError::MessageTooLong {
                len,
                limit: MESSAGE_LIMIT,
            });
        }
        Ok(())
    }

    /// Validate and wrap into the request body EmailJS expects.
    pub fn into_request(self, account: &EmailJsAccount) -> Result<EmailJsRequest, FormError> {
        self.validate()?;
        Ok(EmailJsRequest {
            service_id: account.service_id.to_string(),
            template_id: account.template_id.to_string(),
            user_id: account.public_key.to_string(),
            template_params: self,
        })
    }
}

/// `local@domain.tld`: one `@`, non-empty local part, a dot inside the domain.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailJsRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: ContactForm,
}

// ─── Submission status ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    Idle,
    Sending,
    Success,
    Error,
}

/// Submission lifecycle. Results schedule a reset back to `Idle`; a reset
/// that was superseded by "Try Again" or a new submission is ignored.
#[derive(Debug, Clone)]
pub struct Submission {
    status: FormStatus,
    generation: u64,
    reset_at: Option<(u64, u64)>,
}

impl Default for Submission {
    fn default() -> Self {
        Self {
            status: FormStatus::Idle,
            generation: 0,
            reset_at: None,
        }
    }
}

impl Submission {
    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// The submit button is disabled while a request is in flight.
    pub fn can_submit(&self) -> bool {
        self.status == FormStatus::Idle
    }

    pub fn begin(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.status = FormStatus::Sending;
        self.reset_at = None;
        true
    }

    /// Record the send result. Returns `(generation, deadline)` for the reset
    /// timer, or `None` if no send was in flight.
    pub fn finish(&mut self, ok: bool, now_ms: u64) -> Option<(u64, u64)> {
        if self.status != FormStatus::Sending {
            return None;
        }
        self.status = if ok { FormStatus::Success } else { FormStatus::Error };
        self.generation += 1;
        let timer = (self.generation, now_ms + STATUS_RESET_MS);
        self.reset_at = Some(timer);
        debug!("contact form {:?}, reset at {}", self.status, timer.1);
        Some(timer)
    }

    pub fn reset_fired(&mut self, generation: u64) -> bool {
        match self.reset_at {
            Some((gen, _)) if gen == generation => {
                self.reset_at = None;
                self.status = FormStatus::Idle;
                true
            }
            _ => false,
        }
    }

    /// "Try Again" after an error.
    pub fn retry(&mut self) {
        if self.status == FormStatus::Error {
            self.status = FormStatus::Idle;
            self.reset_at = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            user_name: "Dr. Jane Roe".into(),
            user_email: "jane.roe@hospital.org".into(),
            interest: String::new(),
            message: "Please send the dental catalogue.".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_required_fields() {
        let mut form = filled();
        form.user_name = "  ".into();
        assert_eq!(form.validate(), Err(FormError::Missing("user_name")));

        let mut form = filled();
        form.message.clear();
        assert_eq!(form.validate(), Err(FormError::Missing("message")));
    }

    #[test]
    fn test_email_shape() {
        for bad in ["jane", "jane@", "@hospital.org", "jane@hospital", "a@b@c.d", "ja ne@x.org", "j@.org"] {
            let mut form = filled();
            form.user_email = bad.into();
            assert!(
                matches!(form.validate(), Err(FormError::InvalidEmail(_))),
                "{bad} accepted"
            );
        }
    }

    #[test]
    fn test_message_limit_counts_chars() {
        let mut form = filled();
        form.message = "é".repeat(MESSAGE_LIMIT);
        assert!(form.validate().is_ok());
        assert_eq!(form.counter_label(), "1000/1000 characters");
        form.message.push('x');
        assert_eq!(
            form.validate(),
            Err(FormError::MessageTooLong {
                len: 1001,
                limit: MESSAGE_LIMIT
            })
        );
    }

    #[test]
    fn test_request_payload() {
        let req = filled().into_request(&SITE_ACCOUNT).unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["service_id"], "service_dzj0fa2");
        assert_eq!(json["user_id"], "JVcDcowpyoY1HnUQO");
        assert_eq!(json["template_params"]["user_email"], "jane.roe@hospital.org");
    }

    #[test]
    fn test_status_cycle() {
        let mut sub = Submission::default();
        assert!(sub.begin());
        assert!(!sub.begin());
        let (gen, deadline) = sub.finish(true, 1000).unwrap();
        assert_eq!(deadline, 1000 + STATUS_RESET_MS);
        assert_eq!(sub.status(), FormStatus::Success);
        assert!(sub.reset_fired(gen));
        assert_eq!(sub.status(), FormStatus::Idle);
    }

    #[test]
    fn test_retry_supersedes_reset() {
        let mut sub = Submission::default();
        sub.begin();
        let (gen, _) = sub.finish(false, 0).unwrap();
        sub.retry();
        assert_eq!(sub.status(), FormStatus::Idle);
        sub.begin();
        assert!(!sub.reset_fired(gen));
        assert_eq!(sub.status(), FormStatus::Sending);
    }
}
