//! SMS phone verification sub-dialog state.

#[cfg(test)]
#[path = "phone_test.rs"]
mod phone_test;

use super::FormError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhoneVerification {
    pub phone: String,
    pub code: String,
    pub code_sent: bool,
    pub verified: bool,
    pub busy: bool,
}

impl PhoneVerification {
    #[must_use]
    pub fn new(phone: &str) -> Self {
        Self { phone: phone.to_owned(), ..Self::default() }
    }

    /// Editing the phone invalidates a previous verification.
    pub fn set_phone(&mut self, phone: &str) {
        if self.phone != phone {
            self.phone = phone.to_owned();
            self.verified = false;
            self.code_sent = false;
        }
    }

    /// Normalized phone to send a code to.
    ///
    /// # Errors
    ///
    /// The phone must have at least nine digits.
    pub fn send_target(&self) -> Result<String, FormError> {
        let digits: String = self.phone.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
        if digits.chars().filter(char::is_ascii_digit).count() < 9 {
            return Err(FormError::Invalid("Ingrese un teléfono válido".to_owned()));
        }
        Ok(digits)
    }

    /// Phone and code to check.
    ///
    /// # Errors
    ///
    /// A code must have been sent and entered.
    pub fn check_target(&self) -> Result<(String, String), FormError> {
        if !self.code_sent {
            return Err(FormError::Invalid("Primero envíe el código".to_owned()));
        }
        let code = super::required(&self.code, "Código")?;
        Ok((self.send_target()?, code))
    }
}
