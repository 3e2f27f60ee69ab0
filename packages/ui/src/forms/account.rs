//! Forms that deal with the signed-in admin's own account: login, signup,
//! the three-step password reset and the profile page.

use api::{LoginRequest, SignupRequest, UpdateProfile, UserProfile};

use super::validate::{is_digits, is_email, is_phone, is_strict_email, is_strong_password, require, FieldErrors};

fn check_email(errors: &mut FieldErrors, email: &str) {
    if require(errors, "email", email, "Email is required") && !is_email(email) {
        errors.add("email", "Invalid email format");
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, &self.email);
        require(&mut errors, "password", &self.password, "Password is required");
        errors
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub password: String,
    pub confirm: String,
}

impl SignupForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Name is required");
        check_email(&mut errors, &self.email);
        if require(&mut errors, "contact", &self.contact, "Contact number is required")
            && !(self.contact.len() == 10 && is_digits(&self.contact))
        {
            errors.add("contact", "Contact number must be exactly 10 digits");
        }
        if require(&mut errors, "password", &self.password, "Password is required")
            && self.password.chars().count() < 6
        {
            errors.add("password", "Password must be at least 6 characters");
        }
        if require(&mut errors, "confirm", &self.confirm, "Confirm Password is required")
            && self.confirm != self.password
        {
            errors.add("confirm", "Passwords must match");
        }
        errors
    }

    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            name: self.name.trim().to_string(),
            contact: self.contact.trim().to_string(),
        }
    }
}

/// Which screen of the password reset flow is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResetStep {
    #[default]
    Email,
    Otp,
    NewPassword,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResetForm {
    pub email: String,
    pub otp: String,
    pub password: String,
    pub confirm: String,
}

impl ResetForm {
    /// Only the fields of `step` are checked.
    pub fn validate(&self, step: ResetStep) -> FieldErrors {
        let mut errors = FieldErrors::new();
        match step {
            ResetStep::Email => check_email(&mut errors, &self.email),
            ResetStep::Otp => {
                if require(&mut errors, "otp", &self.otp, "OTP is required")
                    && self.otp.chars().count() != 6
                {
                    errors.add("otp", "OTP must be exactly 6 digits");
                }
            }
            ResetStep::NewPassword => {
                if require(&mut errors, "password", &self.password, "Password is required")
                    && !is_strong_password(&self.password)
                {
                    errors.add(
                        "password",
                        "Password must be at least 8 characters long, including letters, numbers, and one special character",
                    );
                }
                if require(&mut errors, "confirm", &self.confirm, "Re-enter password is required")
                    && self.confirm != self.password
                {
                    errors.add("confirm", "Passwords do not match");
                }
            }
        }
        errors
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub new_password: String,
    pub confirm: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            contact: profile.contact.clone(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Name is required");
        if require(&mut errors, "email", &self.email, "Email is required") {
            if !is_email(&self.email) {
                errors.add("email", "Invalid email format");
            } else if !is_strict_email(&self.email) {
                errors.add("email", "Email must be a valid email address");
            }
        }
        let contact = self.contact.trim();
        if require(&mut errors, "contact", contact, "Phone is required") {
            if !is_phone(contact) {
                errors.add(
                    "contact",
                    "Phone number must be a valid format (e.g., +1234567890 or 1234567890)",
                );
            } else if contact.len() < 10 {
                errors.add("contact", "Phone number must be at least 10 digits");
            } else if contact.len() > 15 {
                errors.add("contact", "Phone number cannot exceed 15 digits");
            }
        }
        if !self.new_password.is_empty() {
            if self.new_password.chars().count() < 6 {
                errors.add("new_password", "Password must be at least 6 characters");
            }
            if self.confirm.is_empty() {
                errors.add("confirm", "Confirm password is required when new password is provided");
            } else if self.confirm != self.new_password {
                errors.add("confirm", "Passwords must match");
            }
        }
        errors
    }

    pub fn to_update(&self, user_id: i64) -> UpdateProfile {
        UpdateProfile {
            user_id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            contact: self.contact.trim().to_string(),
            password: (!self.new_password.is_empty()).then(|| self.new_password.clone()),
        }
    }
}
