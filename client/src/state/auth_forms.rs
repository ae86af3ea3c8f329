//! Sign-in screen form model.
//!
//! DESIGN
//! ======
//! Exactly one of the four sub-forms is visible at a time, represented by
//! [`AuthForm`]. Switching forms clears every error. The sign-up form can be
//! prefilled from the HR record; while prefilled, name and organization email
//! are read-only until the employee id changes or the form is reset.

#[cfg(test)]
#[path = "auth_forms_test.rs"]
mod auth_forms_test;

use super::forms::{FormErrors, require};
use crate::net::types::{EmployeeDetails, ResetPasswordRequest, SignUpRequest};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthForm {
    #[default]
    SignIn,
    SignUp,
    ForgotPassword,
    ResetPassword,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn validate(&self) -> FormErrors {
        require(&[("email", "Email", &self.email), ("password", "Password", &self.password)])
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    /// Raw input; parsed with [`parse_employee_id`].
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub contact_information: String,
    pub department: String,
    pub job_title: String,
    pub personal_email: String,
    /// Name and email came from the HR record and are locked.
    pub prefilled: bool,
}

impl SignUpForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = require(&[
            ("firstName", "First name", &self.first_name),
            ("lastName", "Last name", &self.last_name),
            ("email", "Email", &self.email),
            ("password", "Password", &self.password),
            ("contactInformation", "Contact information", &self.contact_information),
            ("department", "Department", &self.department),
            ("jobTitle", "Job title", &self.job_title),
            ("personalEmail", "Personal email", &self.personal_email),
        ]);
        if let Err(message) = parse_employee_id(&self.employee_id) {
            errors.set_field("employeeId", message);
        }
        errors
    }

    /// Edit the employee id; any prefill no longer applies.
    pub fn set_employee_id(&mut self, raw: &str) {
        if raw != self.employee_id {
            self.employee_id = raw.to_owned();
            if self.prefilled {
                self.clear_prefill();
            }
        }
    }

    pub fn apply_prefill(&mut self, details: &EmployeeDetails) {
        self.first_name.clone_from(&details.first_name);
        self.last_name.clone_from(&details.last_name);
        self.email.clone_from(&details.email);
        self.prefilled = true;
    }

    pub fn clear_prefill(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.email.clear();
        self.prefilled = false;
    }

    pub fn to_request(&self) -> SignUpRequest {
        SignUpRequest {
            employee_id: parse_employee_id(&self.employee_id).ok(),
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            contact_information: self.contact_information.trim().to_owned(),
            department: self.department.trim().to_owned(),
            job_title: self.job_title.trim().to_owned(),
            personal_email: self.personal_email.trim().to_owned(),
        }
    }
}

/// Parse an employee id typed by the user.
///
/// # Errors
///
/// Returns the message to show against the field when the input is blank or
/// not a positive integer.
pub fn parse_employee_id(raw: &str) -> Result<i64, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Please enter an Employee ID before fetching details.".to_owned());
    }
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err("Please enter a valid Employee ID (a positive number).".to_owned()),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetForm {
    pub organization_email: String,
    pub token: String,
    pub new_password: String,
}

impl ResetForm {
    pub fn validate(&self) -> FormErrors {
        if [&self.organization_email, &self.token, &self.new_password].iter().any(|v| v.trim().is_empty()) {
            return FormErrors::general("All fields are required.");
        }
        FormErrors::default()
    }

    pub fn to_request(&self) -> ResetPasswordRequest {
        ResetPasswordRequest {
            organization_email: self.organization_email.trim().to_owned(),
            token: self.token.trim().to_owned(),
            new_password: self.new_password.clone(),
        }
    }
}

/// All sign-in screen state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthScreen {
    pub form: AuthForm,
    pub sign_in: SignInForm,
    pub sign_up: SignUpForm,
    pub forgot_email: String,
    pub reset: ResetForm,
    pub errors: FormErrors,
}

impl AuthScreen {
    /// Show `form`, clearing errors. Entering sign-up starts from a blank form.
    pub fn switch_to(&mut self, form: AuthForm) {
        self.errors = FormErrors::default();
        match form {
            AuthForm::SignUp => self.sign_up = SignUpForm::default(),
            AuthForm::ForgotPassword => self.forgot_email.clear(),
            AuthForm::SignIn | AuthForm::ResetPassword => {}
        }
        self.form = form;
    }

    /// Registration succeeded: back to sign-in with the email prefilled.
    pub fn signed_up(&mut self, echoed_email: Option<&str>) {
        let email = echoed_email.map_or_else(|| self.sign_up.email.clone(), str::to_owned);
        self.switch_to(AuthForm::SignIn);
        self.sign_in = SignInForm { email, password: String::new() };
        self.sign_up = SignUpForm::default();
    }

    /// Reset code sent: open the reset form for the same address.
    pub fn reset_requested(&mut self) {
        self.reset = ResetForm { organization_email: self.forgot_email.trim().to_owned(), ..ResetForm::default() };
        self.switch_to(AuthForm::ResetPassword);
        self.forgot_email.clear();
    }

    pub fn password_reset(&mut self) {
        self.reset = ResetForm::default();
        self.switch_to(AuthForm::SignIn);
    }

    pub fn validate_forgot(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        if self.forgot_email.trim().is_empty() {
            errors.set_field("personalEmail", "Please enter your personal email.");
        }
        errors
    }
}
