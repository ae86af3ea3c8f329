use super::*;

fn details() -> EmployeeDetails {
    EmployeeDetails {
        employee_id: 12,
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@corp.test".to_owned(),
    }
}

#[test]
fn default_form_is_sign_in() {
    assert_eq!(AuthScreen::default().form, AuthForm::SignIn);
}

#[test]
fn sign_in_requires_both_fields() {
    let errors = SignInForm { email: "a@b.com".to_owned(), password: String::new() }.validate();
    assert_eq!(errors.field("password"), Some("Password is required."));
    assert_eq!(errors.field("email"), None);
}

#[test]
fn employee_id_must_be_positive_integer() {
    assert_eq!(parse_employee_id(" 12 "), Ok(12));
    assert!(parse_employee_id("").unwrap_err().contains("before fetching"));
    assert!(parse_employee_id("0").unwrap_err().contains("positive"));
    assert!(parse_employee_id("abc").unwrap_err().contains("positive"));
}

#[test]
fn changing_employee_id_unlocks_prefill() {
    let mut form = SignUpForm { employee_id: "12".to_owned(), ..SignUpForm::default() };
    form.apply_prefill(&details());
    assert!(form.prefilled);
    assert_eq!(form.email, "ada@corp.test");

    form.set_employee_id("12");
    assert!(form.prefilled);

    form.set_employee_id("13");
    assert!(!form.prefilled);
    assert!(form.first_name.is_empty());
}

#[test]
fn switching_forms_clears_errors() {
    let mut screen = AuthScreen { errors: FormErrors::general("bad"), ..AuthScreen::default() };
    screen.switch_to(AuthForm::ForgotPassword);
    assert!(screen.errors.is_empty());
    assert_eq!(screen.form, AuthForm::ForgotPassword);
}

#[test]
fn sign_up_success_prefills_sign_in_email() {
    let mut screen = AuthScreen::default();
    screen.switch_to(AuthForm::SignUp);
    screen.sign_up.email = "typed@corp.test".to_owned();
    screen.signed_up(None);
    assert_eq!(screen.form, AuthForm::SignIn);
    assert_eq!(screen.sign_in.email, "typed@corp.test");
    assert!(screen.sign_up.email.is_empty());
}

#[test]
fn forgot_password_success_opens_reset_with_email() {
    let mut screen = AuthScreen::default();
    screen.switch_to(AuthForm::ForgotPassword);
    screen.forgot_email = "me@home.test".to_owned();
    screen.reset_requested();
    assert_eq!(screen.form, AuthForm::ResetPassword);
    assert_eq!(screen.reset.organization_email, "me@home.test");
    assert!(screen.forgot_email.is_empty());
}

#[test]
fn reset_form_requires_all_fields() {
    let form = ResetForm { organization_email: "a@b.com".to_owned(), ..ResetForm::default() };
    assert_eq!(form.validate().general.as_deref(), Some("All fields are required."));
}
