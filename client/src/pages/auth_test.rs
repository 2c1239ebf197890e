use super::*;

fn form(password: &str, confirm: &str) -> SignupForm {
    SignupForm {
        name: " Sam Fisher ".to_owned(),
        email: " sam@example.com ".to_owned(),
        gamertag: "sammy".to_owned(),
        password: password.to_owned(),
        confirm: confirm.to_owned(),
    }
}

#[test]
fn validate_signup_rejects_mismatched_passwords() {
    assert_eq!(validate_signup(&form("hunter2", "hunter3")), Err(PASSWORD_MISMATCH));
}

#[test]
fn validate_signup_builds_registration_without_confirmation() {
    let reg = validate_signup(&form("hunter2", "hunter2")).unwrap();
    assert_eq!(reg.name, "Sam Fisher");
    assert_eq!(reg.email, "sam@example.com");
    assert_eq!(reg.gamertag, "sammy");
    assert_eq!(reg.password, "hunter2");
    assert!(reg.favorite_games.is_empty());
    assert!(reg.platforms.is_empty());
}

#[test]
fn validate_signup_keeps_password_whitespace() {
    let reg = validate_signup(&form(" pw ", " pw ")).unwrap();
    assert_eq!(reg.password, " pw ");
}

#[test]
fn login_credentials_trims_email_only() {
    let creds = login_credentials("  a@b.com ", " secret ");
    assert_eq!(creds.email, "a@b.com");
    assert_eq!(creds.password, " secret ");
}

#[test]
fn default_tab_is_login() {
    assert_eq!(AuthTab::default(), AuthTab::Login);
}
