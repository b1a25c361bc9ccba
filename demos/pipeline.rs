use std::fmt;

use railway_ops::{stage, Fault, Outcome, Rail};

#[derive(Debug)]
enum SignupError {
    MissingAt(String),
    Taken(String),
    Crashed(Fault),
}

impl fmt::Display for SignupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignupError::MissingAt(raw) => write!(f, "`{raw}` has no @"),
            SignupError::Taken(email) => write!(f, "{email} is already registered"),
            SignupError::Crashed(fault) => write!(f, "signup crashed: {fault}"),
        }
    }
}

impl From<Fault> for SignupError {
    fn from(fault: Fault) -> Self {
        SignupError::Crashed(fault)
    }
}

fn parse_email(raw: &str) -> Outcome<String, SignupError> {
    if raw.contains('@') {
        Outcome::success(raw.trim().to_lowercase())
    } else {
        Outcome::failure(SignupError::MissingAt(raw.to_string()))
    }
}

fn ensure_free(email: &String) -> Result<(), SignupError> {
    if email.starts_with("admin@") {
        Err(SignupError::Taken(email.clone()))
    } else {
        Ok(())
    }
}

fn main() {
    for raw in ["Ada@Example.com", "admin@example.com", "nobody"] {
        let out = parse_email(raw)
            >> stage::tee(|email: &String| println!("checking {email}"))
            >> stage::tee_or_fail(ensure_free)
            >> stage::try_lift(|email: String| email.len());

        match out {
            Outcome::Success(len) => println!("{raw}: ok ({len} chars)"),
            Outcome::Failure(err) => eprintln!("{raw}: {err}"),
        }
    }

    let labelled = Rail::start("grace@example.com")
        .then("parse", parse_email)
        .tee_or_fail("free", ensure_free)
        .lift("greet", |email| format!("welcome, {email}"))
        .finish();

    match labelled {
        Outcome::Success(greeting) => println!("{greeting}"),
        Outcome::Failure(err) => eprintln!("{err}"),
    }
}
