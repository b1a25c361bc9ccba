use railway_ops::ops::try_lift;
use railway_ops::Fault;

#[derive(Debug, PartialEq)]
struct Code(u16);

#[test]
fn message_reads_static_and_formatted_panics() {
    let literal = try_lift((), |_| -> () { panic!("literal") }).unwrap_failure();
    assert_eq!(literal.message(), Some("literal"));

    let n = 3;
    let formatted = try_lift((), |_| -> () { panic!("formatted {n}") }).unwrap_failure();
    assert_eq!(formatted.message(), Some("formatted 3"));
}

#[test]
fn typed_payloads_round_trip() {
    let fault = try_lift((), |_| -> () { std::panic::panic_any(Code(503)) }).unwrap_failure();

    assert!(fault.is::<Code>());
    assert_eq!(fault.message(), None);
    assert_eq!(fault.downcast_ref::<Code>(), Some(&Code(503)));

    let fault = fault.downcast::<String>().unwrap_err();
    assert_eq!(fault.downcast::<Code>().ok(), Some(Code(503)));
}

#[test]
fn display_and_debug() {
    let fault = Fault::new("worker died");
    assert_eq!(fault.to_string(), "stage panicked: worker died");
    assert!(format!("{fault:?}").contains("worker died"));

    let opaque = Fault::new(Code(1));
    assert_eq!(opaque.to_string(), "stage panicked with a non-string payload");
    assert_eq!(format!("{opaque:?}"), "Fault { .. }");
}

#[test]
fn fault_is_an_error() {
    fn assert_error<E: std::error::Error + Send + 'static>(_: &E) {}
    assert_error(&Fault::new("x"));
}

#[test]
fn resume_re_raises_the_original_payload() {
    let fault = Fault::new(Code(7));
    let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| fault.resume()))
        .expect_err("resume must panic");

    assert_eq!(caught.downcast_ref::<Code>(), Some(&Code(7)));
}

#[test]
fn into_payload_returns_the_box() {
    let payload = Fault::new(12_u8).into_payload();
    assert_eq!(payload.downcast_ref::<u8>(), Some(&12));
}
