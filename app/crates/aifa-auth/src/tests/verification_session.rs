use crate::VerificationSession;

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

#[test]
fn given_new_session_then_request_allowed() {
    let session = VerificationSession::new();

    assert_that!(session.can_request(), eq(true));
    assert_that!(session.remaining_secs(), eq(0));
    assert_that!(session.phone(), none());
}

#[test]
fn given_started_session_when_60_ticks_then_reaches_zero_and_allows_request() {
    // Given
    let mut session = VerificationSession::new();
    session.start("13800000000", 60);
    assert_that!(session.remaining_secs(), eq(60));
    assert_that!(session.can_request(), eq(false));

    // When
    for _ in 0..59 {
        session.tick();
    }
    assert_that!(session.remaining_secs(), eq(1));
    assert_that!(session.can_request(), eq(false));
    let last = session.tick();

    // Then
    assert_that!(last, eq(0));
    assert_that!(session.can_request(), eq(true));
    assert_that!(session.phone(), some(eq("13800000000")));
}

#[test]
fn given_finished_session_when_ticked_again_then_stays_at_zero() {
    let mut session = VerificationSession::new();

    assert_that!(session.tick(), eq(0));
    assert_that!(session.tick(), eq(0));
}

#[test]
fn given_running_session_when_restarted_then_countdown_resets() {
    // Given
    let mut session = VerificationSession::new();
    session.start("13800000000", 60);
    for _ in 0..30 {
        session.tick();
    }

    // When
    session.start("13900000000", 60);

    // Then
    assert_that!(session.remaining_secs(), eq(60));
    assert_that!(session.phone(), some(eq("13900000000")));
}

#[test]
fn given_running_session_when_reset_then_request_allowed() {
    let mut session = VerificationSession::new();
    session.start("13800000000", 60);

    session.reset();

    assert_that!(session.can_request(), eq(true));
}
