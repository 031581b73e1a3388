// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Screen session tests: gating, screen-local guards and view output.

use dripy::error::AppError;
use dripy::screens::{Command, Session, View};

mod common;
use common::{onboarded_session, test_store};

fn run(session: &mut Session, line: &str) -> View {
    session
        .handle_line(line)
        .unwrap_or_else(|e| panic!("{line:?} failed: {e}"))
        .expect("command should produce a view")
}

#[test]
fn test_gate_requires_login_then_survey() {
    let mut session = Session::new(test_store());

    assert!(matches!(
        session.handle_line("rewards"),
        Err(AppError::LoginRequired)
    ));
    assert!(matches!(run(&mut session, "help"), View::Help(_)));

    assert!(matches!(run(&mut session, "login"), View::Survey(_)));
    assert!(matches!(
        session.handle_line("checklist"),
        Err(AppError::SurveyRequired)
    ));

    assert!(matches!(
        run(&mut session, "survey 2 apartment no no"),
        View::Home(_)
    ));
    assert!(matches!(run(&mut session, "checklist"), View::Checklist(_)));

    // Logging in again lands on home once onboarded
    assert!(matches!(run(&mut session, "login"), View::Home(_)));
}

#[test]
fn test_quit_ends_session() {
    let mut session = Session::new(test_store());
    assert!(session.execute(Command::Quit).unwrap().is_none());
}

#[test]
fn test_invalid_command_is_reported() {
    let mut session = onboarded_session();
    let err = session.handle_line("fly away").unwrap_err();
    assert_eq!(err.code(), "invalid_command");
}

#[test]
fn test_complete_updates_checklist() {
    let mut session = onboarded_session();

    let View::Checklist(view) = run(&mut session, "complete 3") else {
        panic!("expected checklist view");
    };
    assert_eq!(view.progress.completed, 1);
    assert_eq!(view.multiplier, 1);
    assert!(view.actions.iter().find(|a| a.id == "3").unwrap().completed);
    assert_eq!(session.store().user().points, 1220);

    let err = session.handle_line("complete 77").unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn test_event_attended_once_per_session() {
    let mut session = onboarded_session();

    run(&mut session, "attend 2");
    let View::Events(view) = run(&mut session, "attend 2") else {
        panic!("expected events view");
    };

    assert_eq!(session.store().user().points, 1200);
    assert!(view.events.iter().find(|e| e.event.id == "2").unwrap().attended);
    assert!(!view.events.iter().find(|e| e.event.id == "1").unwrap().attended);

    assert!(matches!(
        session.handle_line("attend 42"),
        Err(AppError::NotFound(_))
    ));
    assert_eq!(session.store().user().points, 1200);
}

#[test]
fn test_reward_redeemed_once_per_session() {
    let mut session = onboarded_session();

    // Adidas 15% costs 400
    run(&mut session, "redeem 2");
    let View::Rewards(view) = run(&mut session, "redeem 2") else {
        panic!("expected rewards view");
    };

    assert_eq!(view.points, 750);
    let adidas = view.rewards.iter().find(|r| r.reward.id == "2").unwrap();
    assert!(adidas.redeemed);
    let peloton = view.rewards.iter().find(|r| r.reward.id == "18").unwrap();
    assert!(!peloton.affordable);
}

#[test]
fn test_unaffordable_reward_not_marked_redeemed() {
    let mut session = onboarded_session();

    let View::Rewards(view) = run(&mut session, "redeem 16") else {
        panic!("expected rewards view");
    };

    assert_eq!(view.points, 1150);
    assert!(!view.rewards.iter().any(|r| r.redeemed));
}

#[test]
fn test_bill_upload_shows_impact() {
    let mut session = onboarded_session();

    let View::Impact(view) = run(&mut session, "bill") else {
        panic!("expected impact view");
    };

    assert_eq!(view.uploaded_bills, vec!["/recibo-agua.png".to_string()]);
    assert_eq!(view.history.len(), 6);
    assert_eq!(session.store().user().points, 1300);
}

#[test]
fn test_profile_commands() {
    let mut session = onboarded_session();

    run(&mut session, "pro");
    let View::Profile(view) = run(&mut session, "level-up") else {
        panic!("expected profile view");
    };

    assert!(view.user.is_pro);
    assert_eq!(view.user.points, 2150);
    assert_eq!(view.progress.next_threshold, Some(2500));

    let View::Profile(view) = run(&mut session, "points -2150") else {
        panic!("expected profile view");
    };
    assert_eq!(view.user.points, 0);
    assert_eq!(view.user.level, 1);
}

#[test]
fn test_leaderboard_view_position() {
    let mut session = onboarded_session();

    let View::Leaderboard(view) = run(&mut session, "leaderboard") else {
        panic!("expected leaderboard view");
    };

    assert_eq!(view.position, 3);
    assert_eq!(view.points, 1150);
    assert_eq!(view.members.len(), 8);
}

#[test]
fn test_views_serialize_with_screen_tag() {
    let mut session = onboarded_session();
    let view = run(&mut session, "home");

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["screen"], "home");
    assert_eq!(json["rank"], "silver");
    assert_eq!(json["level"], 3);

    let rewards = serde_json::to_value(run(&mut session, "rewards")).unwrap();
    assert_eq!(rewards["screen"], "rewards");
    assert_eq!(rewards["rewards"][0]["brand"], "Nike");
    assert_eq!(rewards["rewards"][0]["affordable"], true);
}
