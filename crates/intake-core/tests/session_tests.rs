// Event routing across the welcome modal, form panel and closing overlay.

use glam::Vec2;
use intake_core::*;
use std::collections::HashMap;

const HEAD: Vec2 = Vec2::new(0.50, 0.10);
const LEGS: Vec2 = Vec2::new(0.50, 0.80);
const NOWHERE: Vec2 = Vec2::new(0.05, 0.05);

fn session() -> IntakeSession {
    IntakeSession::default()
}

#[test]
fn head_click_opens_form_and_animates_toward_head() {
    let mut s = session();
    let t = s.pointer_down(Some(HEAD));
    assert_eq!(
        t,
        Transition::RegionSelected {
            name: "Cabeça".into(),
            fresh_form: true
        }
    );
    assert_eq!(s.selected_region(), Some("Cabeça"));
    let head = s.registry().get("Cabeça").unwrap().pose();
    assert_eq!(s.animator().destination(), head);
    assert_eq!(s.animator().duration(), 1.2);

    s.frame(0.6);
    assert!(s.animator().is_active());
    assert_eq!(s.frame(0.6), head);
    assert!(!s.animator().is_active());
}

#[test]
fn outside_click_deselects_and_returns_home() {
    let mut s = session();
    s.pointer_down(Some(HEAD));
    s.frame(0.5);
    assert_eq!(s.pointer_down(Some(NOWHERE)), Transition::Deselected);
    assert!(s.form().is_none());
    assert_eq!(s.animator().destination(), s.home_pose());
    assert_eq!(s.pointer_down(None), Transition::Deselected);
}

#[test]
fn region_change_resets_form_but_same_region_keeps_it() {
    let mut s = session();
    s.pointer_down(Some(HEAD));
    s.form_mut().unwrap().toggle_item(3).unwrap();

    let again = s.pointer_down(Some(HEAD));
    assert!(matches!(again, Transition::RegionSelected { fresh_form: false, .. }));
    assert!(s.form().unwrap().is_checked(3));

    let other = s.pointer_down(Some(LEGS));
    assert!(matches!(other, Transition::RegionSelected { fresh_form: true, .. }));
    assert_eq!(s.form().unwrap().region(), "Pernas");
    assert!(!s.form().unwrap().is_checked(3));
}

#[test]
fn submit_then_dismiss_closes_overlay_and_form() {
    for key in [IntakeKey::Escape, IntakeKey::Enter, IntakeKey::Space] {
        let mut flags: HashMap<String, String> = HashMap::new();
        let mut s = session();
        s.pointer_down(Some(HEAD));
        assert!(matches!(s.submit(), Transition::ClosingOpened(_)));
        assert!(s.is_closing_visible());
        assert!(s.form().is_some());

        assert_eq!(s.key_down(key, &mut flags), Some(Transition::ClosingDismissed));
        assert!(!s.is_closing_visible());
        assert!(s.form().is_none());
    }

    let mut s = session();
    s.pointer_down(Some(HEAD));
    s.submit();
    assert_eq!(s.dismiss_closing(), Transition::ClosingDismissed);
    assert!(s.form().is_none());
}

#[test]
fn closing_overlay_blocks_canvas_clicks() {
    let mut s = session();
    s.pointer_down(Some(HEAD));
    s.submit();
    let dest = s.animator().destination();
    assert_eq!(s.pointer_down(Some(LEGS)), Transition::Ignored);
    assert_eq!(s.animator().destination(), dest);
}

#[test]
fn submit_without_form_is_ignored() {
    let mut s = session();
    assert_eq!(s.submit(), Transition::Ignored);
    assert_eq!(s.dismiss_closing(), Transition::Ignored);
}

#[test]
fn escape_closes_form_without_moving_camera() {
    let mut flags: HashMap<String, String> = HashMap::new();
    let mut s = session();
    s.pointer_down(Some(HEAD));
    let dest = s.animator().destination();
    assert_eq!(s.key_down(IntakeKey::Escape, &mut flags), Some(Transition::FormClosed));
    assert!(s.form().is_none());
    assert_eq!(s.animator().destination(), dest);
    assert_eq!(s.key_down(IntakeKey::Enter, &mut flags), None);
    assert_eq!(s.key_down(IntakeKey::Escape, &mut flags), None);
}

#[test]
fn welcome_is_modal_and_dismissed_by_keys() {
    let mut flags: HashMap<String, String> = HashMap::new();
    let mut s = session();
    assert!(s.show_welcome(&flags));
    assert_eq!(s.pointer_down(Some(HEAD)), Transition::Ignored);
    assert_eq!(
        s.key_down(IntakeKey::Space, &mut flags),
        Some(Transition::WelcomeDismissed)
    );
    assert!(!s.welcome().is_visible());
    assert!(matches!(
        s.pointer_down(Some(HEAD)),
        Transition::RegionSelected { .. }
    ));
    // Not configured for once-per-session, so nothing was stored.
    assert!(flags.is_empty());
}

#[test]
fn once_per_session_welcome_is_remembered() {
    let config = ViewerConfig {
        welcome: WelcomeConfig {
            once_per_session: true,
        },
        ..ViewerConfig::default()
    };
    let mut flags: HashMap<String, String> = HashMap::new();
    let mut s = IntakeSession::new(RegionRegistry::builtin(), config.clone());
    assert!(s.show_welcome(&flags));
    s.welcome_mut().set_cpf("123.456.789-00");
    assert_eq!(s.dismiss_welcome(&mut flags), Transition::WelcomeDismissed);
    assert_eq!(flags.get(WELCOME_SEEN_KEY).map(String::as_str), Some("1"));

    let mut reloaded = IntakeSession::new(RegionRegistry::builtin(), config);
    assert!(!reloaded.show_welcome(&flags));
    assert_eq!(reloaded.dismiss_welcome(&mut flags), Transition::Ignored);
}

#[test]
fn client_coordinates_are_normalized_against_viewport() {
    let mut s = session();
    let vp = ViewportRect::new(0.0, 0.0, 1000.0, 800.0);
    let t = s.pointer_down_client(500.0, 80.0, vp);
    assert!(matches!(t, Transition::RegionSelected { ref name, .. } if name == "Cabeça"));
    let t = s.pointer_down_client(500.0, 80.0, ViewportRect::default());
    assert_eq!(t, Transition::Deselected);
}

#[test]
fn closing_message_uses_configured_names() {
    let msg = ClosingMessage {
        patient_name: "Ana".into(),
        appointment_time: "09:15".into(),
    };
    assert_eq!(msg.title(), "Muito obrigado, Ana!");
    assert!(msg.body().ends_with("09:15."));
    assert_eq!(ClosingMessage::default().title(), "Muito obrigado, Kawan!");
}

#[test]
fn key_names_map_to_intake_keys() {
    assert_eq!(IntakeKey::from_key("Escape"), Some(IntakeKey::Escape));
    assert_eq!(IntakeKey::from_key("Enter"), Some(IntakeKey::Enter));
    assert_eq!(IntakeKey::from_key(" "), Some(IntakeKey::Space));
    assert_eq!(IntakeKey::from_key("a"), None);
}
