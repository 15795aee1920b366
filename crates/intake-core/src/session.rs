//! Single owner of the viewer's UI state.
//!
//! The web frontend forwards pointer, keyboard and button events here and
//! mirrors the returned [`Transition`] into the DOM. Everything runs on the
//! UI thread; the frame callback calls [`IntakeSession::frame`] every tick.

use crate::animator::CameraAnimator;
use crate::camera::CameraPose;
use crate::constants::{ANIMATION_DURATION_SEC, DEFAULT_APPOINTMENT_TIME, DEFAULT_PATIENT_NAME};
use crate::form::{FormSummary, SymptomForm};
use crate::keys::IntakeKey;
use crate::pick::{resolve_point, ViewportRect};
use crate::region::RegionRegistry;
use crate::welcome::{SessionFlags, WelcomeConfig, WelcomeState};
use glam::Vec2;

/// What changed in response to an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The event had no effect (blocked by a modal or nothing to act on).
    Ignored,
    /// A region was hit; `fresh_form` is true when a new, empty form replaced
    /// the previous one.
    RegionSelected { name: String, fresh_form: bool },
    /// The pointer landed outside every region; the form is closed.
    Deselected,
    WelcomeDismissed,
    FormClosed,
    ClosingOpened(FormSummary),
    /// The confirmation overlay was dismissed and the form closed with it.
    ClosingDismissed,
}

/// Text shown on the closing confirmation.
#[derive(Clone, Debug)]
pub struct ClosingMessage {
    pub patient_name: String,
    pub appointment_time: String,
}

impl Default for ClosingMessage {
    fn default() -> Self {
        Self {
            patient_name: DEFAULT_PATIENT_NAME.to_string(),
            appointment_time: DEFAULT_APPOINTMENT_TIME.to_string(),
        }
    }
}

impl ClosingMessage {
    pub fn title(&self) -> String {
        format!("Muito obrigado, {}!", self.patient_name)
    }

    pub fn body(&self) -> String {
        format!(
            "Você será chamado em breve. Sua consulta está marcada para {}.",
            self.appointment_time
        )
    }
}

/// Startup knobs for a session.
#[derive(Clone, Debug)]
pub struct ViewerConfig {
    pub home_pose: CameraPose,
    pub animation_duration_sec: f32,
    pub welcome: WelcomeConfig,
    pub closing: ClosingMessage,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            home_pose: CameraPose::DEFAULT,
            animation_duration_sec: ANIMATION_DURATION_SEC,
            welcome: WelcomeConfig::default(),
            closing: ClosingMessage::default(),
        }
    }
}

pub struct IntakeSession {
    registry: RegionRegistry,
    home: CameraPose,
    animator: CameraAnimator,
    welcome: WelcomeState,
    closing_message: ClosingMessage,
    form: Option<SymptomForm>,
    closing_visible: bool,
}

impl IntakeSession {
    pub fn new(registry: RegionRegistry, config: ViewerConfig) -> Self {
        Self {
            registry,
            home: config.home_pose,
            animator: CameraAnimator::new(config.home_pose, config.animation_duration_sec),
            welcome: WelcomeState::new(config.welcome),
            closing_message: config.closing,
            form: None,
            closing_visible: false,
        }
    }

    pub fn registry(&self) -> &RegionRegistry {
        &self.registry
    }

    pub fn animator(&self) -> &CameraAnimator {
        &self.animator
    }

    pub fn home_pose(&self) -> CameraPose {
        self.home
    }

    pub fn welcome(&self) -> &WelcomeState {
        &self.welcome
    }

    pub fn welcome_mut(&mut self) -> &mut WelcomeState {
        &mut self.welcome
    }

    pub fn closing_message(&self) -> &ClosingMessage {
        &self.closing_message
    }

    pub fn form(&self) -> Option<&SymptomForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut SymptomForm> {
        self.form.as_mut()
    }

    pub fn selected_region(&self) -> Option<&str> {
        self.form.as_ref().map(|f| f.region())
    }

    pub fn is_closing_visible(&self) -> bool {
        self.closing_visible
    }

    fn is_modal(&self) -> bool {
        self.welcome.is_visible() || self.closing_visible
    }

    /// Show the welcome modal unless the session flag says it was seen.
    pub fn show_welcome(&mut self, flags: &impl SessionFlags) -> bool {
        self.welcome.show(flags)
    }

    pub fn dismiss_welcome(&mut self, flags: &mut impl SessionFlags) -> Transition {
        if self.welcome.dismiss(flags) {
            Transition::WelcomeDismissed
        } else {
            Transition::Ignored
        }
    }

    /// Pointer-down on the canvas at client coordinates.
    pub fn pointer_down_client(
        &mut self,
        client_x: f32,
        client_y: f32,
        viewport: ViewportRect,
    ) -> Transition {
        self.pointer_down(viewport.normalize(client_x, client_y))
    }

    /// Pointer-down at a normalized viewport point; `None` counts as outside.
    pub fn pointer_down(&mut self, point: Option<Vec2>) -> Transition {
        if self.is_modal() {
            return Transition::Ignored;
        }
        let hit = point
            .and_then(|p| resolve_point(&self.registry, p).region())
            .map(|r| (r.name.clone(), r.pose()));
        match hit {
            Some((name, pose)) => {
                self.animator.retarget(pose);
                let fresh_form = self.selected_region() != Some(name.as_str());
                if fresh_form {
                    self.form = Some(SymptomForm::new(name.clone()));
                }
                log::info!("[pick] region={} fresh_form={}", name, fresh_form);
                Transition::RegionSelected { name, fresh_form }
            }
            None => {
                self.animator.retarget(self.home);
                self.form = None;
                log::info!("[pick] outside all regions");
                Transition::Deselected
            }
        }
    }

    /// Route Escape/Enter/Space by overlay priority. `None` means the key was
    /// not consumed and the browser default should run.
    pub fn key_down(&mut self, key: IntakeKey, flags: &mut impl SessionFlags) -> Option<Transition> {
        if self.closing_visible {
            return Some(self.dismiss_closing());
        }
        if self.welcome.is_visible() {
            return Some(self.dismiss_welcome(flags));
        }
        match key {
            IntakeKey::Escape if self.form.is_some() => Some(self.close_form()),
            _ => None,
        }
    }

    /// "Concluir": open the confirmation overlay over the form.
    pub fn submit(&mut self) -> Transition {
        if self.closing_visible {
            return Transition::Ignored;
        }
        match &self.form {
            Some(form) => {
                let summary = form.summary();
                log::info!("[form] submitted {}", summary);
                self.closing_visible = true;
                Transition::ClosingOpened(summary)
            }
            None => Transition::Ignored,
        }
    }

    pub fn dismiss_closing(&mut self) -> Transition {
        if !self.closing_visible {
            return Transition::Ignored;
        }
        self.closing_visible = false;
        self.form = None;
        Transition::ClosingDismissed
    }

    /// Close the form panel; the camera stays where it is.
    pub fn close_form(&mut self) -> Transition {
        if self.form.take().is_some() {
            self.closing_visible = false;
            Transition::FormClosed
        } else {
            Transition::Ignored
        }
    }

    /// Per-frame camera step.
    pub fn frame(&mut self, dt_sec: f32) -> CameraPose {
        self.animator.tick(dt_sec)
    }
}

impl Default for IntakeSession {
    fn default() -> Self {
        Self::new(RegionRegistry::builtin(), ViewerConfig::default())
    }
}
