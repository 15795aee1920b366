// Symptom panel HTML and the actions its controls emit.
//
// Everything here is plain string work over `intake_core` types; `panel.rs`
// owns the DOM side. Controls carry `data-action` (plus `data-index` /
// `data-option` where needed) and one delegated listener per event type
// decodes them with [`PanelAction::parse`].

use intake_core::{
    DurationUnit, FormError, IntakeSession, PainDurationChoice, PainIntensity, SymptomForm,
    Transition, OTHER_ITEM, PAIN_ITEM,
};
use std::fmt::Write;

pub const PAIN_AMOUNT_ID: &str = "pain_value";
pub const PAIN_UNIT_ID: &str = "pain_unit";
pub const CUSTOM_SYMPTOM_ID: &str = "symptom_other";
pub const HISTORY_NOTES_ID: &str = "other_notes";

pub fn item_id(index: usize) -> String {
    format!("symptom_{}", index)
}

pub fn region_id(index: usize) -> String {
    format!("region_{}", index)
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[inline]
fn checked_attr(on: bool) -> &'static str {
    if on {
        " checked"
    } else {
        ""
    }
}

/// Full panel body for the current form.
pub fn render_panel(form: &SymptomForm) -> String {
    let mut html = String::with_capacity(8 * 1024);
    _ = write!(
        html,
        "<header class='panel-header'>\
         <div id='panel-title'>Você selecionou: <strong>{}</strong></div>\
         <div class='panel-subtitle'>Marque tudo o que se aplicar. (Toque grande e fácil)</div>\
         </header><div class='panel-body'>",
        escape_html(form.region())
    );
    for (i, item) in form.items().iter().enumerate() {
        let checked = form.is_checked(i);
        let open = form.expanded() == Some(i);
        let owns_region = i == PAIN_ITEM || i == OTHER_ITEM || item.is_expandable();
        _ = write!(
            html,
            "<div class='item{}'><label class='item-row' for='{id}'>\
             <input type='checkbox' id='{id}' data-action='item' data-index='{i}'{}{}>\
             <span class='item-label'>{}</span>",
            if checked { " checked" } else { "" },
            checked_attr(checked),
            if owns_region {
                format!(" aria-describedby='{}'", region_id(i))
            } else {
                String::new()
            },
            escape_html(item.label),
            id = item_id(i),
            i = i,
        );
        if item.is_expandable() {
            _ = write!(
                html,
                "<button type='button' class='expand' data-action='expand' data-index='{i}' \
                 aria-expanded='{open}' aria-controls='{}'>{}</button>",
                region_id(i),
                if open { "Ocultar" } else { "Detalhes" },
                i = i,
                open = open,
            );
        }
        html.push_str("</label>");

        if i == PAIN_ITEM && checked {
            render_pain(&mut html, form);
        }
        if item.is_expandable() && open {
            _ = write!(
                html,
                "<div id='{}' role='region' class='options' aria-label='Opções de {}'>",
                region_id(i),
                escape_html(&item.label.replace('?', ""))
            );
            for option in item.options {
                _ = write!(
                    html,
                    "<label class='chip'><input type='checkbox' data-action='option' \
                     data-index='{}' data-option='{}'{}><span>{}</span></label>",
                    i,
                    escape_html(option),
                    checked_attr(form.is_option_selected(i, option)),
                    escape_html(option)
                );
            }
            html.push_str("</div>");
        }
        if i == OTHER_ITEM && checked {
            _ = write!(
                html,
                "<div id='{}' role='region' class='other' aria-label='Descrição de outro sintoma'>\
                 <label for='{id}'>Descreva o sintoma:</label>\
                 <input id='{id}' type='text' data-action='custom' value='{}' \
                 placeholder='Ex.: coceira, formigamento, etc.'></div>",
                region_id(i),
                escape_html(form.custom_symptom()),
                id = CUSTOM_SYMPTOM_ID,
            );
        }
        html.push_str("</div>");
    }

    _ = write!(
        html,
        "<div class='history'><label for='{id}'>Já apresentou outras doenças anteriormente?</label>\
         <div class='hint'>Descreva algo importante que não está na lista.</div>\
         <input id='{id}' type='text' data-action='notes' value='{}' \
         placeholder='Ex.: Diabetes, Hipertensão, Asma, etc...'></div></div>",
        escape_html(form.history_notes()),
        id = HISTORY_NOTES_ID,
    );
    html.push_str(
        "<footer class='panel-footer'>\
         <button type='button' class='primary' data-action='submit' \
         aria-label='Concluir e exibir mensagem'>Concluir</button>\
         <button type='button' class='secondary' data-action='clear'>Limpar respostas</button>\
         </footer>",
    );
    html
}

fn render_pain(html: &mut String, form: &SymptomForm) {
    let pain = form.pain();
    _ = write!(
        html,
        "<div id='{}' role='region' class='pain' aria-label='Detalhes de dor'>\
         <div class='group-title'>Intensidade da dor</div>\
         <div role='radiogroup' aria-label='Intensidade da dor' class='chips'>",
        region_id(PAIN_ITEM)
    );
    for v in PainIntensity::ALL {
        _ = write!(
            html,
            "<label class='chip'><input type='radio' name='pain_intensity' value='{}' \
             data-action='intensity' aria-label='{label}'{}><span>{label}</span></label>",
            v.value(),
            checked_attr(pain.intensity == Some(v)),
            label = v.label(),
        );
    }
    html.push_str(
        "</div><div class='group-title'>Duração da dor</div>\
         <div role='radiogroup' aria-label='Duração da dor' class='chips'>",
    );
    for (k, v) in PainDurationChoice::ALL.into_iter().enumerate() {
        _ = write!(
            html,
            "<label class='chip'><input type='radio' id='pain_duration_{}' name='pain_duration' \
             value='{}' data-action='duration' aria-label='{label}'{}><span>{label}</span></label>",
            k,
            v.value(),
            checked_attr(pain.duration_choice == Some(v)),
            label = v.label(),
        );
    }
    html.push_str("</div>");
    if pain.is_specified() {
        _ = write!(
            html,
            "<div class='specify'>\
             <label for='{amount}'>Quantidade</label>\
             <input id='{amount}' type='number' min='0' inputmode='numeric' data-action='amount' \
             value='{}' placeholder='Ex.: 3'>\
             <label for='{unit}'>Unidade</label><select id='{unit}' data-action='unit'>",
            escape_html(&pain.duration_amount),
            amount = PAIN_AMOUNT_ID,
            unit = PAIN_UNIT_ID,
        );
        for u in DurationUnit::ALL {
            _ = write!(
                html,
                "<option value='{v}'{}>{v}</option>",
                if pain.duration_unit == u { " selected" } else { "" },
                v = u.value(),
            );
        }
        html.push_str("</select></div>");
    }
    html.push_str("</div>");
}

/// A decoded panel control event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelAction {
    ToggleItem(usize),
    ToggleExpanded(usize),
    ToggleOption(usize, String),
    Intensity(PainIntensity),
    Duration(PainDurationChoice),
    Amount(String),
    Unit(DurationUnit),
    CustomSymptom(String),
    HistoryNotes(String),
    Submit,
    Clear,
}

impl PanelAction {
    /// Decode a DOM event from its type and the target's `data-*` attributes
    /// and current value. Returns `None` for events the panel does not handle,
    /// e.g. a `click` bubbling from a checkbox (handled on `change`).
    pub fn parse(
        event_type: &str,
        action: &str,
        index: Option<&str>,
        option: Option<&str>,
        value: &str,
    ) -> Option<Self> {
        let index = || index.and_then(|s| s.parse::<usize>().ok());
        match (event_type, action) {
            ("click", "expand") => index().map(Self::ToggleExpanded),
            ("click", "submit") => Some(Self::Submit),
            ("click", "clear") => Some(Self::Clear),
            ("change", "item") => index().map(Self::ToggleItem),
            ("change", "option") => {
                Some(Self::ToggleOption(index()?, option?.to_string()))
            }
            ("change", "intensity") => PainIntensity::from_value(value).map(Self::Intensity),
            ("change", "duration") => PainDurationChoice::from_value(value).map(Self::Duration),
            ("change", "unit") => DurationUnit::from_value(value).map(Self::Unit),
            ("input", "amount") => Some(Self::Amount(value.to_string())),
            ("input", "custom") => Some(Self::CustomSymptom(value.to_string())),
            ("input", "notes") => Some(Self::HistoryNotes(value.to_string())),
            _ => None,
        }
    }
}

/// What the DOM side has to do after an action was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelEffect {
    /// Layout changed: re-render the panel and focus this element id.
    Rerender { focus: Option<String> },
    /// The control already shows the stored value.
    Stored,
    Transition(Transition),
}

pub fn apply_action(
    session: &mut IntakeSession,
    action: PanelAction,
) -> Result<PanelEffect, FormError> {
    if action == PanelAction::Submit {
        return Ok(PanelEffect::Transition(session.submit()));
    }
    let Some(form) = session.form_mut() else {
        return Ok(PanelEffect::Transition(Transition::Ignored));
    };
    let effect = match action {
        PanelAction::ToggleItem(i) => {
            let now = form.toggle_item(i)?;
            let focus = if i == OTHER_ITEM && now {
                CUSTOM_SYMPTOM_ID.to_string()
            } else {
                item_id(i)
            };
            PanelEffect::Rerender { focus: Some(focus) }
        }
        PanelAction::ToggleExpanded(i) => {
            form.toggle_expanded(i)?;
            PanelEffect::Rerender { focus: None }
        }
        PanelAction::ToggleOption(i, option) => {
            form.toggle_option(i, &option)?;
            PanelEffect::Stored
        }
        PanelAction::Intensity(v) => {
            form.set_pain_intensity(v)?;
            PanelEffect::Stored
        }
        PanelAction::Duration(choice) => {
            let was_specified = form.pain().is_specified();
            form.set_pain_duration_choice(choice)?;
            if was_specified != form.pain().is_specified() {
                let k = PainDurationChoice::ALL
                    .iter()
                    .position(|c| *c == choice)
                    .unwrap_or_default();
                PanelEffect::Rerender {
                    focus: Some(format!("pain_duration_{}", k)),
                }
            } else {
                PanelEffect::Stored
            }
        }
        PanelAction::Amount(text) => {
            form.set_pain_duration_amount(text)?;
            PanelEffect::Stored
        }
        PanelAction::Unit(unit) => {
            form.set_pain_duration_unit(unit)?;
            PanelEffect::Stored
        }
        PanelAction::CustomSymptom(text) => {
            form.set_custom_symptom(text)?;
            PanelEffect::Stored
        }
        PanelAction::HistoryNotes(text) => {
            form.set_history_notes(text);
            PanelEffect::Stored
        }
        PanelAction::Clear => {
            form.clear();
            PanelEffect::Rerender {
                focus: Some(item_id(0)),
            }
        }
        PanelAction::Submit => PanelEffect::Transition(Transition::Ignored),
    };
    Ok(effect)
}
