//! Symptom questionnaire state, keyed by the selected region.

use crate::error::FormError;
use fnv::FnvHashSet;
use std::fmt;

/// One checklist entry. Items with `options` can be expanded to reveal them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymptomItem {
    pub label: &'static str,
    pub options: &'static [&'static str],
}

impl SymptomItem {
    const fn plain(label: &'static str) -> Self {
        Self { label, options: &[] }
    }

    pub fn is_expandable(&self) -> bool {
        !self.options.is_empty()
    }
}

pub const SYMPTOM_ITEMS: &[SymptomItem] = &[
    SymptomItem::plain("Há dor?"),
    SymptomItem::plain("Há sensibilidade?"),
    SymptomItem {
        label: "Paralisia?",
        options: &["Total", "Parcial", "Intermitente"],
    },
    SymptomItem::plain("Falta de fome?"),
    SymptomItem::plain("Movimentos involuntários?"),
    SymptomItem::plain("Há Tontura?"),
    SymptomItem::plain("Há febre?"),
    SymptomItem::plain("Há dificuldade para respirar?"),
    SymptomItem::plain("Há tosse?"),
    SymptomItem::plain("Há secreção nasal?"),
    SymptomItem::plain("Há Cansaço?"),
    SymptomItem::plain("Vômito?"),
    SymptomItem::plain("Sangramento?"),
    SymptomItem::plain("Outro"),
];

/// Index of the pain item; it owns [`PainDetails`].
pub const PAIN_ITEM: usize = 0;
/// Index of the free-text "other" item; it owns the custom symptom text.
pub const OTHER_ITEM: usize = 13;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PainIntensity {
    Mild,
    Moderate,
    Severe,
    VerySevere,
}

impl PainIntensity {
    pub const ALL: [Self; 4] = [Self::Mild, Self::Moderate, Self::Severe, Self::VerySevere];

    pub fn label(self) -> &'static str {
        match self {
            Self::Mild => "Leve",
            Self::Moderate => "Moderada",
            Self::Severe => "Intensa",
            Self::VerySevere => "Muito intensa",
        }
    }

    /// Form value submitted for this choice.
    pub fn value(self) -> &'static str {
        match self {
            Self::Mild => "leve",
            Self::Moderate => "moderada",
            Self::Severe => "intensa",
            Self::VerySevere => "muito_intensa",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PainDurationChoice {
    LessThanADay,
    MoreThanADay,
    OneWeek,
    TwoWeeks,
    SomeMonths,
    Specify,
}

impl PainDurationChoice {
    pub const ALL: [Self; 6] = [
        Self::LessThanADay,
        Self::MoreThanADay,
        Self::OneWeek,
        Self::TwoWeeks,
        Self::SomeMonths,
        Self::Specify,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Self::LessThanADay => "Menos de 1 dia",
            Self::MoreThanADay => "Mais de 1 dia",
            Self::OneWeek => "1 semana",
            Self::TwoWeeks => "2 semanas",
            Self::SomeMonths => "Alguns Meses",
            Self::Specify => "especificar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Specify => "Especificar",
            other => other.value(),
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.value() == value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DurationUnit {
    Minutes,
    #[default]
    Hours,
    Days,
    Weeks,
}

impl DurationUnit {
    pub const ALL: [Self; 4] = [Self::Minutes, Self::Hours, Self::Days, Self::Weeks];

    pub fn value(self) -> &'static str {
        match self {
            Self::Minutes => "minutos",
            Self::Hours => "horas",
            Self::Days => "dias",
            Self::Weeks => "semanas",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.value() == value)
    }
}

/// Sub-fields that only exist while the pain item is checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PainDetails {
    pub intensity: Option<PainIntensity>,
    pub duration_choice: Option<PainDurationChoice>,
    /// Raw text of the numeric amount input.
    pub duration_amount: String,
    pub duration_unit: DurationUnit,
}

impl PainDetails {
    /// Parsed amount; only meaningful for [`PainDurationChoice::Specify`].
    pub fn duration_amount_value(&self) -> Option<u32> {
        self.duration_amount.trim().parse().ok()
    }

    pub fn is_specified(&self) -> bool {
        self.duration_choice == Some(PainDurationChoice::Specify)
    }
}

#[derive(Clone, Debug)]
pub struct SymptomForm {
    region: String,
    checked: Vec<bool>,
    expanded: Option<usize>,
    options: FnvHashSet<(usize, &'static str)>,
    pain: PainDetails,
    custom_symptom: String,
    history_notes: String,
}

impl SymptomForm {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            checked: vec![false; SYMPTOM_ITEMS.len()],
            expanded: None,
            options: FnvHashSet::default(),
            pain: PainDetails::default(),
            custom_symptom: String::new(),
            history_notes: String::new(),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn items(&self) -> &'static [SymptomItem] {
        SYMPTOM_ITEMS
    }

    fn item(&self, index: usize) -> Result<&'static SymptomItem, FormError> {
        SYMPTOM_ITEMS
            .get(index)
            .ok_or(FormError::ItemOutOfRange(index))
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    /// Flip an item; returns the new state. Unchecking pain or "other" drops
    /// the fields they own.
    pub fn toggle_item(&mut self, index: usize) -> Result<bool, FormError> {
        self.item(index)?;
        let now = !self.checked[index];
        self.checked[index] = now;
        if !now {
            match index {
                PAIN_ITEM => self.pain = PainDetails::default(),
                OTHER_ITEM => self.custom_symptom.clear(),
                _ => {}
            }
        }
        Ok(now)
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Open `index`, or collapse it when it is already the open item.
    pub fn toggle_expanded(&mut self, index: usize) -> Result<Option<usize>, FormError> {
        if !self.item(index)?.is_expandable() {
            return Err(FormError::NotExpandable(index));
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
        Ok(self.expanded)
    }

    pub fn is_option_selected(&self, index: usize, option: &str) -> bool {
        self.options
            .iter()
            .any(|(i, o)| *i == index && *o == option)
    }

    pub fn toggle_option(&mut self, index: usize, option: &str) -> Result<bool, FormError> {
        let item = self.item(index)?;
        if !item.is_expandable() {
            return Err(FormError::NotExpandable(index));
        }
        let key = item
            .options
            .iter()
            .find(|o| **o == option)
            .map(|o| (index, *o))
            .ok_or_else(|| FormError::UnknownOption {
                item: index,
                option: option.to_string(),
            })?;
        if self.options.remove(&key) {
            Ok(false)
        } else {
            self.options.insert(key);
            Ok(true)
        }
    }

    pub fn pain(&self) -> &PainDetails {
        &self.pain
    }

    fn pain_mut(&mut self) -> Result<&mut PainDetails, FormError> {
        if !self.is_checked(PAIN_ITEM) {
            return Err(FormError::ItemNotChecked(PAIN_ITEM));
        }
        Ok(&mut self.pain)
    }

    pub fn set_pain_intensity(&mut self, intensity: PainIntensity) -> Result<(), FormError> {
        self.pain_mut()?.intensity = Some(intensity);
        Ok(())
    }

    pub fn set_pain_duration_choice(
        &mut self,
        choice: PainDurationChoice,
    ) -> Result<(), FormError> {
        self.pain_mut()?.duration_choice = Some(choice);
        Ok(())
    }

    pub fn set_pain_duration_amount(&mut self, amount: impl Into<String>) -> Result<(), FormError> {
        self.pain_mut()?.duration_amount = amount.into();
        Ok(())
    }

    pub fn set_pain_duration_unit(&mut self, unit: DurationUnit) -> Result<(), FormError> {
        self.pain_mut()?.duration_unit = unit;
        Ok(())
    }

    pub fn custom_symptom(&self) -> &str {
        &self.custom_symptom
    }

    pub fn set_custom_symptom(&mut self, text: impl Into<String>) -> Result<(), FormError> {
        if !self.is_checked(OTHER_ITEM) {
            return Err(FormError::ItemNotChecked(OTHER_ITEM));
        }
        self.custom_symptom = text.into();
        Ok(())
    }

    pub fn history_notes(&self) -> &str {
        &self.history_notes
    }

    pub fn set_history_notes(&mut self, text: impl Into<String>) {
        self.history_notes = text.into();
    }

    /// "Limpar respostas": everything back to a fresh form for the same region.
    pub fn clear(&mut self) {
        *self = Self::new(std::mem::take(&mut self.region));
        log::debug!("[form] cleared answers for {}", self.region);
    }

    pub fn summary(&self) -> FormSummary {
        let symptoms = SYMPTOM_ITEMS
            .iter()
            .enumerate()
            .filter(|(i, _)| self.checked[*i])
            .map(|(_, it)| it.label)
            .collect();
        let options = SYMPTOM_ITEMS
            .iter()
            .enumerate()
            .flat_map(|(i, it)| {
                it.options
                    .iter()
                    .filter(move |o| self.options.contains(&(i, **o)))
                    .map(move |o| (it.label, *o))
            })
            .collect();
        let non_empty = |s: &str| {
            let t = s.trim();
            (!t.is_empty()).then(|| t.to_string())
        };
        FormSummary {
            region: self.region.clone(),
            symptoms,
            options,
            pain: self.is_checked(PAIN_ITEM).then(|| self.pain.clone()),
            custom_symptom: non_empty(&self.custom_symptom),
            history_notes: non_empty(&self.history_notes),
        }
    }
}

/// Snapshot of the answers, logged when the form is submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSummary {
    pub region: String,
    pub symptoms: Vec<&'static str>,
    pub options: Vec<(&'static str, &'static str)>,
    pub pain: Option<PainDetails>,
    pub custom_symptom: Option<String>,
    pub history_notes: Option<String>,
}

impl fmt::Display for FormSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region={} symptoms=[{}]", self.region, self.symptoms.join(", "))?;
        for (label, option) in &self.options {
            write!(f, " {}={}", label.trim_end_matches('?'), option)?;
        }
        if let Some(p) = &self.pain {
            let intensity = p.intensity.map(|i| i.label()).unwrap_or("-");
            write!(f, " pain.intensity={}", intensity)?;
            match p.duration_choice {
                Some(PainDurationChoice::Specify) => write!(
                    f,
                    " pain.duration={} {}",
                    p.duration_amount_value()
                        .map(|v| v.to_string())
                        .unwrap_or_else(|| "?".to_string()),
                    p.duration_unit.value()
                )?,
                Some(c) => write!(f, " pain.duration={}", c.label())?,
                None => write!(f, " pain.duration=-")?,
            }
        }
        if let Some(s) = &self.custom_symptom {
            write!(f, " other=\"{}\"", s)?;
        }
        if let Some(s) = &self.history_notes {
            write!(f, " history=\"{}\"", s)?;
        }
        Ok(())
    }
}
