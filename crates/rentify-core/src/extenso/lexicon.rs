//! Fixed Portuguese word tables.

/// 0-19. Index 0 is never rendered inside a group.
pub(crate) const UNITS: [&str; 20] = [
    "", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove", "dez", "onze",
    "doze", "treze", "quatorze", "quinze", "dezesseis", "dezessete", "dezoito", "dezenove",
];

/// Indexed by the tens digit; 0 and 1 are covered by [`UNITS`].
pub(crate) const TENS: [&str; 10] = [
    "", "", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta",
    "noventa",
];

/// Indexed by the hundreds digit. Exactly 100 is [`HUNDRED_EXACT`], not "cento".
pub(crate) const HUNDREDS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

pub(crate) const HUNDRED_EXACT: &str = "cem";

pub(crate) const ZERO: &str = "zero";

/// Name attached to a three-digit group by its position.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scale {
    pub singular: &'static str,
    pub plural: &'static str,
}

impl Scale {
    const fn new(singular: &'static str, plural: &'static str) -> Self {
        Scale { singular, plural }
    }

    /// Singular only when the group is exactly one ("um milhão", "dois milhões").
    pub fn word_for(&self, group: u16) -> &'static str {
        if group == 1 {
            self.singular
        } else {
            self.plural
        }
    }
}

/// Short scale, one entry per power of 1000.
///
/// Ten entries reach 10^27, which covers every integer a `Decimal` can hold
/// (at most 29 digits).
pub(crate) const SCALES: [Scale; 10] = [
    Scale::new("", ""),
    Scale::new("mil", "mil"),
    Scale::new("milhão", "milhões"),
    Scale::new("bilhão", "bilhões"),
    Scale::new("trilhão", "trilhões"),
    Scale::new("quatrilhão", "quatrilhões"),
    Scale::new("quintilhão", "quintilhões"),
    Scale::new("sextilhão", "sextilhões"),
    Scale::new("septilhão", "septilhões"),
    Scale::new("octilhão", "octilhões"),
];
