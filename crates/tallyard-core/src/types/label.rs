//! Subscale labels.
//!
//! Every question belongs to one of eight fixed subscales, identified in
//! the database and on the wire by short codes: `coh`, `exp`, `conf`,
//! `A/C`, `ind`, `ARO`, `org`, `ctrl`. The codes are matched exactly,
//! case included; anything else is simply an unknown label.

use std::fmt;

/// One of the eight questionnaire subscales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// `coh` — cohesion.
    Coh,
    /// `exp` — expressiveness.
    Exp,
    /// `conf` — conflict. Graded on a reversed scale.
    Conf,
    /// `A/C` — achievement orientation.
    Ac,
    /// `ind` — independence.
    Ind,
    /// `ARO` — active-recreational orientation.
    Aro,
    /// `org` — organization.
    Org,
    /// `ctrl` — control.
    Ctrl,
}

impl Label {
    /// All eight subscales, in table order.
    pub const ALL: [Label; 8] = [
        Label::Coh,
        Label::Exp,
        Label::Conf,
        Label::Ac,
        Label::Ind,
        Label::Aro,
        Label::Org,
        Label::Ctrl,
    ];

    /// The wire/database code for this subscale.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Coh => "coh",
            Label::Exp => "exp",
            Label::Conf => "conf",
            Label::Ac => "A/C",
            Label::Ind => "ind",
            Label::Aro => "ARO",
            Label::Org => "org",
            Label::Ctrl => "ctrl",
        }
    }

    /// Parses a wire/database code. Unknown codes yield `None`, not an error.
    pub fn parse(code: &str) -> Option<Label> {
        match code {
            "coh" => Some(Label::Coh),
            "exp" => Some(Label::Exp),
            "conf" => Some(Label::Conf),
            "A/C" => Some(Label::Ac),
            "ind" => Some(Label::Ind),
            "ARO" => Some(Label::Aro),
            "org" => Some(Label::Org),
            "ctrl" => Some(Label::Ctrl),
            _ => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
