// SPDX-License-Identifier: MPL-2.0
//! Typed message keys.
//!
//! Application code names messages through [`Msg`] rather than raw strings, so
//! a misspelt key fails to compile. [`Msg::ALL`] is also the reference list the
//! catalog validates the fallback locale against.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Msg {
    Title,
    Description,
    InputPlaceholder,
    StartGame,
    ErrorUsernameStart,
    ErrorUsernameFetch,
    ErrorGameStart,
    /// Takes an `{error}` parameter.
    ErrorGeneral,
    CountdownWaitingForPartner,
    CountdownNextButton,
    CountdownActionLabel,
    CountdownWaitingForPartnerNext,
    CountdownConnectionLost,
}

impl Msg {
    pub const ALL: [Msg; 13] = [
        Msg::Title,
        Msg::Description,
        Msg::InputPlaceholder,
        Msg::StartGame,
        Msg::ErrorUsernameStart,
        Msg::ErrorUsernameFetch,
        Msg::ErrorGameStart,
        Msg::ErrorGeneral,
        Msg::CountdownWaitingForPartner,
        Msg::CountdownNextButton,
        Msg::CountdownActionLabel,
        Msg::CountdownWaitingForPartnerNext,
        Msg::CountdownConnectionLost,
    ];

    /// Dotted key path of this message in a locale file.
    pub const fn path(self) -> &'static str {
        match self {
            Msg::Title => "title",
            Msg::Description => "description",
            Msg::InputPlaceholder => "inputPlaceholder",
            Msg::StartGame => "startGame",
            Msg::ErrorUsernameStart => "errorUsernameStart",
            Msg::ErrorUsernameFetch => "errorUsernameFetch",
            Msg::ErrorGameStart => "errorGameStart",
            Msg::ErrorGeneral => "errorGeneral",
            Msg::CountdownWaitingForPartner => "countdown.waitingForPartner",
            Msg::CountdownNextButton => "countdown.nextButton",
            Msg::CountdownActionLabel => "countdown.actionLabel",
            Msg::CountdownWaitingForPartnerNext => "countdown.waitingForPartnerNext",
            Msg::CountdownConnectionLost => "countdown.connectionLost",
        }
    }

    /// Finds the typed key for a dotted path.
    pub fn from_path(path: &str) -> Option<Msg> {
        Msg::ALL.into_iter().find(|msg| msg.path() == path)
    }
}

impl fmt::Display for Msg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
