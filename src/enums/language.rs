use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Languages used for market pages and responses.
///
/// Values are the API language codes, e.g. `"english"` or `"schinese"`, both when displayed and
/// when (de)serialized. See <https://partner.steamgames.com/doc/store/localization/languages>.
#[derive(Default, Debug, Display, EnumString, IntoStaticStr, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Language {
    /// Arabic language.
    #[strum(serialize = "arabic")]
    Arabic,
    /// Bulgarian language.
    #[strum(serialize = "bulgarian")]
    Bulgarian,
    /// Chinese (Simplified) language.
    #[strum(serialize = "schinese")]
    ChineseSimplified,
    /// Chinese (Traditional) language.
    #[strum(serialize = "tchinese")]
    ChineseTraditional,
    /// Czech language.
    #[strum(serialize = "czech")]
    Czech,
    /// Danish language.
    #[strum(serialize = "danish")]
    Danish,
    /// Dutch language.
    #[strum(serialize = "dutch")]
    Dutch,
    /// English language. This is the default language.
    #[default]
    #[strum(serialize = "english")]
    English,
    /// Finnish language.
    #[strum(serialize = "finnish")]
    Finnish,
    /// French language.
    #[strum(serialize = "french")]
    French,
    /// German language.
    #[strum(serialize = "german")]
    German,
    /// Greek language.
    #[strum(serialize = "greek")]
    Greek,
    /// Hungarian language.
    #[strum(serialize = "hungarian")]
    Hungarian,
    /// Italian language.
    #[strum(serialize = "italian")]
    Italian,
    /// Japanese language.
    #[strum(serialize = "japanese")]
    Japanese,
    /// Korean language.
    #[strum(serialize = "koreana")]
    Korean,
    /// Norwegian language.
    #[strum(serialize = "norwegian")]
    Norwegian,
    /// Polish language.
    #[strum(serialize = "polish")]
    Polish,
    /// Portuguese language.
    #[strum(serialize = "portuguese")]
    Portuguese,
    /// Portuguese (Brazil) language.
    #[strum(serialize = "brazilian")]
    PortugueseBrazil,
    /// Romanian language.
    #[strum(serialize = "romanian")]
    Romanian,
    /// Russian language.
    #[strum(serialize = "russian")]
    Russian,
    /// Spanish (Spain) language.
    #[strum(serialize = "spanish")]
    SpanishSpain,
    /// Spanish (Latin America) language.
    #[strum(serialize = "latam")]
    SpanishLatinAmerica,
    /// Swedish language.
    #[strum(serialize = "swedish")]
    Swedish,
    /// Thai language.
    #[strum(serialize = "thai")]
    Thai,
    /// Turkish language.
    #[strum(serialize = "turkish")]
    Turkish,
    /// Ukrainian language.
    #[strum(serialize = "ukrainian")]
    Ukrainian,
    /// Vietnamese language.
    #[strum(serialize = "vietnamese")]
    Vietnamese,
}

impl Language {
    /// The code used for the `l` and `language` query parameters.
    pub fn api_language_code(&self) -> &'static str {
        (*self).into()
    }
}

impl TryFrom<String> for Language {
    type Error = strum::ParseError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}
