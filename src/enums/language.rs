use std::fmt;
use std::str::FromStr;

/// Languages the Steam community site can render pages in. Sent as the `l` query parameter.
/// 
/// See <https://partner.steamgames.com/doc/store/localization/languages> for more information.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Language {
    /// Chinese (Simplified) language.
    ChineseSimplified,
    /// Czech language.
    Czech,
    /// English language.
    English,
    /// French language.
    French,
    /// German language.
    German,
    /// Japanese language.
    Japanese,
    /// Korean language.
    Korean,
    /// Polish language.
    Polish,
    /// Portuguese (Brazil) language.
    PortugueseBrazil,
    /// Russian language. This is the default language.
    #[default]
    Russian,
    /// Spanish (Spain) language.
    SpanishSpain,
    /// Turkish language.
    Turkish,
    /// Ukrainian language.
    Ukrainian,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.community_code())
    }
}

impl Language {
    const ALL: [Language; 13] = [
        Self::ChineseSimplified,
        Self::Czech,
        Self::English,
        Self::French,
        Self::German,
        Self::Japanese,
        Self::Korean,
        Self::Polish,
        Self::PortugueseBrazil,
        Self::Russian,
        Self::SpanishSpain,
        Self::Turkish,
        Self::Ukrainian,
    ];
    
    /// The value steamcommunity.com expects in the `l` query parameter.
    pub fn community_code(&self) -> &'static str {
        match self {
            Self::ChineseSimplified => "schinese",
            Self::Czech => "czech",
            Self::English => "english",
            Self::French => "french",
            Self::German => "german",
            Self::Japanese => "japanese",
            Self::Korean => "koreana",
            Self::Polish => "polish",
            Self::PortugueseBrazil => "brazilian",
            Self::Russian => "russian",
            Self::SpanishSpain => "spanish",
            Self::Turkish => "turkish",
            Self::Ukrainian => "ukrainian",
        }
    }
}

impl FromStr for Language {
    type Err = crate::error::Error;
    
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        
        Self::ALL
            .into_iter()
            .find(|language| language.community_code().eq_ignore_ascii_case(s))
            .ok_or(crate::error::Error::Parameter("Unknown language"))
    }
}
